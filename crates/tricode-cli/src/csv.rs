//! CSV export for conversion results.

use std::io::{self, Write};

use time::format_description::well_known::Rfc3339;

use tricode_core::converter::ConversionResult;

/// Write results as CSV: `original,code,compact,chunks,timestamp`.
pub fn write_results<W: Write>(w: &mut W, results: &[ConversionResult]) -> io::Result<()> {
    writeln!(w, "original,code,compact,chunks,timestamp")?;
    for r in results {
        let ts = r.timestamp.format(&Rfc3339).map_err(io::Error::other)?;
        writeln!(
            w,
            "{},{},{},{},{}",
            escape(&r.original),
            escape(&r.code),
            escape(&r.compact),
            r.length,
            ts
        )?;
    }
    Ok(())
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
