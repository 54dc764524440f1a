//! Best-effort clipboard sink.
//!
//! Copy failures (headless session, no display server) are swallowed and
//! reported as `false`; clipboard availability never affects conversion
//! results or statistics.

use tracing::debug;

pub fn copy(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(e) => {
                debug!("clipboard set failed: {e}");
                false
            }
        },
        Err(e) => {
            debug!("clipboard unavailable: {e}");
            false
        }
    }
}
