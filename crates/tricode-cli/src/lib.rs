pub mod clipboard;
pub mod commands;
pub mod csv;
pub mod trace_init;
