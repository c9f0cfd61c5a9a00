// src/export/mod.rs

pub mod csv;

pub use self::csv::{read_rows, write_rows};
