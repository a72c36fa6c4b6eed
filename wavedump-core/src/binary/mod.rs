//! Низкоуровневое чтение и запись полей записи (little-endian).

pub mod read;
pub mod write;

pub use read::*;
pub use write::*;
