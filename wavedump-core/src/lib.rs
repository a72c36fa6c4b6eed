//! Библиотека формата WaveDump
//!
//! Декодирование бинарных файлов, которые пишет WaveDump для VME и Desktop
//! дигитайзеров: поток записей «заголовок из 6 полей + блок выборок» без
//! заголовка файла.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use std::fs::File;
//!
//! use wavedump_core::{decode, resolve};
//! use wavedump_types::DigitizerKind;
//!
//! let file = File::open("wave_0.dat")?;
//! let mut reader = decode(file, resolve(DigitizerKind::Desktop));
//!
//! for event in reader.by_ref() {
//!     let event = event?;
//!     println!("#{} min={} max={}", event.index, event.min_sample, event.max_sample);
//! }
//!
//! println!("{} events", reader.summary().events);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod profile;
pub mod serialization;

pub use binary::*;
pub use profile::*;
pub use serialization::*;
pub use wavedump_types::error;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
