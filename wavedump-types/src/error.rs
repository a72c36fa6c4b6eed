use thiserror::Error;

use crate::{DigitizerKind, RecordBlock};

/// Результат для операций wavedump
pub type WaveResult<T> = std::result::Result<T, WaveError>;

/// Типы ошибок декодирования файлов WaveDump.
#[derive(Debug, Error)]
pub enum WaveError {
    /// Неподдерживаемый тип дигитайзера (до любого I/O)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Поле 0 первого заголовка не совпало с magic выбранного дигитайзера
    #[error(
        "Format mismatch: digitizer {kind} expects header magic {expected}, found {found}"
    )]
    FormatMismatch {
        kind: DigitizerKind,
        expected: u32,
        found: u32,
    },

    /// Поток закончился внутри записи
    #[error(
        "Truncated record #{index}: {block} block needs {expected} bytes, only {available} available"
    )]
    TruncatedRecord {
        index: u64,
        block: RecordBlock,
        expected: usize,
        available: usize,
    },

    /// Запись не соответствует профилю дигитайзера (сторона записи)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveError {
    /// Удобные конструкторы
    pub fn configuration<S: Into<String>>(s: S) -> Self {
        Self::Configuration(s.into())
    }

    pub fn invalid_record<S: Into<String>>(s: S) -> Self {
        Self::InvalidRecord(s.into())
    }

    /// `true` для ошибок, после которых сессия декодирования завершается.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::FormatMismatch { .. } | Self::TruncatedRecord { .. } | Self::Io(_)
        )
    }
}
