use thiserror::Error;
use wavedump_types::WaveError;

pub type DumpResult<T> = std::result::Result<T, DumpError>;

#[derive(Debug, Error)]
pub enum DumpError {
    /// Ошибка открытия/чтения файла
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка формата WaveDump
    #[error("WaveDump error: {0}")]
    Wave(#[from] WaveError),

    /// Некорректная конфигурация сессии
    #[error("Config error: {0}")]
    Config(String),
}
