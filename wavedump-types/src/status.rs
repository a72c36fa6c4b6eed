use serde::{Deserialize, Serialize};

use crate::WaveError;

/// Часть записи, внутри которой оборвался поток
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordBlock {
    /// Блок из 6 полей заголовка
    Header,
    /// Блок выборок
    Samples,
}

impl std::fmt::Display for RecordBlock {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            RecordBlock::Header => write!(f, "header"),
            RecordBlock::Samples => write!(f, "samples"),
        }
    }
}

/// Итоговое состояние сессии декодирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStatus {
    /// Поток ещё не исчерпан
    #[default]
    InProgress,
    /// Поток закончился ровно на границе записи
    Clean,
    /// Первый заголовок не соответствует дигитайзеру
    FormatMismatch,
    /// Поток оборвался внутри записи
    Truncated,
    /// Ошибка чтения источника (не EOF)
    Io,
}

impl DecodeStatus {
    /// Статус, которым завершается сессия после ошибки `err`.
    pub fn from_error(err: &WaveError) -> Self {
        match err {
            WaveError::FormatMismatch { .. } => DecodeStatus::FormatMismatch,
            WaveError::TruncatedRecord { .. } => DecodeStatus::Truncated,
            _ => DecodeStatus::Io,
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self, DecodeStatus::InProgress)
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, DecodeStatus::Clean)
    }
}

impl std::fmt::Display for DecodeStatus {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            DecodeStatus::InProgress => write!(f, "in progress"),
            DecodeStatus::Clean => write!(f, "clean"),
            DecodeStatus::FormatMismatch => write!(f, "format mismatch"),
            DecodeStatus::Truncated => write!(f, "truncated"),
            DecodeStatus::Io => write!(f, "I/O failure"),
        }
    }
}

/// Счётчики сессии и её итоговый статус.
///
/// `events` считает только полностью декодированные события. Оборванная
/// запись в него не входит.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeSummary {
    /// Успешно декодированных событий
    pub events: u64,
    /// Сумма выборок по всем событиям
    pub samples: u64,
    /// Всего прочитано байт (включая заголовки)
    pub bytes_processed: u64,
    /// Событий с пересечением нуля
    pub zero_crossings: u64,
    /// Итоговый статус
    pub status: DecodeStatus,
}
