//! Профили дигитайзеров WaveDump
//!
//! Геометрия записи полностью определяется типом дигитайзера:
//!
//! ```text
//! [0..24]   HEADER   6 × u32 LE  — поле 0 первой записи = magic
//! [24..]    SAMPLES  N × (u16 | f32) LE
//! ```
//!
//! | Дигитайзер | N    | magic | выборка |
//! |------------|------|-------|---------|
//! | VME        | 110  | 244   | u16     |
//! | Desktop    | 1024 | 4120  | f32     |

use log::debug;
use wavedump_types::{
    DigitizerKind, RawHeader, SampleEncoding, WaveError, WaveResult, HEADER_SIZE,
};

/// Выборок на событие у VME дигитайзера
pub const VME_SAMPLE_COUNT: usize = 110;

/// Magic в поле 0 заголовка VME
pub const VME_HEADER_MAGIC: u32 = 244;

/// Выборок на событие у Desktop дигитайзера
pub const DESKTOP_SAMPLE_COUNT: usize = 1024;

/// Magic в поле 0 заголовка Desktop
pub const DESKTOP_HEADER_MAGIC: u32 = 4120;

/// Неизменяемый профиль дигитайзера.
///
/// Поля закрыты: профиль можно получить только из [`DigitizerKind`], поэтому
/// других комбинаций «количество выборок / magic / кодировка» не бывает.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitizerProfile {
    kind: DigitizerKind,
    sample_count: usize,
    header_magic: u32,
    sample_encoding: SampleEncoding,
}

/// Возвращает профиль для типа дигитайзера.
pub const fn resolve(kind: DigitizerKind) -> DigitizerProfile {
    DigitizerProfile::for_kind(kind)
}

impl DigitizerProfile {
    pub const fn for_kind(kind: DigitizerKind) -> Self {
        match kind {
            DigitizerKind::Vme => Self {
                kind,
                sample_count: VME_SAMPLE_COUNT,
                header_magic: VME_HEADER_MAGIC,
                sample_encoding: SampleEncoding::U16,
            },
            DigitizerKind::Desktop => Self {
                kind,
                sample_count: DESKTOP_SAMPLE_COUNT,
                header_magic: DESKTOP_HEADER_MAGIC,
                sample_encoding: SampleEncoding::F32,
            },
        }
    }

    pub fn kind(&self) -> DigitizerKind {
        self.kind
    }

    /// Количество выборок в каждом событии
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Ожидаемое значение поля 0 первого заголовка
    pub fn header_magic(&self) -> u32 {
        self.header_magic
    }

    pub fn sample_encoding(&self) -> SampleEncoding {
        self.sample_encoding
    }

    /// Размер одной выборки в байтах
    pub fn sample_size(&self) -> usize {
        self.sample_encoding.sample_size()
    }

    /// Размер блока выборок одной записи в байтах
    pub fn samples_block_size(&self) -> usize {
        self.sample_count * self.sample_size()
    }

    /// Полный размер записи (заголовок + выборки)
    pub fn record_size(&self) -> usize {
        HEADER_SIZE + self.samples_block_size()
    }

    /// Сверяет поле 0 заголовка с magic профиля.
    pub fn check_magic(
        &self,
        header: &RawHeader,
    ) -> WaveResult<()> {
        let found = header.magic();

        if found != self.header_magic {
            return Err(WaveError::FormatMismatch {
                kind: self.kind,
                expected: self.header_magic,
                found,
            });
        }

        debug!("Header magic {found} matches {} digitizer", self.kind);

        Ok(())
    }
}

impl From<DigitizerKind> for DigitizerProfile {
    fn from(kind: DigitizerKind) -> Self {
        Self::for_kind(kind)
    }
}
