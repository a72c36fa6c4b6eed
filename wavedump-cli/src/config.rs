use std::path::PathBuf;

use wavedump_core::{resolve, DigitizerProfile};
use wavedump_types::DigitizerKind;

/// Подробность вывода сессии.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Только баннер и итог
    #[default]
    Silent,
    /// Экстремумы каждого события
    PerEvent,
    /// Дополнительно каждая выборка
    PerSample,
}

/// Полная конфигурация сессии декодирования.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Путь к бинарному файлу WaveDump
    pub source_path: PathBuf,
    /// Тип дигитайзера, записавшего файл
    pub digitizer: DigitizerKind,
    /// Подробность вывода
    pub verbosity: Verbosity,
    /// Строка прогресса каждые N событий (0 = выключено)
    pub progress_interval: u64,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl Verbosity {
    /// Числовой уровень: 0 — тишина, 1 — по событиям, 2 и выше — по выборкам.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Silent,
            1 => Verbosity::PerEvent,
            _ => Verbosity::PerSample,
        }
    }

    pub fn shows_events(&self) -> bool {
        *self >= Verbosity::PerEvent
    }

    pub fn shows_samples(&self) -> bool {
        *self >= Verbosity::PerSample
    }
}

impl DumpConfig {
    /// Конфигурация по умолчанию для дигитайзера `digitizer`.
    pub fn for_digitizer(digitizer: DigitizerKind) -> Self {
        Self {
            source_path: default_source_path(digitizer),
            digitizer,
            verbosity: Verbosity::Silent,
            progress_interval: 10_000,
        }
    }

    /// Профиль дигитайзера для этой сессии.
    pub fn profile(&self) -> DigitizerProfile {
        resolve(self.digitizer)
    }
}

/// Имя файла, которое WaveDump даёт первому каналу.
pub fn default_source_path(digitizer: DigitizerKind) -> PathBuf {
    match digitizer {
        DigitizerKind::Vme => PathBuf::from("wave_0_VME.dat"),
        DigitizerKind::Desktop => PathBuf::from("wave_0.dat"),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для Verbosity, DumpConfig
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for Verbosity {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Verbosity::Silent => write!(f, "silent"),
            Verbosity::PerEvent => write!(f, "event"),
            Verbosity::PerSample => write!(f, "sample"),
        }
    }
}

impl std::str::FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "silent" | "quiet" => Ok(Verbosity::Silent),
            "1" | "event" | "per-event" => Ok(Verbosity::PerEvent),
            "2" | "sample" | "per-sample" => Ok(Verbosity::PerSample),
            _ => Err(format!(
                "Unknown verbosity: '{s}'. Use: silent, event, sample"
            )),
        }
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self::for_digitizer(DigitizerKind::Vme)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
