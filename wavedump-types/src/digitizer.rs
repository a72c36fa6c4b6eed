use serde::{Deserialize, Serialize};

use crate::{WaveError, WaveResult};

/// Семейство дигитайзера, записавшего файл.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitizerKind {
    /// VME-модуль: 110 выборок u16 на событие
    Vme,
    /// Desktop-модуль: 1024 выборки f32 на событие
    Desktop,
}

impl DigitizerKind {
    /// Однобуквенный код, которым дигитайзер обозначается в настройках
    /// WaveDump ('V' / 'D').
    pub fn from_char(c: char) -> WaveResult<Self> {
        match c.to_ascii_uppercase() {
            'V' => Ok(DigitizerKind::Vme),
            'D' => Ok(DigitizerKind::Desktop),
            _ => Err(WaveError::configuration(format!(
                "Unknown digitizer '{c}'. Use: V (VME), D (Desktop)"
            ))),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            DigitizerKind::Vme => 'V',
            DigitizerKind::Desktop => 'D',
        }
    }
}

impl std::fmt::Display for DigitizerKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            DigitizerKind::Vme => write!(f, "VME"),
            DigitizerKind::Desktop => write!(f, "Desktop"),
        }
    }
}

impl std::str::FromStr for DigitizerKind {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v" | "vme" => Ok(DigitizerKind::Vme),
            "d" | "desktop" => Ok(DigitizerKind::Desktop),
            _ => Err(WaveError::configuration(format!(
                "Unknown digitizer '{s}'. Use: vme, desktop"
            ))),
        }
    }
}
