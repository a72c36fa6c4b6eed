//! Общие генераторы данных для бенчмарков.

use wavedump_core::{DigitizerProfile, WaveWriter};
use wavedump_types::WaveResult;

/// Синтетический файл из `n_events` событий (пилообразный сигнал).
pub fn build_capture(
    profile: DigitizerProfile,
    n_events: usize,
) -> WaveResult<Vec<u8>> {
    let mut writer = WaveWriter::new(Vec::new(), profile);

    for i in 0..n_events {
        let samples: Vec<f32> = (0..profile.sample_count())
            .map(|j| ((i + j) % 1000) as f32)
            .collect();
        writer.write_event(&samples)?;
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use wavedump_core::{decode_all, resolve};
    use wavedump_types::{DecodeStatus, DigitizerKind};

    use super::*;

    #[test]
    fn test_build_capture_decodes() {
        let profile = resolve(DigitizerKind::Vme);
        let raw = build_capture(profile, 4).unwrap();
        assert_eq!(raw.len(), 4 * profile.record_size());

        let outcome = decode_all(raw.as_slice(), profile);
        assert_eq!(outcome.events.len(), 4);
        assert_eq!(outcome.summary.status, DecodeStatus::Clean);
    }
}
