use std::{fs, io::Cursor};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tempfile::NamedTempFile;
use wavedump_core::{decode, decode_all, open, read_all_events, resolve, WaveWriter};
use wavedump_types::{DecodeStatus, DigitizerKind, RawHeader, RecordBlock, WaveError};

// ===========================================================================
// Helpers — детерминированные тест-данные
// ===========================================================================

/// Собирает запись вручную, без WaveWriter: заголовок + сырые байты выборок.
fn raw_record(
    header: [u32; 6],
    sample_bytes: &[u8],
) -> Vec<u8> {
    let mut raw: Vec<u8> = header.iter().flat_map(|f| f.to_le_bytes()).collect();
    raw.extend_from_slice(sample_bytes);
    raw
}

fn u16_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

fn f32_bytes(samples: &[f32]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

// ===========================================================================
// Сценарии
// ===========================================================================

#[test]
fn test_vme_alternating_pattern() {
    // 0xFFFF — битовый образ -1 в 16 битах; VME-выборка беззнаковая
    let pattern: Vec<u16> = (0..110)
        .map(|i| if i % 2 == 0 { 0xFFFF } else { 1 })
        .collect();
    let raw = raw_record([244, 0, 0, 0, 0, 0], &u16_bytes(&pattern));

    let mut reader = decode(Cursor::new(raw), resolve(DigitizerKind::Vme));
    let events = read_all_events(&mut reader).unwrap();

    assert_eq!(events.len(), 1);
    let e = &events[0];
    assert_eq!(e.index, 1);
    assert_eq!(e.samples.len(), 110);
    assert_eq!(e.min_sample, 1.0);
    assert_eq!(e.max_sample, 65535.0);
    assert!(!e.zero_crossing, "u16 samples are never negative");
    assert_eq!(reader.summary().events, 1);
    assert_eq!(reader.summary().status, DecodeStatus::Clean);
}

#[test]
fn test_alternating_minus_one_one_crosses_zero() {
    let pattern: Vec<f32> = (0..1024)
        .map(|i| if i % 2 == 0 { -1.0 } else { 1.0 })
        .collect();
    let raw = raw_record([4120, 0, 0, 0, 0, 0], &f32_bytes(&pattern));

    let outcome = decode_all(Cursor::new(raw), resolve(DigitizerKind::Desktop));

    assert!(outcome.error.is_none());
    assert_eq!(outcome.events.len(), 1);
    let e = &outcome.events[0];
    assert_eq!(e.min_sample, -1.0);
    assert_eq!(e.max_sample, 1.0);
    assert!(e.zero_crossing);
    assert_eq!(outcome.summary.events, 1);
    assert_eq!(outcome.summary.zero_crossings, 1);
    assert_eq!(outcome.summary.status, DecodeStatus::Clean);
}

#[test]
fn test_desktop_constant_pattern() {
    let raw = raw_record([4120, 0, 0, 0, 0, 0], &f32_bytes(&[2.5; 1024]));

    let outcome = decode_all(Cursor::new(raw), resolve(DigitizerKind::Desktop));

    assert_eq!(outcome.events.len(), 1);
    let e = &outcome.events[0];
    assert_eq!(e.samples.len(), 1024);
    assert_eq!(e.min_sample, 2.5);
    assert_eq!(e.max_sample, 2.5);
    assert!(!e.zero_crossing);
}

#[test]
fn test_vme_with_desktop_magic() {
    let raw = raw_record([4120, 0, 0, 0, 0, 0], &u16_bytes(&[0; 110]));

    let outcome = decode_all(Cursor::new(raw), resolve(DigitizerKind::Vme));

    assert!(outcome.events.is_empty());
    assert_eq!(outcome.summary.events, 0);
    assert_eq!(outcome.summary.status, DecodeStatus::FormatMismatch);
    assert!(matches!(
        outcome.error,
        Some(WaveError::FormatMismatch {
            kind: DigitizerKind::Vme,
            expected: 244,
            found: 4120,
        })
    ));
}

// ===========================================================================
// Свойства
// ===========================================================================

#[test]
fn test_sample_counts_per_kind() {
    let mut rng = StdRng::seed_from_u64(7);

    for kind in [DigitizerKind::Vme, DigitizerKind::Desktop] {
        let profile = resolve(kind);
        let mut writer = WaveWriter::new(Vec::new(), profile);

        for _ in 0..5 {
            let samples: Vec<f32> = (0..profile.sample_count())
                .map(|_| match kind {
                    DigitizerKind::Vme => rng.gen_range(0..=u16::MAX) as f32,
                    DigitizerKind::Desktop => rng.gen_range(-100.0f32..100.0),
                })
                .collect();
            writer.write_event(&samples).unwrap();
        }

        let raw = writer.finish().unwrap();
        let outcome = decode_all(Cursor::new(raw), profile);

        assert_eq!(outcome.summary.status, DecodeStatus::Clean);
        assert_eq!(outcome.events.len(), 5);
        for (i, e) in outcome.events.iter().enumerate() {
            assert_eq!(e.index, i as u64 + 1);
            assert_eq!(e.samples.len(), profile.sample_count());
        }
    }
}

#[test]
fn test_extrema_and_zero_crossing_random() {
    let mut rng = StdRng::seed_from_u64(42);
    let profile = resolve(DigitizerKind::Desktop);
    let mut writer = WaveWriter::new(Vec::new(), profile);
    let mut expected = Vec::new();

    for n in 0..20 {
        // Чередуем симметричный, положительный и отрицательный диапазоны
        let (lo, hi) = match n % 3 {
            0 => (-5.0f32, 5.0f32),
            1 => (0.0, 5.0),
            _ => (-5.0, 0.0),
        };
        let samples: Vec<f32> = (0..profile.sample_count())
            .map(|_| rng.gen_range(lo..=hi))
            .collect();

        let min = samples.iter().copied().fold(f32::INFINITY, f32::min);
        let max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        expected.push((min, max));

        writer.write_event(&samples).unwrap();
    }

    let outcome = decode_all(Cursor::new(writer.finish().unwrap()), profile);
    assert_eq!(outcome.events.len(), 20);

    for (e, (min, max)) in outcome.events.iter().zip(expected) {
        assert_eq!(e.min_sample, min);
        assert_eq!(e.max_sample, max);
        assert_eq!(e.zero_crossing, min < 0.0 && max > 0.0);
    }
}

#[test]
fn test_magic_checked_once() {
    let profile = resolve(DigitizerKind::Vme);
    let mut raw = raw_record([244, 1, 2, 3, 4, 5], &u16_bytes(&[100; 110]));
    raw.extend(raw_record([0, 0, 0, 0, 0, 0], &u16_bytes(&[200; 110])));
    raw.extend(raw_record([4120, 9, 9, 9, 9, 9], &u16_bytes(&[300; 110])));

    let mut reader = decode(Cursor::new(raw), profile);
    let events = read_all_events(&mut reader).unwrap();

    assert_eq!(events.len(), 3);
    assert_eq!(events[2].max_sample, 300.0);
    assert_eq!(
        reader.last_header(),
        Some(&RawHeader::new([4120, 9, 9, 9, 9, 9]))
    );
    assert_eq!(reader.summary().status, DecodeStatus::Clean);
}

#[test]
fn test_truncated_second_record() {
    let profile = resolve(DigitizerKind::Vme);
    let mut raw = raw_record([244, 0, 0, 0, 0, 0], &u16_bytes(&[10; 110]));
    // Второй record: полный заголовок, половина выборок
    raw.extend(raw_record([244, 0, 0, 0, 0, 0], &u16_bytes(&[20; 55])));

    let outcome = decode_all(Cursor::new(raw), profile);

    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].max_sample, 10.0);
    assert_eq!(outcome.summary.events, 1);
    assert_eq!(outcome.summary.status, DecodeStatus::Truncated);
    assert!(matches!(
        outcome.error,
        Some(WaveError::TruncatedRecord {
            index: 2,
            block: RecordBlock::Samples,
            expected: 220,
            available: 110,
        })
    ));
}

#[test]
fn test_empty_stream() {
    let outcome = decode_all(Cursor::new(Vec::new()), resolve(DigitizerKind::Vme));

    assert!(outcome.events.is_empty());
    assert!(outcome.error.is_none());
    assert_eq!(outcome.summary.status, DecodeStatus::Clean);
}

// ===========================================================================
// Файловый ввод-вывод
// ===========================================================================

#[test]
fn test_file_round_trip() {
    let temp_file = NamedTempFile::new().unwrap();
    let profile = resolve(DigitizerKind::Desktop);

    {
        let file = fs::File::create(temp_file.path()).unwrap();
        let mut writer = WaveWriter::new(file, profile);
        for i in 0..50 {
            writer.write_event(&vec![i as f32 - 25.0; 1024]).unwrap();
        }
        writer.finish().unwrap();
    }

    let size = fs::metadata(temp_file.path()).unwrap().len();
    assert_eq!(size, 50 * profile.record_size() as u64);

    let mut reader = open(temp_file.path(), profile).unwrap();
    let events = read_all_events(&mut reader).unwrap();

    assert_eq!(events.len(), 50);
    assert_eq!(events[0].min_sample, -25.0);
    assert_eq!(events[49].max_sample, 24.0);
    assert_eq!(reader.summary().bytes_processed, size);
}

#[test]
fn test_open_missing_file() {
    let err = open("/nonexistent/wave_0.dat", resolve(DigitizerKind::Vme))
        .err()
        .unwrap();
    assert!(matches!(err, WaveError::Io(_)));
}
