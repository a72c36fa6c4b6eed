//! Пример: чтение файла WaveDump через WaveReader
//!
//! Демонстрирует:
//! - проверку magic первой записи
//! - итерацию событий с экстремумами
//! - итоговый статус сессии

use wavedump_core::{open, resolve};
use wavedump_types::DigitizerKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = "wave_0_VME.dat";
    let mut reader = open(input_path, resolve(DigitizerKind::Vme))?;

    for result in reader.by_ref().take(3) {
        match result {
            Ok(e) => println!(
                "  [{}] min={} max={} zero_crossing={}",
                e.index, e.min_sample, e.max_sample, e.zero_crossing
            ),
            Err(e) => {
                eprintln!("✗ {e}");
                break;
            }
        }
    }

    // Досчитываем оставшиеся события
    let rest = reader.by_ref().filter(|r| r.is_ok()).count();

    let summary = reader.summary();
    println!("\n✓ Read complete ({} more after the first 3)", rest);
    println!("  Events   : {}", summary.events);
    println!("  Samples  : {}", summary.samples);
    println!("  Bytes    : {}", summary.bytes_processed);
    println!("  Status   : {}", summary.status);

    Ok(())
}
