//! Пример: синтез VME-файла через WaveWriter
//!
//! Пишет 100 событий с гауссовым импульсом поверх пьедестала.

use std::fs::File;

use wavedump_core::{resolve, WaveWriter};
use wavedump_types::DigitizerKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = "wave_0_VME.dat";
    let profile = resolve(DigitizerKind::Vme);

    let file = File::create(output_path)?;
    let mut writer = WaveWriter::new(file, profile);

    for event in 0..100u32 {
        let peak = 40.0 + (event % 10) as f32;
        let samples: Vec<f32> = (0..profile.sample_count())
            .map(|i| {
                let x = (i as f32 - 50.0) / 4.0;
                (8000.0 - 2000.0 * (-x * x / 2.0).exp() * peak / 40.0).round()
            })
            .collect();

        writer.write_event(&samples)?;
    }

    let count = writer.record_count();
    writer.finish()?;

    println!("✓ Wrote {count} events to {output_path}");
    println!("  Record size : {} bytes", profile.record_size());

    Ok(())
}
