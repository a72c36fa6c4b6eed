use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use wavedump_types::{RawHeader, SampleEncoding, WaveError, WaveResult};

/// Пишет 6 полей заголовка в little-endian.
pub fn write_header<W: Write>(
    w: &mut W,
    header: &RawHeader,
) -> std::io::Result<()> {
    for &field in &header.fields {
        w.write_u32::<LittleEndian>(field)?;
    }
    Ok(())
}

/// Проверяет, что выборку можно записать в кодировке `encoding` без потерь.
pub fn check_sample(
    sample: f32,
    encoding: SampleEncoding,
) -> WaveResult<()> {
    match encoding {
        SampleEncoding::U16 => {
            if sample.fract() != 0.0 || !(0.0..=u16::MAX as f32).contains(&sample) {
                return Err(WaveError::invalid_record(format!(
                    "sample {sample} is not representable as u16"
                )));
            }
            Ok(())
        }
        SampleEncoding::F32 => Ok(()),
    }
}

/// Пишет одну выборку. Выборка должна пройти [`check_sample`].
pub fn write_sample<W: Write>(
    w: &mut W,
    sample: f32,
    encoding: SampleEncoding,
) -> std::io::Result<()> {
    match encoding {
        SampleEncoding::U16 => w.write_u16::<LittleEndian>(sample as u16),
        SampleEncoding::F32 => w.write_f32::<LittleEndian>(sample),
    }
}
