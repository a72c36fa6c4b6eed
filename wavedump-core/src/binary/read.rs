use std::io::{ErrorKind, Read};

use byteorder::{ByteOrder, LittleEndian};
use wavedump_types::{RawHeader, SampleEncoding, HEADER_FIELDS, HEADER_SIZE};

/// Читает из `r`, пока `buf` не заполнен или поток не кончился.
///
/// В отличие от `read_exact` возвращает число реально прочитанных байт,
/// поэтому чистый EOF (0) отличим от обрыва внутри блока.
pub fn read_full<R: Read>(
    r: &mut R,
    buf: &mut [u8],
) -> std::io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

/// Разбирает 24 байта заголовка в 6 полей u32.
pub fn parse_header(buf: &[u8; HEADER_SIZE]) -> RawHeader {
    let mut fields = [0u32; HEADER_FIELDS];
    LittleEndian::read_u32_into(buf, &mut fields);
    RawHeader::new(fields)
}

/// Декодирует блок выборок, передавая каждую выборку в `sink` по порядку.
///
/// Длина `buf` должна быть кратна размеру выборки; хвост отбрасывается.
pub fn decode_samples<F: FnMut(f32)>(
    buf: &[u8],
    encoding: SampleEncoding,
    mut sink: F,
) {
    match encoding {
        SampleEncoding::U16 => {
            for chunk in buf.chunks_exact(2) {
                sink(LittleEndian::read_u16(chunk) as f32);
            }
        }
        SampleEncoding::F32 => {
            for chunk in buf.chunks_exact(4) {
                sink(LittleEndian::read_f32(chunk));
            }
        }
    }
}
