use serde::{Deserialize, Serialize};

/// Количество 32-битных полей в заголовке каждой записи
pub const HEADER_FIELDS: usize = 6;

/// Размер заголовка записи в байтах
pub const HEADER_SIZE: usize = HEADER_FIELDS * 4;

/// Сырой заголовок записи (6 × u32, little-endian на диске).
///
/// Проверяется только поле 0 первой записи сессии. Остальные поля
/// читаются, но не интерпретируются.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawHeader {
    pub fields: [u32; HEADER_FIELDS],
}

impl RawHeader {
    pub fn new(fields: [u32; HEADER_FIELDS]) -> Self {
        Self { fields }
    }

    /// Заголовок, у которого заполнено только поле 0.
    pub fn with_magic(magic: u32) -> Self {
        let mut fields = [0u32; HEADER_FIELDS];
        fields[0] = magic;
        Self { fields }
    }

    /// Поле 0, с которым сверяется magic дигитайзера
    pub fn magic(&self) -> u32 {
        self.fields[0]
    }
}
