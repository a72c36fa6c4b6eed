use serde::{Deserialize, Serialize};

/// Кодировка одной выборки в блоке данных события
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleEncoding {
    /// Беззнаковое 16-битное целое, переводится в f32 без масштабирования
    U16,
    /// 32-битное число с плавающей точкой IEEE-754, читается как есть
    F32,
}

impl SampleEncoding {
    /// Размер одной выборки в байтах
    pub fn sample_size(&self) -> usize {
        match self {
            SampleEncoding::U16 => 2,
            SampleEncoding::F32 => 4,
        }
    }
}
