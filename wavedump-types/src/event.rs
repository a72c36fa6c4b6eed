use serde::{Deserialize, Serialize};

/// Одно декодированное событие (триггер дигитайзера).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Порядковый номер события в файле, начиная с 1
    pub index: u64,
    /// Выборки в порядке чтения
    pub samples: Vec<f32>,
    /// Минимальная выборка события
    pub min_sample: f32,
    /// Максимальная выборка события
    pub max_sample: f32,
    /// Флаг: экстремумы лежат по разные стороны от нуля
    pub zero_crossing: bool,
}

impl Event {
    /// Строит событие, вычисляя экстремумы по выборкам.
    pub fn from_samples(
        index: u64,
        samples: Vec<f32>,
    ) -> Self {
        let mut extrema = Extrema::new();

        for &s in &samples {
            extrema.update(s);
        }

        extrema.into_event(index, samples)
    }

    /// Количество выборок в событии
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Размах сигнала (max - min)
    pub fn amplitude(&self) -> f32 {
        self.max_sample - self.min_sample
    }
}

/// Бегущие экстремумы по выборкам одного события.
///
/// Начальные значения: +inf для минимума и -inf для максимума. Обе границы
/// сравниваются с каждой выборкой независимо. NaN не меняет ни одну из них.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f32,
    pub max: f32,
}

impl Extrema {
    pub fn new() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    #[inline]
    pub fn update(
        &mut self,
        sample: f32,
    ) {
        if sample < self.min {
            self.min = sample;
        }
        if sample > self.max {
            self.max = sample;
        }
    }

    /// Экстремумы лежат по разные стороны от нуля
    pub fn zero_crossing(&self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }

    /// Завершает событие: выборки переходят во владение [`Event`].
    pub fn into_event(
        self,
        index: u64,
        samples: Vec<f32>,
    ) -> Event {
        Event {
            index,
            samples,
            min_sample: self.min,
            max_sample: self.max,
            zero_crossing: self.zero_crossing(),
        }
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::new()
    }
}
