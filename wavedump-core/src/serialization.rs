use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::{debug, warn};
use wavedump_types::{
    DecodeStatus, DecodeSummary, Event, Extrema, RawHeader, RecordBlock, WaveError, WaveResult,
    HEADER_SIZE,
};

use crate::{
    binary::{check_sample, decode_samples, parse_header, read_full, write_header, write_sample},
    profile::DigitizerProfile,
};

/// Потоковый писатель файлов WaveDump.
pub struct WaveWriter<W: Write> {
    writer: BufWriter<W>,
    profile: DigitizerProfile,
    record_count: u64,
}

/// Потоковый читатель файлов WaveDump (одна сессия декодирования).
///
/// Отдаёт события по одному. Magic проверяется только у первой записи.
/// После первой ошибки сессия завершена и [`next_event`](Self::next_event)
/// возвращает `None`.
pub struct WaveReader<R: Read> {
    reader: BufReader<R>,
    profile: DigitizerProfile,
    header_buf: [u8; HEADER_SIZE],
    sample_buf: Vec<u8>,
    last_header: Option<RawHeader>,
    validated: bool,
    summary: DecodeSummary,
}

/// Всё, что осталось от сессии: события, прочитанные до остановки, итог и
/// ошибка, если сессия завершилась не чисто.
#[derive(Debug)]
pub struct DecodeOutcome {
    pub events: Vec<Event>,
    pub summary: DecodeSummary,
    pub error: Option<WaveError>,
}

impl<W: Write> WaveWriter<W> {
    pub fn new(
        inner: W,
        profile: DigitizerProfile,
    ) -> Self {
        Self {
            writer: BufWriter::new(inner),
            profile,
            record_count: 0,
        }
    }

    /// Записывает одну запись. Выборки проверяются до записи первого байта,
    /// так что неудачный вызов не оставляет в потоке половину записи.
    pub fn write_record(
        &mut self,
        header: &RawHeader,
        samples: &[f32],
    ) -> WaveResult<()> {
        if samples.len() != self.profile.sample_count() {
            return Err(WaveError::invalid_record(format!(
                "{} digitizer expects {} samples per event, got {}",
                self.profile.kind(),
                self.profile.sample_count(),
                samples.len()
            )));
        }

        let encoding = self.profile.sample_encoding();

        for &s in samples {
            check_sample(s, encoding)?;
        }

        write_header(&mut self.writer, header)?;

        for &s in samples {
            write_sample(&mut self.writer, s, encoding)?;
        }

        self.record_count += 1;

        Ok(())
    }

    /// Записывает запись с заголовком `[magic, 0, 0, 0, 0, 0]`.
    pub fn write_event(
        &mut self,
        samples: &[f32],
    ) -> WaveResult<()> {
        let header = RawHeader::with_magic(self.profile.header_magic());
        self.write_record(&header, samples)
    }

    /// Сбрасывает буфер и возвращает внутренний поток.
    pub fn finish(self) -> WaveResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| WaveError::Io(e.into_error()))
    }

    /// Количество записанных записей.
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    pub fn profile(&self) -> &DigitizerProfile {
        &self.profile
    }
}

impl<R: Read> WaveReader<R> {
    pub fn new(
        inner: R,
        profile: DigitizerProfile,
    ) -> Self {
        Self {
            reader: BufReader::new(inner),
            profile,
            header_buf: [0u8; HEADER_SIZE],
            sample_buf: vec![0u8; profile.samples_block_size()],
            last_header: None,
            validated: false,
            summary: DecodeSummary::default(),
        }
    }

    /// Возвращает следующее событие или `None`, когда сессия завершена.
    pub fn next_event(&mut self) -> Option<WaveResult<Event>> {
        if self.summary.status.is_finished() {
            return None;
        }

        match self.read_record() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => {
                self.summary.status = DecodeStatus::Clean;
                debug!(
                    "End of stream after {} events ({} bytes)",
                    self.summary.events, self.summary.bytes_processed
                );
                None
            }
            Err(e) => {
                self.summary.status = DecodeStatus::from_error(&e);
                warn!("Decoding stopped after {} events: {e}", self.summary.events);
                Some(Err(e))
            }
        }
    }

    fn read_record(&mut self) -> WaveResult<Option<Event>> {
        let index = self.summary.events + 1;

        let n = read_full(&mut self.reader, &mut self.header_buf)?;

        if n == 0 {
            return Ok(None);
        }

        self.summary.bytes_processed += n as u64;

        if n < HEADER_SIZE {
            return Err(WaveError::TruncatedRecord {
                index,
                block: RecordBlock::Header,
                expected: HEADER_SIZE,
                available: n,
            });
        }

        let header = parse_header(&self.header_buf);

        // Только поле 0 и только у первой записи
        if !self.validated {
            self.profile.check_magic(&header)?;
            self.validated = true;
        }

        self.last_header = Some(header);

        let n = read_full(&mut self.reader, &mut self.sample_buf)?;
        self.summary.bytes_processed += n as u64;

        if n < self.sample_buf.len() {
            return Err(WaveError::TruncatedRecord {
                index,
                block: RecordBlock::Samples,
                expected: self.sample_buf.len(),
                available: n,
            });
        }

        let mut samples = Vec::with_capacity(self.profile.sample_count());
        let mut extrema = Extrema::new();

        decode_samples(&self.sample_buf, self.profile.sample_encoding(), |s| {
            extrema.update(s);
            samples.push(s);
        });

        let event = extrema.into_event(index, samples);

        self.summary.events += 1;
        self.summary.samples += event.samples.len() as u64;
        if event.zero_crossing {
            self.summary.zero_crossings += 1;
        }

        Ok(Some(event))
    }

    /// Профиль, с которым идёт декодирование.
    pub fn profile(&self) -> &DigitizerProfile {
        &self.profile
    }

    /// Последний прочитанный заголовок (поля 1..5 не проверяются).
    pub fn last_header(&self) -> Option<&RawHeader> {
        self.last_header.as_ref()
    }

    /// Количество успешно декодированных событий.
    pub fn events(&self) -> u64 {
        self.summary.events
    }

    /// Счётчики и итоговый статус сессии.
    pub fn summary(&self) -> &DecodeSummary {
        &self.summary
    }
}

impl<R: Read> Iterator for WaveReader<R> {
    type Item = WaveResult<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

/// Начинает сессию декодирования потока `stream`.
pub fn decode<R: Read>(
    stream: R,
    profile: DigitizerProfile,
) -> WaveReader<R> {
    WaveReader::new(stream, profile)
}

/// Открывает файл и начинает сессию декодирования.
pub fn open<P: AsRef<Path>>(
    path: P,
    profile: DigitizerProfile,
) -> WaveResult<WaveReader<File>> {
    let file = File::open(path)?;
    Ok(WaveReader::new(file, profile))
}

/// Convenience: читает все события, останавливаясь на первой ошибке.
pub fn read_all_events<R: Read>(reader: &mut WaveReader<R>) -> WaveResult<Vec<Event>> {
    reader.collect()
}

/// Декодирует поток целиком, сохраняя события, прочитанные до ошибки.
pub fn decode_all<R: Read>(
    stream: R,
    profile: DigitizerProfile,
) -> DecodeOutcome {
    let mut reader = decode(stream, profile);
    let mut events = Vec::new();
    let mut error = None;

    for result in reader.by_ref() {
        match result {
            Ok(event) => events.push(event),
            Err(e) => {
                error = Some(e);
                break;
            }
        }
    }

    DecodeOutcome {
        events,
        summary: *reader.summary(),
        error,
    }
}
