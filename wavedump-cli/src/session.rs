use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use log::{error, info, warn};
use wavedump_core::{open, DigitizerProfile};
use wavedump_types::{DecodeSummary, Event};

use crate::{DumpConfig, DumpError, DumpResult, Verbosity};

/// Сессия декодирования одного файла (single-threaded).
pub struct DumpSession {
    config: DumpConfig,
    stop_flag: Arc<AtomicBool>,
}

impl DumpSession {
    /// Создаёт сессию, проверяя конфигурацию.
    pub fn new(config: DumpConfig) -> DumpResult<Self> {
        if config.source_path.as_os_str().is_empty() {
            return Err(DumpError::Config("source path is empty".to_string()));
        }

        Ok(Self {
            config,
            stop_flag: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Флаг остановки: проверяется между событиями.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// Декодирует файл целиком. Блокирует до EOF, ошибки или stop_flag.
    pub fn run(self) -> DumpResult<DecodeSummary> {
        self.run_with(|_| {})
    }

    /// Как [`run`](Self::run), но передаёт каждое событие в `on_event`.
    ///
    /// Ошибки формата не возвращаются как `Err`: они завершают сессию и
    /// отражаются в `status` итога. `Err` означает, что файл не удалось
    /// открыть.
    pub fn run_with<F: FnMut(&Event)>(
        self,
        mut on_event: F,
    ) -> DumpResult<DecodeSummary> {
        let cfg = &self.config;
        let stop = &self.stop_flag;
        let profile = cfg.profile();

        Self::print_banner(cfg, &profile);

        let mut reader = open(&cfg.source_path, profile)?;

        loop {
            if stop.load(Ordering::Relaxed) {
                warn!("Stopped after {} events", reader.events());
                break;
            }

            let event = match reader.next_event() {
                Some(Ok(event)) => event,
                Some(Err(e)) => {
                    error!("{e}");
                    break;
                }
                None => break,
            };

            Self::log_event(&event, cfg.verbosity);

            if cfg.progress_interval > 0 && event.index % cfg.progress_interval == 0 {
                info!("Waveform progress: {}", event.index);
            }

            on_event(&event);
        }

        let summary = *reader.summary();

        info!("This file contains {} events", summary.events);
        if summary.zero_crossings > 0 {
            warn!("{} zero crossing pulses", summary.zero_crossings);
        }
        info!("Status: {}", summary.status);

        Ok(summary)
    }

    fn print_banner(
        cfg: &DumpConfig,
        profile: &DigitizerProfile,
    ) {
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        info!("  Input         : {:?}", cfg.source_path);
        info!("  Digitizer     : {}", profile.kind());
        info!("  Samples/event : {}", profile.sample_count());
        info!("  Header magic  : {}", profile.header_magic());
        info!("  Verbosity     : {}", cfg.verbosity);
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    fn log_event(
        e: &Event,
        verbosity: Verbosity,
    ) {
        if verbosity.shows_samples() {
            for (i, s) in e.samples.iter().enumerate() {
                info!(" VDC({i}) = {s}");
            }
        }

        if e.zero_crossing {
            warn!("Pulse #{} is zero crossing", e.index);
        }

        if verbosity.shows_events() {
            info!(" minVDC({}) = {}", e.index, e.min_sample);
            info!(" maxVDC({}) = {}", e.index, e.max_sample);
        }
    }
}
