use std::{path::PathBuf, sync::atomic::Ordering};

use clap::Parser;
use log::{error, warn};
use wavedump_cli::{default_source_path, DumpConfig, DumpSession, Verbosity};
use wavedump_types::{DecodeStatus, DigitizerKind};

#[derive(Parser, Debug)]
#[command(
    name = "wavedump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Decode WaveDump binary captures into per-event records",
    long_about = None,
)]
struct Cli {
    /// Путь к файлу. По умолчанию: wave_0_VME.dat (VME) или wave_0.dat (Desktop)
    path: Option<PathBuf>,
    /// Дигитайзер: vme (V), desktop (D)
    #[arg(short, long, default_value = "vme")]
    digitizer: String,
    /// Подробность: -v по событиям, -vv по выборкам
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Строка прогресса каждые N событий (0 = выключено)
    #[arg(long, default_value = "10000")]
    progress_every: u64,
    /// Вывести итог сессии в JSON на stdout
    #[arg(long)]
    json: bool,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let digitizer: DigitizerKind = match cli.digitizer.parse() {
        Ok(d) => d,
        Err(e) => {
            error!("--digitizer: {e}");
            std::process::exit(2);
        }
    };

    let config = DumpConfig {
        source_path: cli.path.unwrap_or_else(|| default_source_path(digitizer)),
        digitizer,
        verbosity: Verbosity::from_level(cli.verbose),
        progress_interval: cli.progress_every,
    };

    let session = match DumpSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let stop_flag = session.stop_flag();

    if let Err(e) = ctrlc::set_handler(move || {
        if stop_flag.swap(true, Ordering::SeqCst) {
            // Второй Ctrl+C — принудительный выход
            warn!("Force exit");
            std::process::exit(130);
        }
        warn!("Ctrl+C received — stopping after the current event...");
    }) {
        warn!("Failed to set Ctrl+C handler: {e}");
    }

    let summary = match session.run() {
        Ok(s) => s,
        Err(e) => {
            error!("Decoding failed: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Failed to encode summary: {e}"),
        }
    }

    match summary.status {
        DecodeStatus::Clean => {}
        DecodeStatus::InProgress => std::process::exit(130),
        _ => std::process::exit(1),
    }
}
