use log::{LevelFilter, Metadata, Record};
use std::sync::Once;

lazy_static! {
    static ref LOGGER: Logger = Logger {
        output: |_, message| eprintln!("{}", message),
    };
}

static INIT: Once = Once::new();

/// Install the global logger. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        if log::set_logger(Logger::global()).is_err() {
            return;
        }

        log::set_max_level(level_filter());

        info!("Current log level: {}", log::max_level());
        info!("Logger Initialized.");
    });
}

fn level_filter() -> LevelFilter {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .or_else(|| option_env!("LOG_LEVEL").map(str::to_string));

    match level.as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

struct Logger {
    output: fn(log::Level, &str),
}

impl Logger {
    pub fn global() -> &'static Logger {
        &LOGGER
    }

    fn get_formatted_message(&self, record: &Record) -> String {
        match record.level() {
            log::Level::Error => format!(
                "[Err] {}@{}: {}",
                record.file_static().unwrap_or(""),
                record.line().unwrap_or(0),
                record.args()
            ),
            log::Level::Warn => format!("[Wrn] {}", record.args()),
            log::Level::Info => format!("[Inf] {}", record.args()),
            log::Level::Debug => format!("[Dug] {}", record.args()),
            log::Level::Trace => format!("[Vrb] {}", record.args()),
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            (self.output)(record.level(), &self.get_formatted_message(record));
        }
    }

    fn flush(&self) {}
}
