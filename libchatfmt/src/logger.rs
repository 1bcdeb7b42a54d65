use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: STDERRLogger = STDERRLogger;

/// Logs to STDERR, so the formatted messages on STDOUT stay pipeable.
pub struct STDERRLogger;

impl STDERRLogger {
    fn level(l: log::Level) -> ColoredString {
        match l {
            log::Level::Info => l.as_str().bright_green(),
            log::Level::Warn => l.as_str().yellow(),
            log::Level::Error => l.as_str().bright_red(),
            log::Level::Debug => l.as_str().bright_cyan(),
            log::Level::Trace => l.as_str().cyan(),
        }
    }
}

impl log::Log for STDERRLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, msg: &Record) {
        if !self.enabled(msg.metadata()) {
            return;
        }

        // Module path only for debugging, otherwise it is noise
        if log::max_level() >= LevelFilter::Debug {
            eprintln!(
                "[{}] - {} ({}): {}",
                Local::now().format("%d/%m/%Y %H:%M:%S"),
                Self::level(msg.level()),
                msg.target().dimmed(),
                msg.args()
            );
        } else {
            eprintln!("[{}] - {}: {}", Local::now().format("%d/%m/%Y %H:%M:%S"), Self::level(msg.level()), msg.args());
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Verbosity: 0 is info, 1 is debug, 2 and more is everything.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| {
        log::set_max_level(match verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            2.. => LevelFilter::max(),
        })
    })
}
