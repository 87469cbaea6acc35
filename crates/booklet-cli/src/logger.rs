use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

/// Timestamped stderr logger; stdout stays free for reports
pub struct CliLogger {
    level: LevelFilter,
}

impl CliLogger {
    /// `verbose` raises the level above Info, `quiet` keeps only errors
    pub fn new(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            LevelFilter::Error
        } else {
            match verbose {
                0 => LevelFilter::Info,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S");
        match record.level() {
            Level::Info => eprintln!("[{}] {}", timestamp, record.args()),
            level => eprintln!(
                "[{}] {:<5} {}: {}",
                timestamp,
                level,
                record.target(),
                record.args()
            ),
        }
    }

    fn flush(&self) {}
}
