use log::{Level, LevelFilter, Log, Metadata, Record};

// Writes "[LEVEL](file:line) message" to stderr.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "[{}]({}:{}) {}",
            level_str(record.level()),
            record.file().unwrap_or("?"),
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn level_str(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

// Installs the process-wide logger. Calling it twice is an error.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    log::set_boxed_logger(Box::new(StderrLogger { level }))
        .map_err(|e| anyhow::anyhow!("logger already set: {}", e))?;
    log::set_max_level(level);
    Ok(())
}

#[test]
fn test_level_str() {
    assert_eq!(level_str(Level::Warn), "WARN");
    let logger = StderrLogger {
        level: LevelFilter::Info,
    };
    let meta = Metadata::builder().level(Level::Debug).build();
    assert!(!logger.enabled(&meta));
    let meta = Metadata::builder().level(Level::Error).build();
    assert!(logger.enabled(&meta));
}
