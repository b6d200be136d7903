//! Stderr bridge for the `log` facade.
//!
//! Level resolution, highest precedence first:
//! - `--log-level` on the command line
//! - `RUST_LOG` (a bare level name such as `debug`)
//! - `warn`
//!
//! Lines are written as `[secs.micros] [LEVEL] [target] message`.
use parking_lot::Mutex;
use std::io::Write;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

/// Level used when neither the CLI nor `RUST_LOG` sets one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger {
    stderr: Mutex<std::io::Stderr>,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        let mut stderr = self.stderr.lock();
        // Nowhere to report a failed diagnostic write
        let _ = stderr.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.stderr.lock().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Pick the effective level from the CLI override and a `RUST_LOG` value.
pub fn resolve_level(cli: Option<LevelFilter>, rust_log: Option<&str>) -> LevelFilter {
    cli.or_else(|| rust_log.and_then(|value| LevelFilter::from_str(value.trim()).ok()))
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, rust_log.as_deref());

    let logger = LOGGER.get_or_init(|| StderrLogger {
        stderr: Mutex::new(std::io::stderr()),
    });
    if log::set_logger(logger).is_err() {
        log::debug!("Logger already installed; updating level only");
    }
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Trace), Some("error")),
            LevelFilter::Trace
        );
    }

    #[test]
    fn test_rust_log_used_without_cli() {
        assert_eq!(resolve_level(None, Some("Info")), LevelFilter::Info);
        assert_eq!(resolve_level(None, Some(" debug ")), LevelFilter::Debug);
    }

    #[test]
    fn test_unparsable_rust_log_falls_back_to_default() {
        assert_eq!(resolve_level(None, Some("shapeshow=debug")), DEFAULT_LEVEL);
        assert_eq!(resolve_level(None, None), DEFAULT_LEVEL);
    }
}
