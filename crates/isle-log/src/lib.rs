//! Tracing subscriber setup for the island generator.
//!
//! Console output is human readable and stamped with time since start. Given
//! a log directory, structured JSON is also written to `isle.log` there.
//! `RUST_LOG` always wins over the configured level.

use std::fs::File;
use std::path::{Path, PathBuf};

use isle_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_DIRECTIVES: &str = "info";

const LOG_FILE: &str = "isle.log";

/// Filter directives taken from `config.debug.log_level`, falling back to
/// [`DEFAULT_DIRECTIVES`] when absent or blank.
pub fn filter_directives(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES)
        .to_string()
}

/// Path of the JSON log inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE)
}

/// Create `log_dir` and an empty `isle.log` inside it.
fn open_log_file(log_dir: &Path) -> Option<File> {
    std::fs::create_dir_all(log_dir).ok()?;
    File::create(log_file_path(log_dir)).ok()
}

/// Install the global tracing subscriber.
///
/// Call once, before generation starts. The JSON file layer is only added
/// when `log_dir` is given and the log file can be created; otherwise
/// logging silently falls back to the console.
pub fn init_logging(log_dir: Option<&Path>, config: Option<&Config>) {
    let directives = filter_directives(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(log_file) = log_dir.and_then(open_log_file) {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_without_config() {
        assert_eq!(filter_directives(None), "info");
    }

    #[test]
    fn test_directives_from_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug,isle_scene=trace".to_string();
        assert_eq!(filter_directives(Some(&config)), "debug,isle_scene=trace");
    }

    #[test]
    fn test_blank_level_falls_back_to_default() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(filter_directives(Some(&config)), DEFAULT_DIRECTIVES);
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        for directives in ["info", "debug,isle_scene=trace", "warn,isle_terrain=debug"] {
            let filter = EnvFilter::try_new(directives);
            assert!(filter.is_ok(), "failed to parse {directives}");
        }
        let filter = EnvFilter::new(filter_directives(Some(&Config::default())));
        assert!(filter.to_string().contains("info"));
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        assert!(open_log_file(&nested).is_some());
        assert!(log_file_path(&nested).exists());
    }

    // Installs the process-wide subscriber; keep it the only test that does.
    #[test]
    fn test_init_logging_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        init_logging(Some(dir.path()), Some(&Config::default()));
        tracing::error!(cells = 16, "json layer online");

        let contents = std::fs::read_to_string(log_file_path(dir.path())).unwrap();
        let line = contents
            .lines()
            .find(|line| line.contains("json layer online"))
            .unwrap();
        assert!(line.starts_with('{') && line.ends_with('}'), "not JSON: {line}");
        assert!(line.contains("\"level\":\"ERROR\""));
        assert!(line.contains("\"cells\":16"));
    }

    #[test]
    fn test_log_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_path(dir.path());
        assert_eq!(path.file_name().unwrap(), "isle.log");
        assert_eq!(path.parent(), Some(dir.path()));
    }
}
