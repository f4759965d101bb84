use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::model::config::LogConfig;

/// Filter directive: RUST_LOG wins over the configured level
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("tasklist={}", level)))
}

/// Install the global subscriber.
///
/// The TUI owns the terminal, so logs only ever go to the configured file.
/// Without a file nothing is installed and `tracing` macros are no-ops.
/// The returned guard flushes the background writer when dropped and must be
/// held until exit.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let file = config.file.as_deref()?;
    let (dir, name) = split_log_path(file)?;

    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("warning: could not create log directory {}: {}", dir.display(), e);
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init();

    match installed {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}

/// Split a log file path into (directory, file name)
fn split_log_path(file: &Path) -> Option<(&Path, &std::ffi::OsStr)> {
    let name = file.file_name()?;
    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Some((dir, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_file_installs_nothing() {
        assert!(init(&LogConfig::default()).is_none());
    }

    #[test]
    fn split_handles_bare_file_names() {
        let (dir, name) = split_log_path(Path::new("tl.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "tl.log");

        let path = PathBuf::from("/var/log/tl.log");
        let (dir, name) = split_log_path(&path).unwrap();
        assert_eq!(dir, Path::new("/var/log"));
        assert_eq!(name, "tl.log");
    }

    #[test]
    fn split_rejects_directory_like_paths() {
        assert!(split_log_path(Path::new("/")).is_none());
    }
}
