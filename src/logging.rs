// logging module: tracing goes to a file because the terminal frontend owns stdout
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SELPOINTER_LOG";
const LOG_FILE: &str = "selpointer.log";

/// Where log lines go when the log file cannot be opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    // No subscriber at all; used while the terminal frontend draws on the screen
    Discard,
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new("selection_pointer=debug,info")
            } else {
                EnvFilter::new("selection_pointer=info,warn")
            }
        })
}

// One file per app dir, appended across runs
pub fn log_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}

// Returns the log file path, or None when the file could not be opened
pub fn init(dir: &Path, verbose: bool, fallback: Fallback) -> Option<PathBuf> {
    let path = log_path(dir);

    let file = fs::create_dir_all(dir)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(file) => {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true);

            let _ = tracing_subscriber::registry()
                .with(filter(verbose))
                .with(file_layer)
                .try_init();

            tracing::info!(path = %path.display(), "tracing initialized");
            Some(path)
        }
        Err(error) => {
            match fallback {
                Fallback::Stderr => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter(verbose))
                        .with_writer(std::io::stderr)
                        .try_init();
                    tracing::warn!(%error, "could not open log file, logging to stderr");
                }
                Fallback::Discard => {}
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_stable_across_runs() {
        let dir = Path::new("/tmp/selpointer-logs");
        assert_eq!(log_path(dir), dir.join("selpointer.log"));
        assert_eq!(log_path(dir), log_path(dir));
    }

    #[test]
    fn test_unwritable_dir_with_discard_installs_nothing() {
        // a regular file where the log directory should be
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let dir = blocker.path().join("logs");

        assert_eq!(init(&dir, true, Fallback::Discard), None);
        let installed = tracing::dispatcher::get_default(|dispatch| {
            !dispatch.is::<tracing::subscriber::NoSubscriber>()
        });
        assert!(!installed);
    }
}
