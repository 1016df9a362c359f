use std::fs::OpenOptions;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing for command-line use.
///
/// `RUST_LOG` wins over `config.level`. Output goes to `config.file`
/// (appended) when set, stderr otherwise.
pub fn init_tracing(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    let Some(path) = config.file.as_ref() else {
        builder.with_writer(std::io::stderr).init();
        return;
    };

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => builder.with_writer(file).with_ansi(false).init(),
        Err(err) => {
            eprintln!("Warning: Failed to open log file {}: {}", path.display(), err);
            builder.with_writer(std::io::stderr).init();
        }
    }
}

/// Initialize tracing while the terminal is taken over by the presenter.
///
/// Logging only goes to `config.file`; without one nothing is installed so
/// the full-screen display is never written over.
pub fn init_tracing_for_tui(config: &LoggingConfig) {
    if config.file.is_some() {
        init_tracing(config);
    }
}
