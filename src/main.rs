//! LockOsd binary.

#[cfg(target_os = "windows")]
mod windows_main;

use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        tracing::error!("lockosd needs Windows low-level keyboard hooks and layered windows");
        std::process::exit(1);
    }
}
