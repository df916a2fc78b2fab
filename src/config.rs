use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "kitcheck";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address when KITCHECK_ADDR is not set.
const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Get the application data directory.
/// ~/Kitcheck/ by default; KITCHECK_DATA_DIR overrides it.
pub fn app_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("KITCHECK_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Kitcheck")
}

/// Path to the persisted checklist collection.
pub fn store_path() -> PathBuf {
    app_data_dir().join("checklists.json")
}

/// Bind address for the HTTP server. KITCHECK_ADDR overrides the default;
/// an unparseable value falls back with a warning.
pub fn bind_addr() -> SocketAddr {
    let raw = std::env::var("KITCHECK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    match raw.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!(%raw, "Invalid KITCHECK_ADDR, using default: {e}");
            DEFAULT_ADDR.parse().expect("default address is valid")
        }
    }
}

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,kitcheck=debug"
}
