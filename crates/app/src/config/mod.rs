//! Application configuration.
//!
//! Settings are read from CLI flags with environment fallbacks; a `.env` file is
//! loaded first when present.

mod db;
mod logging;

pub use db::DatabaseConfig;
pub use logging::{LogFormat, LoggingConfig};

/// Load `.env` into the process environment, ignoring a missing file.
pub fn load_dotenv() {
    _ = dotenvy::dotenv();
}
