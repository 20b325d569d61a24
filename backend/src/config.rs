//! Process configuration read from the environment.
//!
//! Everything the server needs from the outside is collected here once at
//! startup: the bind address, the listen port, and the path of the SQLite
//! database file holding the product collection. Every value has a default so
//! the binary runs with no configuration at all.

use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_PATH: &str = "products.sqlite";

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_path: String,
}

impl AppConfig {
    /// Reads `HOST`, `PORT` and `PRODUCTS_DB` from the environment, falling
    /// back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let db_path = env::var("PRODUCTS_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

        Self {
            host,
            port,
            db_path,
        }
    }
}
