//! Runtime configuration for the warband server.

use once_cell::sync::Lazy;
use std::{env, path::PathBuf};

#[derive(Debug)]
pub struct Settings {
    /// Listen address for the HTTP server.
    pub server_addr: String,
    /// Directory served under `/`.
    pub static_dir: PathBuf,
}

impl Settings {
    fn from_env() -> Self {
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./static"));

        Settings {
            server_addr,
            static_dir,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
