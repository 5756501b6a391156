use std::{env, path::PathBuf};
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/roster.json";
const DEFAULT_ADMIN_LOGIN: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub admin_login: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|err| {
                warn!("invalid PORT value {value:?}: {err}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Self {
            port,
            data_path: PathBuf::from(or_default(&lookup, "APP_DATA_PATH", DEFAULT_DATA_PATH)),
            admin_login: or_default(&lookup, "ROSTER_ADMIN_LOGIN", DEFAULT_ADMIN_LOGIN),
            admin_password: or_default(&lookup, "ROSTER_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
        }
    }
}

fn or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default");
        default.to_string()
    })
}
