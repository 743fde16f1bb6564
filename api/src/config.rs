use std::env;

use crate::encoding::EncodingMode;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub talents_path: String,
    pub encoding: EncodingMode,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            talents_path: env::var("TALENTS_PATH")
                .unwrap_or_else(|_| "data/talents.json".to_string()),
            encoding: env::var("TALENTS_ENCODING")
                .map(|v| EncodingMode::from_env_value(&v))
                .unwrap_or_default(),
        }
    }
}
