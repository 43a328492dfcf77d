use std::env;
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    /// Start with the built-in `usr_001` profile. Off means an empty store.
    pub seed_default_user: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            seed_default_user: true,
        }
    }
}

impl EnvConfig {
    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    fn parse_env_or<T: FromStr>(key: &str, default: T) -> T {
        match env::var(key) {
            Ok(raw) => parse_or(key, &raw, default),
            Err(_) => default,
        }
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            host: Self::get_env_or("HOST", DEFAULT_HOST),
            port: Self::parse_env_or("PORT", DEFAULT_PORT),
            cors_origin: Self::get_env_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            seed_default_user: Self::parse_env_or("SEED_DEFAULT_USER", true),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!("Ignoring invalid value {:?} for {}, using default", raw, key);
            default
        }
    }
}
