use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use tracing::Level;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_env()
});

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5353;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:5174";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: split_origins(DEFAULT_CORS_ORIGINS),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            host: get_env_or_default("BINSEARCH_HOST", DEFAULT_HOST),
            port: get_env_parsed_or("BINSEARCH_PORT", DEFAULT_PORT),
            allowed_origins: split_origins(&get_env_or_default(
                "BINSEARCH_CORS_ORIGINS",
                DEFAULT_CORS_ORIGINS,
            )),
            log_level: get_env_parsed_or("BINSEARCH_LOG_LEVEL", Level::INFO),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("Invalid value for environment variable {key}: {raw}")),
        Err(_) => default,
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.bind_addr(), "0.0.0.0:5353");
    assert_eq!(
        config.allowed_origins,
        vec!["http://localhost:5173", "http://localhost:5174"]
    );
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_split_origins_ignores_blanks() {
    assert_eq!(
        split_origins(" http://a.test , ,http://b.test,"),
        vec!["http://a.test", "http://b.test"]
    );
    assert!(split_origins("").is_empty());
}
