use std::env;
use std::io;
use std::path::PathBuf;

/// Application configuration, sourced from the environment (optionally via a
/// `.env` file loaded before this runs). Every value has a default so the
/// server boots out of the box; the static directory must exist or loading
/// fails.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> io::Result<Self> {
        let static_dir = PathBuf::from(get_env("STATIC_DIR", "./static"));
        if !static_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("static directory does not exist: {}", static_dir.display()),
            ));
        }
        // Absolute path for logging.
        let static_dir = static_dir.canonicalize()?;

        let port = get_env("PORT", "3000")
            .parse()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "PORT must be a number"))?;

        Ok(Self {
            port,
            static_dir,
            log_level: get_env("LOG_LEVEL", "info"),
            database_url: get_env("DATABASE_URL", "sqlite://tasks.db"),
            jwt_secret: get_env("JWT_SECRET", "your-secret-key"),
            environment: get_env("ENVIRONMENT", "development"),
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
