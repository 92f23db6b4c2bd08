use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Internal error responses include fault detail only in development.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
