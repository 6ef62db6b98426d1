use std::env;

/// Used when JWT_SECRET is not set
pub const DEV_JWT_SECRET: &str = "dev-secret-key";

/// Runtime configuration, read from the environment
#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Postgres URL; the in-memory store is used when absent
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_password: String,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let database_max_connections =
            parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok().as_deref())?;

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development secret");
            DEV_JWT_SECRET.to_string()
        });

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());

        let bcrypt_cost = match env::var("BCRYPT_COST") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidBcryptCost)?,
            Err(_) => bcrypt::DEFAULT_COST,
        };
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidBcryptCost);
        }

        Ok(Config {
            server_host,
            server_port,
            database_url,
            database_max_connections,
            jwt_secret,
            admin_username,
            admin_password,
            bcrypt_cost,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Pool size from DATABASE_MAX_CONNECTIONS; 5 when unset
fn parse_max_connections(raw: Option<&str>) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(5),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidMaxConnections),
        },
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("DATABASE_MAX_CONNECTIONS must be a positive number")]
    InvalidMaxConnections,

    #[error("BCRYPT_COST must be a number between 4 and 31")]
    InvalidBcryptCost,
}
