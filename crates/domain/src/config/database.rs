use super::env::{lookup_var, optional_parsed, required, required_parsed};
use super::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConnection {
    /// Explicit connection URL, e.g. `sqlite:knockknock.db`.
    Url(String),
    Postgres {
        host: String,
        port: u16,
        name: String,
        user: String,
        password: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub connection: DatabaseConnection,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// `DATABASE_URL` wins; otherwise every `POSTGRES_*` variable is required.
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection = match lookup_var(lookup, "DATABASE_URL") {
            Some(url) => DatabaseConnection::Url(url),
            None => DatabaseConnection::Postgres {
                host: required(lookup, "POSTGRES_HOST")?,
                port: required_parsed(lookup, "POSTGRES_PORT")?,
                name: required(lookup, "POSTGRES_DB")?,
                user: required(lookup, "POSTGRES_USER")?,
                password: required(lookup, "POSTGRES_PASSWORD")?,
            },
        };

        let max_connections = optional_parsed(
            lookup,
            "DATABASE_MAX_CONNECTIONS",
            default_max_connections(),
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Validation(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            connection,
            max_connections,
        })
    }

    pub fn url(&self) -> String {
        match &self.connection {
            DatabaseConnection::Url(url) => url.clone(),
            DatabaseConnection::Postgres {
                host,
                port,
                name,
                user,
                password,
            } => format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name),
        }
    }

    /// Connection target without credentials, for logging.
    pub fn redacted(&self) -> String {
        match &self.connection {
            DatabaseConnection::Url(url) => match url.split_once('@') {
                Some((_, rest)) => format!("***@{}", rest),
                None => url.clone(),
            },
            DatabaseConnection::Postgres {
                host, port, name, ..
            } => format!("postgres://{}:{}/{}", host, port, name),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}
