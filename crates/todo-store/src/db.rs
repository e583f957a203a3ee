//! Database connection management
//!
//! Settings describe where the Persistence collaborator lives; `connect`
//! turns them into a pool that is injected into the record store and
//! closed explicitly at shutdown.

use crate::errors::{from_sqlx, invalid_settings, Result};
use serde::Deserialize;
use sqlx::any::AnyPoolOptions;
use todo_core_types::Sensitive;

pub use sqlx::AnyPool;

/// SQL dialect of the configured database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbBackend {
    #[default]
    MySql,
    Sqlite,
}

impl DbBackend {
    fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("mysql:") || url.starts_with("mariadb:") {
            Some(DbBackend::MySql)
        } else if url.starts_with("sqlite:") {
            Some(DbBackend::Sqlite)
        } else {
            None
        }
    }
}

/// Connection settings for the todo database
///
/// Either `url` is given verbatim, or the URL is assembled from the
/// individual fields. Defaults point at the local `godemo` database.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub backend: DbBackend,
    /// Full connection URL; wins over the individual fields when set
    pub url: Option<Sensitive<String>>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Sensitive<String>,
    /// MySQL database name, or SQLite file stem
    pub schema: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            backend: DbBackend::MySql,
            url: None,
            host: "localhost".to_string(),
            port: 3306,
            user: "godemo".to_string(),
            password: Sensitive::new("godemo".to_string()),
            schema: "godemo".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseSettings {
    /// Private in-memory SQLite database, used by tests and demos
    pub fn sqlite_in_memory() -> Self {
        Self {
            backend: DbBackend::Sqlite,
            url: Some(Sensitive::new("sqlite::memory:".to_string())),
            max_connections: 1,
            ..Self::default()
        }
    }

    /// Dialect actually in use; a URL scheme overrides `backend`
    pub fn resolved_backend(&self) -> Result<DbBackend> {
        match &self.url {
            Some(url) => DbBackend::from_url(url.expose()).ok_or_else(|| {
                invalid_settings("database url must start with mysql:, mariadb: or sqlite:")
            }),
            None => Ok(self.backend),
        }
    }

    /// Connection URL handed to the driver. Contains the password.
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.expose().clone();
        }
        match self.backend {
            DbBackend::MySql => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.user,
                self.password.expose(),
                self.host,
                self.port,
                self.schema
            ),
            DbBackend::Sqlite => format!("sqlite://{}.db?mode=rwc", self.schema),
        }
    }

    /// Loggable description of the target, without credentials
    pub fn describe(&self) -> String {
        match (&self.url, self.resolved_backend()) {
            (Some(_), Ok(DbBackend::Sqlite)) => "sqlite (url)".to_string(),
            (Some(_), _) => "mysql (url)".to_string(),
            (None, _) => match self.backend {
                DbBackend::MySql => format!(
                    "mysql://{}@{}:{}/{}",
                    self.user, self.host, self.port, self.schema
                ),
                DbBackend::Sqlite => format!("sqlite://{}.db", self.schema),
            },
        }
    }

    fn is_in_memory(&self) -> bool {
        self.url
            .as_ref()
            .map(|url| url.expose().contains(":memory:") || url.expose().contains("mode=memory"))
            .unwrap_or(false)
    }
}

/// Open a connection pool for the configured database
///
/// In-memory SQLite is pinned to a single connection that is never
/// recycled, otherwise every new connection would see an empty database.
pub async fn connect(settings: &DatabaseSettings) -> Result<AnyPool> {
    sqlx::any::install_default_drivers();
    settings.resolved_backend()?;

    let mut options = AnyPoolOptions::new().max_connections(settings.max_connections.max(1));
    if settings.is_in_memory() {
        options = options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    tracing::debug!(db = %settings.describe(), "opening database pool");

    options
        .connect(&settings.connection_url())
        .await
        .map_err(|e| from_sqlx("connect", e))
}
