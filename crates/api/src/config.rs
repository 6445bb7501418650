use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite database URL (default: `sqlite:one_partners.db`).
    pub database_url: String,
    /// Directory uploaded files are written to and served from.
    pub upload_dir: PathBuf,
    /// Directory holding the built frontend; unmatched routes fall back to
    /// its `index.html`.
    pub static_dir: PathBuf,
    /// Admin panel credentials.
    pub admin: AdminCredentials,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | `sqlite:one_partners.db`   |
    /// | `UPLOAD_DIR`           | `public/uploads`           |
    /// | `STATIC_DIR`           | `dist`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:one_partners.db".into());

        let upload_dir = PathBuf::from(
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/uploads".into()),
        );

        let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist".into()));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            upload_dir,
            static_dir,
            admin: AdminCredentials::from_env(),
        }
    }
}

/// The static admin trust anchor: one identifier/secret pair and the opaque
/// token handed out on a successful login.
///
/// Kept behind this struct so handler logic does not care where credentials
/// come from; swapping in a real identity system only touches this type.
/// The token carries no expiry and no other endpoint validates it.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub id: String,
    pub password: String,
    pub token: String,
}

impl AdminCredentials {
    /// Load from `ADMIN_ID` / `ADMIN_PASSWORD` / `ADMIN_TOKEN`, falling back
    /// to the long-standing defaults.
    pub fn from_env() -> Self {
        Self {
            id: std::env::var("ADMIN_ID").unwrap_or_else(|_| "admin1".into()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "adminone1".into()),
            token: std::env::var("ADMIN_TOKEN").unwrap_or_else(|_| "admin-token-123".into()),
        }
    }

    /// Exact-match credential check.
    pub fn verify(&self, id: &str, password: &str) -> bool {
        self.id == id && self.password == password
    }
}
