//! API server configuration.

use thiserror::Error;
use todo_core::auth::SessionSecrets;
use todo_core::auth::jwt::{ACCESS_SECRET_VAR, MissingSecret, REFRESH_SECRET_VAR};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default SQLite database location.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todo.sqlite";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing secret: {0}")]
    MissingSecret(#[from] MissingSecret),
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3000").
    pub bind_addr: String,
    /// SQLite connection URL.
    pub database_url: String,
    /// Access and refresh token signing secrets.
    pub secrets: SessionSecrets,
    /// Mark session cookies `Secure`. Enabled when running in production.
    pub secure_cookies: bool,
}

impl ApiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable             | Default                  |
    /// |----------------------|--------------------------|
    /// | `BIND_ADDR`          | `127.0.0.1:3000`         |
    /// | `DATABASE_URL`       | `sqlite://todo.sqlite`   |
    /// | `JWT_ACCESS_SECRET`  | required                 |
    /// | `JWT_REFRESH_SECRET` | required                 |
    /// | `APP_ENV`            | `development`            |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let access = lookup(ACCESS_SECRET_VAR).ok_or(MissingSecret(ACCESS_SECRET_VAR))?;
        let refresh = lookup(REFRESH_SECRET_VAR).ok_or(MissingSecret(REFRESH_SECRET_VAR))?;
        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            secrets: SessionSecrets::new(access, refresh)?,
            secure_cookies: is_production(lookup("APP_ENV").as_deref()),
        })
    }

    /// Replaces the host and/or port of `bind_addr`. Parts not given keep
    /// their configured value.
    pub fn override_listen(&mut self, host: Option<&str>, port: Option<u16>) {
        if host.is_none() && port.is_none() {
            return;
        }
        let (current_host, current_port) = self
            .bind_addr
            .rsplit_once(':')
            .unwrap_or((self.bind_addr.as_str(), "3000"));
        let host = host.unwrap_or(current_host);
        self.bind_addr = match port {
            Some(port) => format!("{host}:{port}"),
            None => format!("{host}:{current_port}"),
        };
    }
}

/// Whether an `APP_ENV` value names the production environment.
pub fn is_production(app_env: Option<&str>) -> bool {
    app_env.is_some_and(|env| env.eq_ignore_ascii_case("production"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    const SECRETS: [(&str, &str); 2] = [
        ("JWT_ACCESS_SECRET", "access"),
        ("JWT_REFRESH_SECRET", "refresh"),
    ];

    #[test]
    fn defaults_apply_when_only_secrets_are_set() {
        let config = ApiConfig::from_lookup(lookup(&SECRETS)).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert!(!config.secure_cookies);
    }

    #[test]
    fn environment_values_are_honoured() {
        static VARS: [(&str, &str); 5] = [
            ("JWT_ACCESS_SECRET", "access"),
            ("JWT_REFRESH_SECRET", "refresh"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("APP_ENV", "production"),
        ];
        let config = ApiConfig::from_lookup(lookup(&VARS)).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.secure_cookies);
    }

    #[test]
    fn missing_secret_names_the_variable() {
        static VARS: [(&str, &str); 1] = [("JWT_ACCESS_SECRET", "access")];
        let err = ApiConfig::from_lookup(lookup(&VARS)).unwrap_err();
        assert!(err.to_string().contains("JWT_REFRESH_SECRET"));
    }

    #[test]
    fn listen_override_keeps_unspecified_parts() {
        static VARS: [(&str, &str); 3] = [
            ("JWT_ACCESS_SECRET", "access"),
            ("JWT_REFRESH_SECRET", "refresh"),
            ("BIND_ADDR", "0.0.0.0:8080"),
        ];
        let mut config = ApiConfig::from_lookup(lookup(&VARS)).unwrap();
        config.override_listen(None, None);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        config.override_listen(None, Some(9000));
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        config.override_listen(Some("127.0.0.1"), None);
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn production_detection() {
        assert!(is_production(Some("production")));
        assert!(is_production(Some("PRODUCTION")));
        assert!(!is_production(Some("development")));
        assert!(!is_production(None));
    }
}
