use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Route patterns that require authentication. A trailing `/**` covers the
    /// whole subtree under the prefix.
    pub protected_paths: Vec<String>,
    /// Work factor for hashing seed user passwords at startup.
    pub bcrypt_cost: u32,
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

impl SecurityConfig {
    /// True when `path` falls under one of the protected patterns.
    pub fn protects(&self, path: &str) -> bool {
        self.protected_paths.iter().any(|pattern| match pattern.strip_suffix("/**") {
            Some(prefix) => path == prefix || path.starts_with(&format!("{}/", prefix)),
            None => path == pattern,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Environment presets first, specific env vars override
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("JOBBOARD_BIND_ADDRESS") {
            self.server.bind_address = v;
        }
        if let Ok(v) = env::var("JOBBOARD_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("JOBBOARD_PROTECTED_PATHS") {
            self.security.protected_paths = v.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Ok(v) = env::var("JOBBOARD_BCRYPT_COST") {
            self.security.bcrypt_cost = v.parse().unwrap_or(self.security.bcrypt_cost);
        }
        if let Ok(v) = env::var("JOBBOARD_USERS") {
            self.security.users = parse_seed_users(&v);
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                bind_address: "0.0.0.0".to_string(),
                port: 3000,
            },
            security: SecurityConfig {
                protected_paths: vec!["/jobseeker/**".to_string()],
                // low work factor keeps startup and the test suite fast
                bcrypt_cost: 4,
                users: vec![
                    // miles1 is a company job poster
                    SeedUser {
                        username: "miles1".to_string(),
                        password: "password123".to_string(),
                    },
                    // job-searcher browses listings and has never posted one
                    SeedUser {
                        username: "job-searcher".to_string(),
                        password: "no-jobs-posted".to_string(),
                    },
                ],
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                bind_address: "0.0.0.0".to_string(),
                port: 3000,
            },
            security: SecurityConfig {
                protected_paths: vec!["/jobseeker/**".to_string()],
                bcrypt_cost: bcrypt::DEFAULT_COST,
                // no built-in accounts; credentials come from JOBBOARD_USERS
                users: vec![],
            },
        }
    }
}

/// Parse `user:pass,user:pass` into seed users. Entries without a colon are
/// skipped with a warning rather than aborting startup.
fn parse_seed_users(raw: &str) -> Vec<SeedUser> {
    raw.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                return None;
            }
            match entry.split_once(':') {
                Some((username, password)) => Some(SeedUser {
                    username: username.to_string(),
                    password: password.to_string(),
                }),
                None => {
                    tracing::warn!("ignoring malformed JOBBOARD_USERS entry '{}'", entry);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.security.bcrypt_cost, 4);
        assert_eq!(config.security.users.len(), 2);
        assert_eq!(config.security.users[0].username, "miles1");
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.security.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(config.security.users.is_empty());
    }

    #[test]
    fn test_protected_path_patterns() {
        let security = AppConfig::development().security;
        assert!(security.protects("/jobseeker"));
        assert!(security.protects("/jobseeker/42"));
        assert!(!security.protects("/health"));
        assert!(!security.protects("/jobseekers"));
    }

    #[test]
    fn test_parse_seed_users() {
        let users = parse_seed_users("alice:s3cret, bob:hunter2,malformed,");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].password, "s3cret");
        assert_eq!(users[1].username, "bob");
    }
}
