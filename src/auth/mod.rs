use std::collections::HashMap;

use crate::config::SecurityConfig;

/// Credential directory backing HTTP Basic authentication.
///
/// Seed passwords are hashed once at startup with the configured bcrypt cost;
/// plaintext is never kept around after construction.
pub struct UserDirectory {
    users: HashMap<String, String>,
}

impl UserDirectory {
    pub fn from_config(security: &SecurityConfig) -> Result<Self, bcrypt::BcryptError> {
        let mut users = HashMap::with_capacity(security.users.len());
        for seed in &security.users {
            let hash = bcrypt::hash(&seed.password, security.bcrypt_cost)?;
            users.insert(seed.username.clone(), hash);
        }
        Ok(Self { users })
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(hash) => bcrypt::verify(password, hash).unwrap_or(false),
            None => false,
        }
    }
}
