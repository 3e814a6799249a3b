//! Вход единственного администратора панели

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

use anyhow::Result;
use contracts::shared::validation::is_valid_email;
use contracts::system::auth::UserInfo;

use crate::shared::config::AuthConfig;

const ADMIN_ID: &str = "1";
const MIN_PASSWORD_LEN: usize = 6;

/// Учётные данные администратора и секрет подписи токенов
pub struct AuthSettings {
    user: UserInfo,
    password_hash: String,
    jwt_secret: String,
}

impl AuthSettings {
    pub fn new(user: UserInfo, password_hash: String, jwt_secret: String) -> Self {
        Self {
            user,
            password_hash,
            jwt_secret,
        }
    }

    /// Пароль из конфигурации хэшируется один раз, при старте
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let password_hash = match &config.admin_password_hash {
            Some(hash) => hash.clone(),
            None => password::hash_password(&config.admin_password)?,
        };
        let jwt_secret = match &config.jwt_secret {
            Some(secret) => secret.clone(),
            None => {
                tracing::info!("JWT secret not configured, generated a new one");
                jwt::generate_jwt_secret()
            }
        };

        Ok(Self::new(
            UserInfo {
                id: ADMIN_ID.to_string(),
                name: config.admin_name.clone(),
                email: config.admin_email.clone(),
            },
            password_hash,
            jwt_secret,
        ))
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// `Ok(None)` - неверные учётные данные (включая некорректный email
    /// или слишком короткий пароль)
    pub fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<UserInfo>> {
        let email = email.trim();
        if !is_valid_email(email) || password.chars().count() < MIN_PASSWORD_LEN {
            return Ok(None);
        }
        if !email.eq_ignore_ascii_case(&self.user.email) {
            return Ok(None);
        }
        if !password::verify_password(password, &self.password_hash)? {
            return Ok(None);
        }
        Ok(Some(self.user.clone()))
    }
}
