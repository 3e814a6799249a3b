use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

/// Адреса двух upstream-сервисов
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Сервис клиентов и заказов
    pub customers_url: String,
    /// Сервис поставщиков и счетов
    pub providers_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            customers_url: "http://localhost:8080".into(),
            providers_url: "http://localhost:8081".into(),
            timeout_secs: 30,
        }
    }
}

/// Единственный пользователь панели - администратор
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_email: String,
    pub admin_name: String,
    pub admin_password: String,
    /// Argon2 PHC-строка; если задана, `admin_password` игнорируется
    pub admin_password_hash: Option<String>,
    /// Если не задан, генерируется при старте
    pub jwt_secret: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@admin.com".into(),
            admin_name: "Administrador".into(),
            admin_password: "admin123".into(),
            admin_password_hash: None,
            jwt_secret: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[upstream]
customers_url = "http://localhost:8080"
providers_url = "http://localhost:8081"
timeout_secs = 30

[auth]
admin_email = "admin@admin.com"
admin_name = "Administrador"
admin_password = "admin123"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current directory (development)
/// 3. Falls back to embedded default config
///
/// Environment variables override the file in every case.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    candidates.push(PathBuf::from("config.toml"));

    for path in candidates {
        if path.exists() {
            return Some(path);
        }
        tracing::debug!("config.toml not found at: {}", path.display());
    }
    None
}

/// Переменные окружения поверх файла; пустые значения игнорируются
fn apply_env_overrides(config: &mut Config, env: impl Fn(&str) -> Option<String>) {
    let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = var("CLIENTES_API_URL") {
        config.upstream.customers_url = url;
    }
    if let Some(url) = var("PROVEEDORES_API_URL") {
        config.upstream.providers_url = url;
    }
    if let Some(email) = var("ADMIN_EMAIL") {
        config.auth.admin_email = email;
    }
    if let Some(name) = var("ADMIN_NAME") {
        config.auth.admin_name = name;
    }
    if let Some(password) = var("ADMIN_PASSWORD") {
        config.auth.admin_password = password;
    }
    if let Some(hash) = var("ADMIN_PASSWORD_HASH") {
        config.auth.admin_password_hash = Some(hash);
    }
    if let Some(secret) = var("JWT_SECRET") {
        config.auth.jwt_secret = Some(secret);
    }
}
