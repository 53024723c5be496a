use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub features: FeatureConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            api_key: None,
        }
    }
}

/// Deployment capabilities that gate parts of the admin menu
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub enterprise_enabled: bool,
    pub cloud_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Some(port) = env::var("ADMIN_SHELL_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|v| v.parse().ok())
        {
            self.server.port = port;
        }
        if let Ok(v) = env::var("ADMIN_SHELL_ENABLE_CORS") {
            self.server.enable_cors = v.parse().unwrap_or(self.server.enable_cors);
        }
        if let Ok(v) = env::var("ADMIN_SHELL_CORS_ORIGINS") {
            self.server.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }

        // Upstream overrides
        if let Ok(v) = env::var("ADMIN_SHELL_UPSTREAM_URL") {
            self.upstream.base_url = v;
        }
        if let Ok(v) = env::var("ADMIN_SHELL_UPSTREAM_TIMEOUT_SECS") {
            self.upstream.timeout_secs = v.parse().unwrap_or(self.upstream.timeout_secs);
        }
        if let Ok(v) = env::var("ADMIN_SHELL_API_KEY") {
            self.upstream.api_key = Some(v).filter(|k| !k.is_empty());
        }

        // Feature overrides
        if let Ok(v) = env::var("ENABLE_ENTERPRISE") {
            self.features.enterprise_enabled = v.parse().unwrap_or(self.features.enterprise_enabled);
        }
        if let Ok(v) = env::var("ENABLE_CLOUD") {
            self.features.cloud_enabled = v.parse().unwrap_or(self.features.cloud_enabled);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 3000,
                enable_cors: true,
                cors_origins: vec!["http://localhost:3000".to_string(), "http://localhost:5173".to_string()],
            },
            upstream: UpstreamConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_secs: 30,
                api_key: None,
            },
            features: FeatureConfig::default(),
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                port: 3000,
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
            upstream: UpstreamConfig {
                base_url: "http://api-server:8080".to_string(),
                timeout_secs: 15,
                api_key: None,
            },
            features: FeatureConfig::default(),
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 3000,
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
            },
            upstream: UpstreamConfig {
                base_url: "http://api-server:8080".to_string(),
                timeout_secs: 10,
                api_key: None,
            },
            features: FeatureConfig::default(),
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
