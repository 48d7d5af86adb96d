use anyhow::Result;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Detects the environment from the process variables
    pub fn detect() -> Self {
        Self::from_vars(
            env::var("AWS_LAMBDA_FUNCTION_NAME").ok().as_deref(),
            env::var("APP_ENV").ok().as_deref(),
        )
    }

    fn from_vars(lambda_function: Option<&str>, app_env: Option<&str>) -> Self {
        // Running inside AWS Lambda
        if lambda_function.is_some() {
            return Self::Production;
        }

        match app_env {
            Some("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server_host: String,
    pub server_port: u16,
    pub auth_service_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Loads the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let environment = Environment::detect();

        tracing::info!(
            "🌍 Environment detected: {}",
            environment.as_str().to_uppercase()
        );

        let auth_service_url =
            Self::get_auth_service_url(&environment, env::var("AUTH_SERVICE_URL").ok())?;
        let upstream_timeout = Duration::from_secs(
            env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        );
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        tracing::info!("✅ Configuration loaded successfully");
        tracing::debug!("   Auth service: {}", Self::mask_credentials(&auth_service_url));
        tracing::debug!("   Upstream timeout: {:?}", upstream_timeout);
        tracing::debug!("   Server: {}:{}", server_host, server_port);

        Ok(Self {
            environment,
            server_host,
            server_port,
            auth_service_url,
            upstream_timeout,
        })
    }

    /// AUTH_SERVICE_URL is mandatory in production
    fn get_auth_service_url(environment: &Environment, value: Option<String>) -> Result<String> {
        let url = match value {
            Some(url) if !url.trim().is_empty() => url,
            _ if environment.is_production() => {
                tracing::error!("❌ AUTH_SERVICE_URL not set in production!");
                anyhow::bail!(
                    "AUTH_SERVICE_URL must be set in production! \
                     Configure it in Lambda environment variables."
                );
            }
            _ => {
                tracing::warn!("⚠️  AUTH_SERVICE_URL not set, using http://localhost:8081");
                "http://localhost:8081".to_string()
            }
        };

        Ok(url.trim().trim_end_matches('/').to_string())
    }

    /// Hides credentials embedded in a URL
    fn mask_credentials(url: &str) -> String {
        if let Some(at_pos) = url.find('@')
            && let Some(scheme_end) = url.find("://")
        {
            let scheme = &url[..scheme_end + 3];
            let after_at = &url[at_pos..];
            return format!("{}***:***{}", scheme, after_at);
        }
        url.to_string()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
