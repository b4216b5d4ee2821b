//! Server configuration for the movies API.
//!
//! Every setting can come from the command line or the environment.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MOVIES_SERVER_PORT` | 8000 | Server port |
//! | `MOVIES_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `MOVIES_LOG_LEVEL` | info | Log level |
//! | `MOVIES_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `MOVIES_ENABLE_CORS` | true | Enable CORS |
//! | `MOVIES_CORS_ORIGINS` | * | Allowed origins |
//! | `MOVIES_ELASTICSEARCH_NODES` | http://127.0.0.1:9200 | Elasticsearch URLs (comma-separated) |
//! | `MOVIES_ELASTICSEARCH_USERNAME` | - | Basic auth user |
//! | `MOVIES_ELASTICSEARCH_PASSWORD` | - | Basic auth password |
//! | `MOVIES_FILMS_INDEX` | movies | Film index |
//! | `MOVIES_GENRES_INDEX` | genres | Genre index |
//! | `MOVIES_PERSONS_INDEX` | persons | Person index |
//! | `MOVIES_REDIS_URL` | redis://127.0.0.1:6379 | Cache URL |
//! | `MOVIES_CACHE_TTL` | 300 | Cache TTL (seconds) |
//! | `MOVIES_DEFAULT_PAGE_SIZE` | 10 | Page size when none is given |
//! | `MOVIES_MAX_PAGE_SIZE` | 10000 | Largest accepted page size |
//!
//! # Example
//!
//! ```rust
//! use movies_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use std::time::Duration;

use clap::Parser;

/// Server configuration for the movies API.
#[derive(Debug, Clone, Parser)]
#[command(name = "movies-api")]
#[command(about = "Read-only movies catalog API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "MOVIES_SERVER_PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "MOVIES_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "MOVIES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "MOVIES_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "MOVIES_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "MOVIES_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Elasticsearch node URLs (comma-separated).
    #[arg(
        long,
        env = "MOVIES_ELASTICSEARCH_NODES",
        default_value = "http://127.0.0.1:9200"
    )]
    pub elasticsearch_nodes: String,

    /// Elasticsearch basic auth username.
    #[arg(long, env = "MOVIES_ELASTICSEARCH_USERNAME")]
    pub elasticsearch_username: Option<String>,

    /// Elasticsearch basic auth password.
    #[arg(long, env = "MOVIES_ELASTICSEARCH_PASSWORD")]
    pub elasticsearch_password: Option<String>,

    /// Index holding film documents.
    #[arg(long, env = "MOVIES_FILMS_INDEX", default_value = "movies")]
    pub films_index: String,

    /// Index holding genre documents.
    #[arg(long, env = "MOVIES_GENRES_INDEX", default_value = "genres")]
    pub genres_index: String,

    /// Index holding person documents.
    #[arg(long, env = "MOVIES_PERSONS_INDEX", default_value = "persons")]
    pub persons_index: String,

    /// Redis connection URL.
    #[arg(long, env = "MOVIES_REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    /// Cache entry lifetime in seconds.
    #[arg(long, env = "MOVIES_CACHE_TTL", default_value = "300")]
    pub cache_ttl: u64,

    /// Page size used when a request does not give one.
    #[arg(long, env = "MOVIES_DEFAULT_PAGE_SIZE", default_value = "10")]
    pub default_page_size: u32,

    /// Largest page size a request may ask for.
    #[arg(long, env = "MOVIES_MAX_PAGE_SIZE", default_value = "10000")]
    pub max_page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            elasticsearch_nodes: "http://127.0.0.1:9200".to_string(),
            elasticsearch_username: None,
            elasticsearch_password: None,
            films_index: "movies".to_string(),
            genres_index: "genres".to_string(),
            persons_index: "persons".to_string(),
            redis_url: "redis://127.0.0.1:6379".to_string(),
            cache_ttl: 300,
            default_page_size: 10,
            max_page_size: 10_000,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the cache TTL.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Returns the configured Elasticsearch node URLs.
    pub fn elasticsearch_node_list(&self) -> Vec<String> {
        self.elasticsearch_nodes
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Builds the Elasticsearch backend configuration.
    #[cfg(feature = "elasticsearch")]
    pub fn elasticsearch_config(
        &self,
    ) -> movies_persistence::backends::elasticsearch::ElasticsearchConfig {
        use movies_persistence::backends::elasticsearch::{ElasticsearchAuth, ElasticsearchConfig};

        let auth = match (&self.elasticsearch_username, &self.elasticsearch_password) {
            (Some(username), Some(password)) => Some(ElasticsearchAuth::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        };

        ElasticsearchConfig {
            nodes: self.elasticsearch_node_list(),
            request_timeout_ms: self.request_timeout * 1000,
            auth,
            ..Default::default()
        }
    }

    /// Builds the Redis backend configuration.
    #[cfg(feature = "redis")]
    pub fn redis_config(&self) -> movies_persistence::backends::redis::RedisConfig {
        movies_persistence::backends::redis::RedisConfig {
            url: self.redis_url.clone(),
            ..Default::default()
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.elasticsearch_node_list().is_empty() {
            errors.push("At least one Elasticsearch node is required".to_string());
        }

        if self.elasticsearch_username.is_some() != self.elasticsearch_password.is_some() {
            errors.push("Elasticsearch username and password must be set together".to_string());
        }

        if self.cache_ttl == 0 {
            errors.push("Cache TTL cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            max_page_size: 100,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.films_index, "movies");
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert!(config.enable_cors);
    }

    #[test]
    fn test_parse_matches_default() {
        let parsed = ServerConfig::try_parse_from(["movies-api"]).unwrap();
        let default = ServerConfig::default();
        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.redis_url, default.redis_url);
        assert_eq!(parsed.max_page_size, default.max_page_size);
    }

    #[test]
    fn test_parse_args() {
        let config = ServerConfig::try_parse_from([
            "movies-api",
            "--port",
            "9000",
            "--elasticsearch-nodes",
            "http://es1:9200, http://es2:9200",
            "--cache-ttl",
            "60",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.elasticsearch_node_list(),
            vec!["http://es1:9200", "http://es2:9200"]
        );
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_validate_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_collects_errors() {
        let config = ServerConfig {
            port: 0,
            elasticsearch_nodes: " ".to_string(),
            elasticsearch_username: Some("elastic".to_string()),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("Port")));
        assert!(errors.iter().any(|e| e.contains("username and password")));
    }

    #[test]
    fn test_validate_invalid_page_sizes() {
        let config = ServerConfig {
            default_page_size: 100,
            max_page_size: 50,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "elasticsearch")]
    #[test]
    fn test_elasticsearch_config() {
        let config = ServerConfig {
            elasticsearch_username: Some("elastic".to_string()),
            elasticsearch_password: Some("secret".to_string()),
            ..Default::default()
        };
        let es = config.elasticsearch_config();
        assert_eq!(es.nodes, vec!["http://127.0.0.1:9200"]);
        assert_eq!(es.request_timeout_ms, 30_000);
        assert!(es.auth.is_some());
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.max_page_size, 100);
    }
}
