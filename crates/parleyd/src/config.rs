//! Configuration management for parleyd.
//!
//! Loads settings from $PARLEY_CONFIG or ./parley.toml, or uses defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{info, warn};

/// Default config file path
pub const CONFIG_PATH: &str = "parley.toml";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    // Localhost only; put a reverse proxy in front for anything else
    "127.0.0.1:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Knowledge base configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Path to the JSON knowledge base file
    #[serde(default = "default_knowledge_path")]
    pub path: String,
}

fn default_knowledge_path() -> String {
    "knowledge_base.json".to_string()
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: default_knowledge_path(),
        }
    }
}

/// Topic summarizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Article base URL; the topic is appended with spaces as underscores
    #[serde(default = "default_wiki_base_url")]
    pub base_url: String,

    /// User-Agent sent with fetches; some wikis reject the default client UA
    #[serde(default = "default_wiki_user_agent")]
    pub user_agent: String,

    /// Fetch timeout in seconds
    #[serde(default = "default_wiki_timeout")]
    pub timeout_secs: u64,
}

fn default_wiki_base_url() -> String {
    "https://simple.wikipedia.org/wiki".to_string()
}

fn default_wiki_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_wiki_timeout() -> u64 {
    10
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            base_url: default_wiki_base_url(),
            user_agent: default_wiki_user_agent(),
            timeout_secs: default_wiki_timeout(),
        }
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    #[serde(default)]
    pub wiki: WikiConfig,
}

impl Config {
    /// Load config from $PARLEY_CONFIG or the default path, falling back to
    /// defaults when no file is present.
    pub fn load() -> Self {
        let path = std::env::var("PARLEY_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string());
        Self::load_from_path(&path).unwrap_or_else(|e| {
            warn!("Config not found, using defaults: {}", e);
            Config::default()
        })
    }

    /// Load config from specific path
    pub fn load_from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded config from {}", path);
        Ok(config)
    }
}
