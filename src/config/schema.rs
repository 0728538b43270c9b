use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory, defaults to the current working directory.
    #[serde(default)]
    pub src: Option<PathBuf>,
    /// Destination directory, defaults to `src`.
    #[serde(default)]
    pub dest: Option<PathBuf>,
    /// Enabled compilers, in priority order. Required, non-empty.
    #[serde(default)]
    pub enable: Vec<String>,
    /// Recompile on every request regardless of mtimes. Ideal for development.
    #[serde(default)]
    pub autocompile: bool,
    /// Strip whitespace and comments from compiled output.
    #[serde(default)]
    pub compress: bool,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Resolved source root, falling back to the current working directory.
    pub fn src_dir(&self) -> PathBuf {
        self.src
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Resolved destination root, falling back to the source root.
    pub fn dest_dir(&self) -> PathBuf {
        self.dest.clone().unwrap_or_else(|| self.src_dir())
    }
}
