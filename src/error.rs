use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiddlewareError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Compiler '{plugin}' failed: {message}")]
    Compile { plugin: &'static str, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("'enable' option is not set, nothing will be compiled")]
    NothingEnabled,

    #[error("Unknown compiler: {0}")]
    UnknownCompiler(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, MiddlewareError>;

impl warp::reject::Reject for MiddlewareError {}
