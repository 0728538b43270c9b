//! Compiler plugin contract and registry.
//!
//! Each plugin recognizes requests for one artifact format (by destination
//! path suffix), knows which source extension to substitute to find the
//! input file, and translates source text into artifact text. The bundled
//! plugins shell out to external compiler toolchains; anything implementing
//! [`Compiler`] can take their place.

use crate::error::{ConfigError, Result};
use async_trait::async_trait;
use std::sync::Arc;

pub mod coffee;
pub mod exec;
pub mod less;
pub mod sass;

#[async_trait]
pub trait Compiler: Send + Sync + 'static {
    /// Registry identifier, e.g. `"sass"`.
    fn name(&self) -> &'static str;

    /// Destination suffix this plugin produces, e.g. `".css"`.
    fn artifact_extension(&self) -> &'static str;

    /// Source suffix substituted to derive the input path, e.g. `".sass"`.
    fn source_extension(&self) -> &'static str;

    /// Match predicate, a pure function of the destination path.
    fn matches(&self, path: &str) -> bool {
        path.ends_with(self.artifact_extension())
    }

    /// Translate source text into artifact text.
    async fn compile(&self, source: &str) -> Result<String>;
}

impl std::fmt::Debug for dyn Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compiler").field("name", &self.name()).finish()
    }
}

/// Ordered, read-only set of enabled compilers. Priority is position:
/// the dispatcher uses the first plugin whose match predicate accepts a
/// request path.
#[derive(Debug)]
pub struct Registry {
    plugins: Vec<Arc<dyn Compiler>>,
}

impl Registry {
    /// Build a registry from an ordered list of plugin identifiers.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.is_empty() {
            return Err(ConfigError::NothingEnabled.into());
        }

        let plugins = names
            .iter()
            .map(|name| lookup(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { plugins })
    }

    /// Registry with an explicit plugin set, for callers wiring their own
    /// [`Compiler`] implementations.
    pub fn from_plugins(plugins: Vec<Arc<dyn Compiler>>) -> Result<Self> {
        if plugins.is_empty() {
            return Err(ConfigError::NothingEnabled.into());
        }
        Ok(Self { plugins })
    }

    pub fn plugins(&self) -> &[Arc<dyn Compiler>] {
        &self.plugins
    }

    /// First enabled plugin whose match predicate accepts `path`.
    pub fn first_match(&self, path: &str) -> Option<&Arc<dyn Compiler>> {
        self.plugins.iter().find(|p| p.matches(path))
    }
}

/// Instantiate a bundled compiler by identifier.
pub fn lookup(name: &str) -> Result<Arc<dyn Compiler>> {
    match name {
        "sass" => Ok(Arc::new(sass::SassCompiler::new())),
        "less" => Ok(Arc::new(less::LessCompiler::new())),
        "coffeescript" => Ok(Arc::new(coffee::CoffeeCompiler::new())),
        other => Err(ConfigError::UnknownCompiler(other.to_string()).into()),
    }
}

/// Whether `name` refers to a bundled compiler.
pub fn is_known(name: &str) -> bool {
    matches!(name, "sass" | "less" | "coffeescript")
}
