//! Request dispatch: match a request path to a plugin, decide staleness,
//! and recompile before the request reaches file serving.

use crate::compile::{pipeline, staleness, Decision, Minifier};
use crate::config::Config;
use crate::error::Result;
use crate::plugin::Registry;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use warp::http::Method;


/// Outcome of dispatching one request. Both variants mean "forward to the
/// next pipeline stage"; `Compiled` records that a fresh artifact was
/// written first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    PassThrough,
    Compiled,
}

pub struct AssetCompiler {
    src_dir: PathBuf,
    dest_dir: PathBuf,
    autocompile: bool,
    registry: Registry,
    minifier: Option<Minifier>,
}

impl AssetCompiler {
    /// Build the middleware from configuration. Fails if `enable` is empty
    /// or names an unknown compiler.
    pub fn new(config: &Config) -> Result<Self> {
        let registry = Registry::from_names(&config.enable)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Build the middleware around an explicit registry, for callers wiring
    /// their own [`crate::plugin::Compiler`] implementations.
    pub fn with_registry(config: &Config, registry: Registry) -> Self {
        Self {
            src_dir: config.src_dir(),
            dest_dir: config.dest_dir(),
            autocompile: config.autocompile,
            registry,
            minifier: config.compress.then(Minifier::new),
        }
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Dispatch one request. Only GET requests are eligible; the first
    /// enabled plugin whose match predicate accepts the path is consulted,
    /// and staleness decides whether a recompile runs before forwarding.
    pub async fn handle(&self, method: &Method, path: &str) -> Result<Dispatch> {
        if method != Method::GET {
            return Ok(Dispatch::PassThrough);
        }

        let pathname = path.split('?').next().unwrap_or(path);

        let Some(plugin) = self.registry.first_match(pathname) else {
            return Ok(Dispatch::PassThrough);
        };

        let rel = pathname.trim_start_matches('/');
        let src_rel = match rel.strip_suffix(plugin.artifact_extension()) {
            Some(stem) => format!("{}{}", stem, plugin.source_extension()),
            // Custom match predicates can accept paths the extension
            // substitution cannot rewrite; those are not ours to build.
            None => return Ok(Dispatch::PassThrough),
        };
        let src = self.src_dir.join(&src_rel);
        let dest = self.dest_dir.join(rel);

        match staleness::resolve(&src, &dest, self.autocompile).await? {
            Decision::PassThrough => {
                debug!(path = pathname, "artifact fresh, deferring to file serving");
                Ok(Dispatch::PassThrough)
            }
            Decision::NotFound => {
                debug!(src = %src.display(), "source missing, passing through");
                Ok(Dispatch::PassThrough)
            }
            Decision::Compile => {
                info!(
                    plugin = plugin.name(),
                    src = %src.display(),
                    dest = %dest.display(),
                    "compiling"
                );
                pipeline::compile_to(&src, &dest, plugin.as_ref(), self.minifier.as_ref()).await?;
                Ok(Dispatch::Compiled)
            }
        }
    }
}
