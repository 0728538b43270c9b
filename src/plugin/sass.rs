//! Sass (indented syntax) to CSS.

use super::{exec, Compiler};
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::OnceCell;

#[derive(Default)]
pub struct SassCompiler {
    // Resolved once on first compile and cached for the life of the plugin.
    executable: OnceCell<String>,
}

impl SassCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    async fn executable(&self) -> &str {
        self.executable
            .get_or_init(|| async {
                std::env::var("SASS_BIN").unwrap_or_else(|_| "sass".to_string())
            })
            .await
    }
}

#[async_trait]
impl Compiler for SassCompiler {
    fn name(&self) -> &'static str {
        "sass"
    }

    fn artifact_extension(&self) -> &'static str {
        ".css"
    }

    fn source_extension(&self) -> &'static str {
        ".sass"
    }

    async fn compile(&self, source: &str) -> Result<String> {
        let exe = self.executable().await;
        exec::run("sass", exe, &["--stdin", "--indented"], source).await
    }
}
