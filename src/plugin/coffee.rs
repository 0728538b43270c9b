//! CoffeeScript to JavaScript.

use super::{exec, Compiler};
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::OnceCell;

#[derive(Default)]
pub struct CoffeeCompiler {
    executable: OnceCell<String>,
}

impl CoffeeCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    async fn executable(&self) -> &str {
        self.executable
            .get_or_init(|| async {
                std::env::var("COFFEE_BIN").unwrap_or_else(|_| "coffee".to_string())
            })
            .await
    }
}

#[async_trait]
impl Compiler for CoffeeCompiler {
    fn name(&self) -> &'static str {
        "coffeescript"
    }

    fn artifact_extension(&self) -> &'static str {
        ".js"
    }

    fn source_extension(&self) -> &'static str {
        ".coffee"
    }

    async fn compile(&self, source: &str) -> Result<String> {
        let exe = self.executable().await;
        exec::run("coffeescript", exe, &["--compile", "--stdio"], source).await
    }
}
