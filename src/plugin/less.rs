//! Less to CSS.

use super::{exec, Compiler};
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::OnceCell;

#[derive(Default)]
pub struct LessCompiler {
    executable: OnceCell<String>,
}

impl LessCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    async fn executable(&self) -> &str {
        self.executable
            .get_or_init(|| async {
                std::env::var("LESSC_BIN").unwrap_or_else(|_| "lessc".to_string())
            })
            .await
    }
}

#[async_trait]
impl Compiler for LessCompiler {
    fn name(&self) -> &'static str {
        "less"
    }

    fn artifact_extension(&self) -> &'static str {
        ".css"
    }

    fn source_extension(&self) -> &'static str {
        ".less"
    }

    async fn compile(&self, source: &str) -> Result<String> {
        let exe = self.executable().await;
        // lessc treats "-" as "read from stdin"
        exec::run("less", exe, &["-"], source).await
    }
}
