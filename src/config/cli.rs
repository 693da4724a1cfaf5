use crate::core::FactoriesSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Factories file on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: PathBuf,
    name: String,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl FactoriesSource for LocalSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_to_string(&self) -> Result<String> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(content)
    }
}

/// In-memory factories document, mostly for tests and embedded defaults.
#[derive(Debug, Clone)]
pub struct InlineSource {
    name: String,
    content: String,
}

impl InlineSource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[async_trait]
impl FactoriesSource for InlineSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_to_string(&self) -> Result<String> {
        Ok(self.content.clone())
    }
}
