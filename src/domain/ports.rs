use crate::utils::error::Result;
use async_trait::async_trait;

/// Capability discovered by the factories loader: produce a descriptive string.
pub trait DummyFactory: Send + Sync {
    fn describe(&self) -> String;
}

/// A place a factories file can be read from.
#[async_trait]
pub trait FactoriesSource: Send + Sync {
    /// Name used in logs and parse errors.
    fn name(&self) -> &str;

    async fn read_to_string(&self) -> Result<String>;
}
