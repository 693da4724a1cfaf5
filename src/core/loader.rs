use crate::config::toml_config::FactoriesConfig;
use crate::core::arguments::ArgumentResolver;
use crate::core::registry::FactoryRegistry;
use crate::domain::ports::FactoriesSource;
use crate::utils::error::{LoaderError, Result};
use crate::utils::validation::Validate;
use std::fmt;
use std::sync::Arc;

type FailureCallback = Arc<dyn Fn(&str, &str, &LoaderError) + Send + Sync>;

/// What to do when one implementation cannot be instantiated.
#[derive(Clone, Default)]
pub enum FailureHandler {
    /// Abort the whole load with an `Instantiation` error.
    #[default]
    Throwing,
    /// Log a warning and skip the implementation.
    Logging,
    /// Hand the failure to a callback and skip the implementation.
    Custom(FailureCallback),
}

impl FailureHandler {
    /// Callback receives the factory type, the implementation id and the error.
    pub fn handle_with<F>(callback: F) -> Self
    where
        F: Fn(&str, &str, &LoaderError) + Send + Sync + 'static,
    {
        FailureHandler::Custom(Arc::new(callback))
    }

    fn handle(&self, capability: &str, implementation: &str, error: LoaderError) -> Result<()> {
        match self {
            FailureHandler::Throwing => Err(LoaderError::Instantiation {
                capability: capability.to_string(),
                implementation: implementation.to_string(),
                source: Box::new(error),
            }),
            FailureHandler::Logging => {
                tracing::warn!(
                    "⚠️ Unable to instantiate factory '{}' for '{}': {}",
                    implementation,
                    capability,
                    error
                );
                Ok(())
            }
            FailureHandler::Custom(callback) => {
                callback(capability, implementation, &error);
                Ok(())
            }
        }
    }
}

impl fmt::Debug for FailureHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureHandler::Throwing => f.write_str("Throwing"),
            FailureHandler::Logging => f.write_str("Logging"),
            FailureHandler::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Loads the implementations a factories file lists under a factory type.
#[derive(Debug, Clone, Default)]
pub struct FactoriesLoader {
    config: FactoriesConfig,
}

impl FactoriesLoader {
    pub fn new(config: FactoriesConfig) -> Self {
        Self { config }
    }

    /// Reads, validates and merges every source in order.
    pub async fn from_sources(sources: &[Box<dyn FactoriesSource>]) -> Result<Self> {
        let mut merged = FactoriesConfig::default();

        for source in sources {
            tracing::debug!("Reading factories from {}", source.name());
            let content = source.read_to_string().await?;
            let config = FactoriesConfig::from_named_toml_str(source.name(), &content)?;
            config.validate()?;
            merged.merge(config);
        }

        tracing::info!(
            "📦 Loaded {} factory type(s) from {} source(s)",
            merged.factories.len(),
            sources.len()
        );
        Ok(Self::new(merged))
    }

    pub fn config(&self) -> &FactoriesConfig {
        &self.config
    }

    pub fn load_factory_names(&self, capability: &str) -> Vec<String> {
        self.config.implementations(capability).to_vec()
    }

    /// Instantiates the implementations in config order, paired with their ids.
    pub fn load_named<T: ?Sized>(
        &self,
        capability: &str,
        registry: &FactoryRegistry<T>,
        arguments: &ArgumentResolver,
        failure_handler: &FailureHandler,
    ) -> Result<Vec<(String, Box<T>)>> {
        let names = self.load_factory_names(capability);
        if names.is_empty() {
            tracing::debug!("No implementations listed for '{}'", capability);
        }

        let mut loaded = Vec::with_capacity(names.len());
        for name in names {
            match registry.instantiate(&name, arguments) {
                Ok(instance) => {
                    tracing::debug!("Instantiated '{}' for '{}'", name, capability);
                    loaded.push((name, instance));
                }
                Err(e) => failure_handler.handle(capability, &name, e)?,
            }
        }

        Ok(loaded)
    }

    pub fn load<T: ?Sized>(
        &self,
        capability: &str,
        registry: &FactoryRegistry<T>,
        arguments: &ArgumentResolver,
        failure_handler: &FailureHandler,
    ) -> Result<Vec<Box<T>>> {
        Ok(self
            .load_named(capability, registry, arguments, failure_handler)?
            .into_iter()
            .map(|(_, instance)| instance)
            .collect())
    }
}
