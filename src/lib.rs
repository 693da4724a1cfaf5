pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{InlineSource, LocalSource};
pub use config::toml_config::FactoriesConfig;
pub use core::arguments::ArgumentResolver;
pub use core::loader::{FactoriesLoader, FailureHandler};
pub use core::registry::{dummy_factory_registry, FactoryRegistry, DUMMY_FACTORY};
pub use domain::model::{DummyFactoryRecord, FactoryDescription, ABSENT_TOKEN};
pub use domain::ports::{DummyFactory, FactoriesSource};
pub use utils::error::{LoaderError, Result};
