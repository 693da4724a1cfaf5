pub mod arguments;
pub mod loader;
pub mod registry;

pub use crate::domain::model::{DummyFactoryRecord, FactoryDescription, ABSENT_TOKEN};
pub use crate::domain::ports::{DummyFactory, FactoriesSource};
pub use crate::utils::error::Result;
