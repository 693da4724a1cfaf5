use crate::core::arguments::ArgumentResolver;
use crate::domain::model::{
    BarDummyFactory, DummyFactoryRecord, FooDummyFactory, LabelDummyFactory,
};
use crate::domain::ports::DummyFactory;
use crate::utils::error::{LoaderError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type Constructor<T> = Arc<dyn Fn(&ArgumentResolver) -> Result<Box<T>> + Send + Sync>;

/// Identifier to constructor table for one factory type.
pub struct FactoryRegistry<T: ?Sized> {
    capability: String,
    constructors: HashMap<String, Constructor<T>>,
}

impl<T: ?Sized> FactoryRegistry<T> {
    pub fn new(capability: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            constructors: HashMap::new(),
        }
    }

    pub fn capability(&self) -> &str {
        &self.capability
    }

    pub fn register<F>(&mut self, id: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn(&ArgumentResolver) -> Result<Box<T>> + Send + Sync + 'static,
    {
        let id = id.into();
        if self
            .constructors
            .insert(id.clone(), Arc::new(constructor))
            .is_some()
        {
            tracing::debug!("Replaced constructor '{}' for '{}'", id, self.capability);
        }
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.constructors.contains_key(id)
    }

    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn instantiate(&self, id: &str, arguments: &ArgumentResolver) -> Result<Box<T>> {
        let constructor = self
            .constructors
            .get(id)
            .ok_or_else(|| LoaderError::UnknownImplementation {
                capability: self.capability.clone(),
                implementation: id.to_string(),
            })?;
        constructor(arguments)
    }
}

impl<T: ?Sized> fmt::Debug for FactoryRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("capability", &self.capability)
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

pub const DUMMY_FACTORY: &str = "dummy-factory";

/// Registry of the built-in `DummyFactory` implementations.
pub fn dummy_factory_registry() -> FactoryRegistry<dyn DummyFactory> {
    let mut registry: FactoryRegistry<dyn DummyFactory> = FactoryRegistry::new(DUMMY_FACTORY);
    registry
        .register("foo", |_| Ok(Box::new(FooDummyFactory)))
        .register("bar", |_| Ok(Box::new(BarDummyFactory)))
        .register("label", |args| {
            Ok(Box::new(LabelDummyFactory::new(args.require::<String>()?)))
        })
        .register("multiple-args", |args| {
            let label = args.require::<String>()?;
            let record = match args.resolve::<i32>() {
                Some(age) => DummyFactoryRecord::with_age(label, Some(age)),
                None => DummyFactoryRecord::new(label),
            };
            Ok(Box::new(record))
        });
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_identifiers() {
        let registry = dummy_factory_registry();
        assert_eq!(
            registry.identifiers(),
            vec!["bar", "foo", "label", "multiple-args"]
        );
        assert_eq!(registry.capability(), DUMMY_FACTORY);
    }

    #[test]
    fn test_multiple_args_selects_construction_path() {
        let registry = dummy_factory_registry();

        let one = registry
            .instantiate("multiple-args", &ArgumentResolver::of("Jane".to_string()))
            .unwrap();
        assert_eq!(one.describe(), "Janenull");

        let two = registry
            .instantiate(
                "multiple-args",
                &ArgumentResolver::of("Jane".to_string()).and(42i32),
            )
            .unwrap();
        assert_eq!(two.describe(), "Jane42");
    }

    #[test]
    fn test_missing_label_fails() {
        let registry = dummy_factory_registry();
        let err = registry
            .instantiate("multiple-args", &ArgumentResolver::of(42i32))
            .err()
            .unwrap();
        assert!(matches!(err, LoaderError::MissingArgument { .. }));
    }

    #[test]
    fn test_unknown_identifier() {
        let registry = dummy_factory_registry();
        let err = registry
            .instantiate("nope", &ArgumentResolver::none())
            .err()
            .unwrap();
        match err {
            LoaderError::UnknownImplementation { implementation, .. } => {
                assert_eq!(implementation, "nope")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = dummy_factory_registry();
        registry.register("foo", |_| Ok(Box::new(BarDummyFactory)));

        let factory = registry.instantiate("foo", &ArgumentResolver::none()).unwrap();
        assert_eq!(factory.describe(), "Bar");
        assert!(registry.contains("foo"));
    }
}
