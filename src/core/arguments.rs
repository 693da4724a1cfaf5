use crate::utils::error::{LoaderError, Result};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

struct Argument {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

/// Constructor arguments keyed by type.
///
/// A registered constructor asks for the types it needs; at most one value
/// per type is held.
#[derive(Clone, Default)]
pub struct ArgumentResolver {
    arguments: HashMap<TypeId, Arc<Argument>>,
}

impl ArgumentResolver {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of<T: Any + Send + Sync>(value: T) -> Self {
        Self::none().and(value)
    }

    /// Adds `value`, replacing any argument of the same type.
    pub fn and<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.arguments.insert(
            TypeId::of::<T>(),
            Arc::new(Argument {
                type_name: std::any::type_name::<T>(),
                value: Arc::new(value),
            }),
        );
        self
    }

    pub fn resolve<T: Any + Clone>(&self) -> Option<T> {
        self.arguments
            .get(&TypeId::of::<T>())
            .and_then(|argument| argument.value.downcast_ref::<T>())
            .cloned()
    }

    pub fn require<T: Any + Clone>(&self) -> Result<T> {
        self.resolve::<T>()
            .ok_or_else(LoaderError::missing_argument::<T>)
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

impl fmt::Debug for ArgumentResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.arguments.values().map(|a| a.type_name).collect();
        names.sort_unstable();
        f.debug_struct("ArgumentResolver")
            .field("types", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_type() {
        let resolver = ArgumentResolver::of("test".to_string()).and(42i32);

        assert_eq!(resolver.resolve::<String>(), Some("test".to_string()));
        assert_eq!(resolver.resolve::<i32>(), Some(42));
        assert_eq!(resolver.resolve::<i64>(), None);
        assert_eq!(resolver.len(), 2);
    }

    #[test]
    fn test_and_replaces_same_type() {
        let resolver = ArgumentResolver::of(1i32).and(2i32);
        assert_eq!(resolver.resolve::<i32>(), Some(2));
        assert_eq!(resolver.len(), 1);
    }

    #[test]
    fn test_require_reports_type_name() {
        let err = ArgumentResolver::none().require::<String>().unwrap_err();
        match err {
            LoaderError::MissingArgument { type_name } => assert!(type_name.contains("String")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_debug_lists_types() {
        let debug = format!("{:?}", ArgumentResolver::of(7u8));
        assert!(debug.contains("u8"));
        assert!(ArgumentResolver::none().is_empty());
    }
}
