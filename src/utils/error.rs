use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse factories file '{source_name}': {message}")]
    ConfigParseError { source_name: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No implementation '{implementation}' registered for factory type '{capability}'")]
    UnknownImplementation {
        capability: String,
        implementation: String,
    },

    #[error("No argument of type '{type_name}' available")]
    MissingArgument { type_name: String },

    #[error("Unable to instantiate factory '{implementation}' for factory type '{capability}'")]
    Instantiation {
        capability: String,
        implementation: String,
        #[source]
        source: Box<LoaderError>,
    },
}

impl LoaderError {
    pub fn missing_argument<T: ?Sized>() -> Self {
        LoaderError::MissingArgument {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Innermost error of an `Instantiation` chain.
    pub fn root_cause(&self) -> &LoaderError {
        match self {
            LoaderError::Instantiation { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LoaderError::IoError(_) => "Check that the factories file exists and is readable",
            LoaderError::SerializationError(_) => {
                "Retry without --json; the results could not be encoded"
            }
            LoaderError::ConfigParseError { .. } => {
                "Fix the TOML syntax; entries belong under a [factories] table"
            }
            LoaderError::InvalidConfigValueError { .. } => {
                "Use non-empty identifiers without whitespace"
            }
            LoaderError::UnknownImplementation { .. } => {
                "Register the implementation or remove it from the factories file"
            }
            LoaderError::MissingArgument { .. } => {
                "Supply the required constructor argument (for example --label)"
            }
            LoaderError::Instantiation { source, .. } => source.recovery_suggestion(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_cause_unwraps_nested_instantiation() {
        let err = LoaderError::Instantiation {
            capability: "dummy-factory".to_string(),
            implementation: "label".to_string(),
            source: Box::new(LoaderError::missing_argument::<String>()),
        };

        assert!(matches!(
            err.root_cause(),
            LoaderError::MissingArgument { type_name } if type_name.contains("String")
        ));
        assert_eq!(
            err.recovery_suggestion(),
            LoaderError::missing_argument::<String>().recovery_suggestion()
        );
        assert!(err.to_string().contains("'label'"));
    }

    #[test]
    fn test_json_failure_converts_to_serialization_error() {
        fn encode() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{")?)
        }

        let err = encode().unwrap_err();
        assert!(matches!(err, LoaderError::SerializationError(_)));
        assert!(err.to_string().starts_with("Serialization error"));
        assert!(err.recovery_suggestion().contains("--json"));
    }
}
