pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::arguments::ArgumentResolver;
#[cfg(feature = "cli")]
use crate::core::loader::FailureHandler;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_identifier, validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "factory-loader")]
#[command(about = "Load and describe the factories listed in TOML factories files")]
pub struct CliConfig {
    /// Factories file; repeat to merge several in order
    #[arg(short, long = "config", default_value = "factories.toml")]
    pub configs: Vec<String>,

    /// Factory type to load
    #[arg(long, default_value = crate::core::registry::DUMMY_FACTORY)]
    pub capability: String,

    /// `String` constructor argument
    #[arg(long)]
    pub label: Option<String>,

    /// `i32` constructor argument
    #[arg(long, allow_hyphen_values = true)]
    pub age: Option<i32>,

    #[arg(long, help = "Log and skip factories that fail to instantiate")]
    pub lenient: bool,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn arguments(&self) -> ArgumentResolver {
        let mut arguments = ArgumentResolver::none();
        if let Some(label) = &self.label {
            arguments = arguments.and(label.clone());
        }
        if let Some(age) = self.age {
            arguments = arguments.and(age);
        }
        arguments
    }

    pub fn failure_handler(&self) -> FailureHandler {
        if self.lenient {
            FailureHandler::Logging
        } else {
            FailureHandler::Throwing
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_identifier("capability", &self.capability)?;
        for path in &self.configs {
            validate_non_empty_string("config", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_arguments() {
        let config = CliConfig::parse_from([
            "factory-loader",
            "--config",
            "a.toml",
            "-c",
            "b.toml",
            "--label",
            "Jane",
            "--age",
            "-5",
            "--lenient",
        ]);

        assert_eq!(config.configs, vec!["a.toml", "b.toml"]);
        assert_eq!(config.capability, "dummy-factory");
        assert!(matches!(config.failure_handler(), FailureHandler::Logging));

        let arguments = config.arguments();
        assert_eq!(arguments.resolve::<String>(), Some("Jane".to_string()));
        assert_eq!(arguments.resolve::<i32>(), Some(-5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["factory-loader"]);

        assert_eq!(config.configs, vec!["factories.toml"]);
        assert!(config.arguments().is_empty());
        assert!(matches!(config.failure_handler(), FailureHandler::Throwing));
    }
}
