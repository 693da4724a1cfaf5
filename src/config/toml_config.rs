use crate::utils::error::{LoaderError, Result};
use crate::utils::validation::{validate_identifier, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Contents of a factories file: factory type -> implementation ids.
///
/// ```toml
/// [factories]
/// dummy-factory = ["foo", "bar", "multiple-args"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoriesConfig {
    #[serde(default)]
    pub factories: BTreeMap<String, Vec<String>>,
}

impl FactoriesConfig {
    /// Loads a factories file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LoaderError::IoError)?;
        Self::from_named_toml_str(&path.as_ref().display().to_string(), &content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_named_toml_str("<inline>", content)
    }

    /// Parses `content`, attributing errors to `source_name`.
    pub fn from_named_toml_str(source_name: &str, content: &str) -> Result<Self> {
        let parsed: Self = toml::from_str(content).map_err(|e| LoaderError::ConfigParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

        parsed.substitute_env_vars(source_name)
    }

    /// Replaces `${VAR}` inside parsed keys and ids, so a value is always a single string.
    fn substitute_env_vars(self, source_name: &str) -> Result<Self> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LoaderError::ConfigParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

        let expand = |value: &str| -> String {
            re.replace_all(value, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
        };

        let mut substituted = FactoriesConfig::default();
        for (capability, ids) in self.factories {
            let entry = substituted.factories.entry(expand(&capability)).or_default();
            entry.extend(ids.iter().map(|id| expand(id)));
            dedup_preserving_order(entry);
        }
        Ok(substituted)
    }

    /// Appends `other`'s ids after ours; an id already present keeps its first position.
    pub fn merge(&mut self, other: FactoriesConfig) {
        for (capability, ids) in other.factories {
            let entry = self.factories.entry(capability).or_default();
            entry.extend(ids);
            dedup_preserving_order(entry);
        }
    }

    pub fn implementations(&self, capability: &str) -> &[String] {
        self.factories
            .get(capability)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Validate for FactoriesConfig {
    fn validate(&self) -> Result<()> {
        for (capability, ids) in &self.factories {
            validate_identifier("factories", capability)?;
            for id in ids {
                validate_identifier(&format!("factories.{}", capability), id)?;
            }
        }
        Ok(())
    }
}

fn dedup_preserving_order(ids: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}
