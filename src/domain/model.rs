use crate::domain::ports::DummyFactory;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

/// Text rendered in place of an absent age.
pub const ABSENT_TOKEN: &str = "null";

/// Factory holding a label and an optional age.
///
/// `describe` appends the age to the label, rendering a missing age as
/// [`ABSENT_TOKEN`] rather than as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyFactoryRecord {
    label: String,
    age: Option<i32>,
}

impl DummyFactoryRecord {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_age(label, None)
    }

    pub fn with_age(label: impl Into<String>, age: Option<i32>) -> Self {
        Self {
            label: label.into(),
            age,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }
}

impl DummyFactory for DummyFactoryRecord {
    fn describe(&self) -> String {
        match self.age {
            Some(age) => format!("{}{}", self.label, age),
            None => format!("{}{}", self.label, ABSENT_TOKEN),
        }
    }
}

impl fmt::Display for DummyFactoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FooDummyFactory;

impl DummyFactory for FooDummyFactory {
    fn describe(&self) -> String {
        "Foo".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BarDummyFactory;

impl DummyFactory for BarDummyFactory {
    fn describe(&self) -> String {
        "Bar".to_string()
    }
}

/// Single required constructor argument, described verbatim.
#[derive(Debug, Clone)]
pub struct LabelDummyFactory {
    label: String,
}

impl LabelDummyFactory {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl DummyFactory for LabelDummyFactory {
    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// One loaded factory as reported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactoryDescription {
    pub implementation: String,
    pub description: String,
}

impl FactoryDescription {
    /// One `<implementation>: <description>` line per entry.
    pub fn render_lines(entries: &[FactoryDescription]) -> String {
        entries
            .iter()
            .map(|entry| format!("{}: {}\n", entry.implementation, entry.description))
            .collect()
    }

    /// Pretty JSON array followed by a newline.
    pub fn render_json(entries: &[FactoryDescription]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(entries)?;
        json.push('\n');
        Ok(json)
    }
}
