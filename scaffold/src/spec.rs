//! What to scaffold, decoded from parsed option values.

use std::fmt;

use argot_core::{OptionValues, Value};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Component source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "ts")]
    TypeScript,
    #[serde(alias = "js")]
    JavaScript,
}

impl Language {
    /// Parses a `--type` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot_scaffold::Language;
    ///
    /// assert_eq!(Language::parse("typescript").unwrap(), Language::TypeScript);
    /// assert_eq!(Language::parse("JS").unwrap(), Language::JavaScript);
    /// assert!(Language::parse("cobol").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Ok(Language::TypeScript),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(ScaffoldError::UnsupportedLanguage(value.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }

    /// Extension of the component source file.
    pub fn extension(self) -> &'static str {
        match self {
            Language::TypeScript => "tsx",
            Language::JavaScript => "jsx",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Function component with hooks, or class component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Functional,
    Class,
}

/// Everything needed to render and write one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Name as typed, used for the directory and file names (e.g. `user-card`).
    pub name: String,
    pub style: Style,
    pub language: Language,
    pub redux_connect: bool,
    /// Stylesheet extension without the dot.
    pub css_extension: String,
    /// Replace an existing component directory.
    pub force: bool,
}

impl ComponentSpec {
    /// Decodes the option map produced for the `component` command.
    ///
    /// `functional` wins when both `functional` and `class` are set.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingStyle`] when neither style is set,
    /// [`ScaffoldError::UnsupportedLanguage`] for an unknown `type`, and
    /// [`ScaffoldError::InvalidComponentName`] for a bad name.
    pub fn from_options(name: &str, options: &OptionValues) -> Result<Self> {
        component_identifier(name)?;

        let flag = |key: &str| options.get(key).and_then(Value::as_bool).unwrap_or(false);
        let text = |key: &str| options.get(key).and_then(Value::as_str);

        let style = if flag("functional") {
            Style::Functional
        } else if flag("class") {
            Style::Class
        } else {
            return Err(ScaffoldError::MissingStyle);
        };

        let language = match text("type") {
            Some(value) => Language::parse(value)?,
            None => Language::default(),
        };

        Ok(Self {
            name: name.to_string(),
            style,
            language,
            redux_connect: flag("reduxConnect"),
            css_extension: text("cssext")
                .map(|ext| ext.trim_start_matches('.').to_string())
                .unwrap_or_else(|| "css".to_string()),
            force: flag("force"),
        })
    }

    /// PascalCase identifier used inside the generated source.
    pub fn identifier(&self) -> String {
        // validated in from_options
        component_identifier(&self.name).unwrap_or_else(|_| self.name.clone())
    }
}

/// Converts a kebab-case component name to a PascalCase identifier.
///
/// # Examples
///
/// ```
/// use argot_scaffold::component_identifier;
///
/// assert_eq!(component_identifier("user-card").unwrap(), "UserCard");
/// assert_eq!(component_identifier("widget").unwrap(), "Widget");
/// assert!(component_identifier("../escape").is_err());
/// ```
pub fn component_identifier(name: &str) -> Result<String> {
    let invalid = name.trim().is_empty()
        || name.contains(['/', '\\'])
        || name == "."
        || name == ".."
        || !name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'));
    if invalid {
        return Err(ScaffoldError::InvalidComponentName(name.to_string()));
    }

    let identifier: String = name
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if identifier.is_empty() || identifier.starts_with(|ch: char| ch.is_ascii_digit()) {
        return Err(ScaffoldError::InvalidComponentName(name.to_string()));
    }
    Ok(identifier)
}
