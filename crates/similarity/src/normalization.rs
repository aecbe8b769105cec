//! Rename tables applied to names before they are compared.
//!
//! Refactorings such as moving a class to another package would otherwise
//! make every reference to it dissimilar. A [`NormalizationService`] maps a
//! raw name of one [`NameCategory`] through its table:
//! - exact entries are consulted first,
//! - otherwise the first regex rule that matches rewrites the name,
//! - names no rule matches are returned unchanged.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{NormalizationConfig, NormalizationMode, RenameEntry};
use crate::error::{ConfigError, ConfigResult};

static IDENTITY: Lazy<NormalizationService> = Lazy::new(NormalizationService::identity);

/// The kind of name being normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCategory {
    /// Fully qualified classifier names, e.g. `org.example.Foo`.
    Classifier,
    /// Compilation unit names, e.g. `Foo.java`.
    CompilationUnit,
    /// Full package paths, e.g. `org.example`.
    Package,
    /// Namespace strings of imports, references and compilation units.
    Namespace,
}

#[derive(Debug, Clone, Default)]
struct RenameTable {
    exact: HashMap<String, String>,
    patterns: Vec<(Regex, String)>,
}

impl RenameTable {
    fn from_entries(entries: &[RenameEntry]) -> ConfigResult<Self> {
        let mut table = Self::default();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    fn insert(&mut self, entry: &RenameEntry) -> ConfigResult<()> {
        if entry.regex {
            let pattern = Regex::new(&entry.from).map_err(|source| ConfigError::InvalidPattern {
                pattern: entry.from.clone(),
                source,
            })?;
            self.patterns.push((pattern, entry.to.clone()));
        } else {
            self.exact.insert(entry.from.clone(), entry.to.clone());
        }
        Ok(())
    }

    fn apply<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if let Some(renamed) = self.exact.get(raw) {
            return Cow::Owned(renamed.clone());
        }
        for (pattern, replacement) in &self.patterns {
            if pattern.is_match(raw) {
                return Cow::Owned(pattern.replace_all(raw, replacement.as_str()).into_owned());
            }
        }
        Cow::Borrowed(raw)
    }

    fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.patterns.is_empty()
    }
}

/// Applies the configured rename tables to names before comparison.
#[derive(Debug, Clone, Default)]
pub struct NormalizationService {
    classifier: RenameTable,
    compilation_unit: RenameTable,
    package: RenameTable,
    namespace: RenameTable,
    mode: NormalizationMode,
}

impl NormalizationService {
    /// A service that leaves every name unchanged.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Shared identity service.
    pub fn identity_ref() -> &'static Self {
        &IDENTITY
    }

    /// Compile the tables of a configuration.
    ///
    /// Fails when a rule marked as regex does not compile.
    pub fn from_config(config: &NormalizationConfig, mode: NormalizationMode) -> ConfigResult<Self> {
        Ok(Self {
            classifier: RenameTable::from_entries(&config.classifier)?,
            compilation_unit: RenameTable::from_entries(&config.compilation_unit)?,
            package: RenameTable::from_entries(&config.package)?,
            namespace: RenameTable::from_entries(&config.namespace)?,
            mode,
        })
    }

    /// Add a rename rule to the table of `category`.
    pub fn add_rule(&mut self, category: NameCategory, entry: &RenameEntry) -> ConfigResult<()> {
        self.table_mut(category).insert(entry)
    }

    /// Add an exact rename to the table of `category`.
    pub fn with_rename(
        mut self,
        category: NameCategory,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.table_mut(category)
            .exact
            .insert(from.into(), to.into());
        self
    }

    pub fn with_mode(mut self, mode: NormalizationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> NormalizationMode {
        self.mode
    }

    pub fn is_identity(&self) -> bool {
        self.classifier.is_empty()
            && self.compilation_unit.is_empty()
            && self.package.is_empty()
            && self.namespace.is_empty()
    }

    /// Map `raw` through the table of `category`.
    pub fn normalize<'a>(&self, category: NameCategory, raw: &'a str) -> Cow<'a, str> {
        self.table(category).apply(raw)
    }

    /// Compare a name from the first argument with one from the second.
    ///
    /// The first name is always normalized; the second only in
    /// [`NormalizationMode::BothSides`].
    pub fn names_match(&self, category: NameCategory, left: &str, right: &str) -> bool {
        let left = self.normalize(category, left);
        let right = match self.mode {
            NormalizationMode::LeftOnly => Cow::Borrowed(right),
            NormalizationMode::BothSides => self.normalize(category, right),
        };
        left == right
    }

    fn table(&self, category: NameCategory) -> &RenameTable {
        match category {
            NameCategory::Classifier => &self.classifier,
            NameCategory::CompilationUnit => &self.compilation_unit,
            NameCategory::Package => &self.package,
            NameCategory::Namespace => &self.namespace,
        }
    }

    fn table_mut(&mut self, category: NameCategory) -> &mut RenameTable {
        match category {
            NameCategory::Classifier => &mut self.classifier,
            NameCategory::CompilationUnit => &mut self.compilation_unit,
            NameCategory::Package => &mut self.package,
            NameCategory::Namespace => &mut self.namespace,
        }
    }
}
