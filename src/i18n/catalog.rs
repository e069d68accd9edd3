use std::collections::HashMap;

use thiserror::Error;
use toml::{Table, Value};

use crate::model::Language;

const EN: &str = include_str!("../../locales/en.toml");
const TR: &str = include_str!("../../locales/tr.toml");

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Failed to parse '{language}' translations: {source}")]
    Parse {
        language: &'static str,
        #[source]
        source: toml::de::Error,
    },
}

/// Translation trees keyed by language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Language, Table>,
}

impl Catalog {
    /// Parse translation sources. Every source must be valid TOML.
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, I18nError> {
        let mut tables = HashMap::new();
        for (language, text) in sources {
            let table = toml::from_str::<Table>(text).map_err(|source| I18nError::Parse {
                language: language.code(),
                source,
            })?;
            tables.insert(*language, table);
        }
        Ok(Self { tables })
    }

    /// The tables shipped with the crate.
    ///
    /// A broken table is logged and left empty so lookups fall back to keys.
    pub fn builtin() -> Self {
        let mut tables = HashMap::new();
        for (language, text) in [(Language::En, EN), (Language::Tr, TR)] {
            match toml::from_str::<Table>(text) {
                Ok(table) => {
                    tables.insert(language, table);
                }
                Err(e) => {
                    tracing::error!(language = language.code(), error = %e, "Invalid builtin translations");
                }
            }
        }
        Self { tables }
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.tables.contains_key(&language)
    }

    /// Resolve a dot-separated path. Only string leaves resolve.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let mut table = self.tables.get(&language)?;
        let mut segments = key.split('.').peekable();
        while let Some(segment) = segments.next() {
            let value = table.get(segment)?;
            match (value, segments.peek()) {
                (Value::String(s), None) => return Some(s.as_str()),
                (Value::Table(t), Some(_)) => table = t,
                _ => return None,
            }
        }
        None
    }
}
