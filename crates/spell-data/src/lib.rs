use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing a single spell document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path} is not a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The raw text fields of a spell that the effect heuristics read.
///
/// Missing fields and fields of the wrong JSON type fall back to their
/// defaults, so every document yields a usable view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellText {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub time: String,
    #[serde(deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub concentration: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub range: String,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

/// One spell, persisted as a single JSON object on disk.
///
/// Unknown fields are kept untouched and in their original order.
#[derive(Debug, Clone)]
pub struct SpellDocument {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl SpellDocument {
    /// Read and parse a spell document
    pub fn load(path: &Path) -> std::result::Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| DocumentError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        match value {
            Value::Object(fields) => Ok(Self {
                path: path.to_path_buf(),
                fields,
            }),
            _ => Err(DocumentError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn new(path: impl Into<PathBuf>, fields: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            fields,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Typed view of the text fields used for classification
    pub fn text(&self) -> SpellText {
        // Deserializing from a borrowed object cannot fail: every field is lenient.
        SpellText::deserialize(&Value::Object(self.fields.clone())).unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a top-level field. An existing key keeps its position.
    pub fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Serialize with 2-space indentation
    pub fn to_pretty_string(&self) -> std::result::Result<String, DocumentError> {
        serde_json::to_string_pretty(&self.fields).map_err(|source| DocumentError::Encode {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the document back to the path it was loaded from
    pub fn save(&self) -> std::result::Result<(), DocumentError> {
        let content = self.to_pretty_string()?;
        std::fs::write(&self.path, content).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// List the `.json` files directly inside `dir`, sorted by path
pub fn list_spell_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read spell directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!("Found {} spell files in {}", files.len(), dir.display());
    Ok(files)
}
