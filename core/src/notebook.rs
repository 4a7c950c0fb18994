//! The slice of the notebook model figure stages read and write.
//!
//! Cells and resources are owned by whoever drives the pipeline. Stages only
//! get `&mut` access for the duration of one call.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format::filename_key;

/// Raw data stored under one key of an output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
    /// Anything else an output carries (`prompt_number`, `metadata`, ...).
    Json(Value),
}

impl Payload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(s) => s.as_bytes(),
            Payload::Bytes(b) => b,
            Payload::Json(_) => &[],
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Bytes(b)
    }
}

/// One result of executing a cell, keyed by format identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Output {
    entries: BTreeMap<String, Payload>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Payload> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Payload>) -> Option<Payload> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Payload)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the file the `format` payload was extracted to, if an earlier stage set one.
    ///
    /// Empty or non-text markers count as absent.
    pub fn filename(&self, format: &str) -> Option<&str> {
        self.entries
            .get(&filename_key(format))
            .and_then(Payload::as_text)
            .filter(|name| !name.is_empty())
    }

    pub fn set_filename(&mut self, format: &str, filename: impl Into<String>) {
        self.entries
            .insert(filename_key(format), Payload::Text(filename.into()));
    }
}

impl<K: Into<String>, V: Into<Payload>> FromIterator<(K, V)> for Output {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub outputs: Vec<Output>,
    /// Every other cell field, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    pub fn with_outputs(outputs: Vec<Output>) -> Self {
        Self {
            outputs,
            extra: Map::new(),
        }
    }
}

/// Artifacts shared by every stage for the duration of one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub figures: BTreeMap<String, Payload>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_figure(&self, filename: &str) -> bool {
        self.figures.contains_key(filename)
    }

    /// Register a figure. Returns `false` and leaves the existing entry alone
    /// if `filename` is already taken.
    pub fn add_figure(&mut self, filename: impl Into<String>, data: Payload) -> bool {
        match self.figures.entry(filename.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(data);
                true
            }
        }
    }
}
