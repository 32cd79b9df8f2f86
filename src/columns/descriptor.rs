//! Column descriptors and key resolution
//!
//! Every descriptor resolves to exactly one stable **column key**, the
//! identity all matching and reconciliation is done against. Resolution
//! precedence: explicit `id` if non-empty, else the stringified accessor
//! key, else a positional `col-<index>` fallback.

use serde::{Deserialize, Serialize};

/// Data-field identity of a column, used when no explicit `id` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccessorKey {
    /// Named field in the row object
    Field(String),
    /// Positional index into the row
    Index(i64),
}

impl AccessorKey {
    /// Stringify for use as a column key
    pub fn as_key(&self) -> String {
        match self {
            AccessorKey::Field(name) => name.clone(),
            AccessorKey::Index(idx) => idx.to_string(),
        }
    }
}

/// One column of a table, as supplied by the schema provider
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Explicit stable identity (preferred when present and non-empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Data-field identity, used when `id` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor_key: Option<AccessorKey>,

    /// Display label, used also as an export header
    pub header: String,
}

impl ColumnDescriptor {
    /// Create a descriptor with an explicit id
    pub fn with_id(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            accessor_key: None,
            header: header.into(),
        }
    }

    /// Create a descriptor identified by a row field name
    pub fn with_field(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: None,
            accessor_key: Some(AccessorKey::Field(field.into())),
            header: header.into(),
        }
    }

    /// Resolve the stable column key for this descriptor
    ///
    /// `position` is the descriptor's index in the schema, used only for
    /// the `col-<index>` fallback when neither identity is present.
    pub fn resolve_key(&self, position: usize) -> String {
        match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => match &self.accessor_key {
                Some(accessor) => accessor.as_key(),
                None => format!("col-{}", position),
            },
        }
    }
}

/// A descriptor paired with its resolved key
///
/// Produced once per schema intake so that all downstream operations
/// match on keys without re-deriving them.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: String,
    pub descriptor: ColumnDescriptor,
}

impl Column {
    /// Resolve keys for an ordered schema
    pub fn from_schema(descriptors: &[ColumnDescriptor]) -> Vec<Column> {
        descriptors
            .iter()
            .enumerate()
            .map(|(position, descriptor)| Column {
                key: descriptor.resolve_key(position),
                descriptor: descriptor.clone(),
            })
            .collect()
    }

    /// Display label for this column
    pub fn header(&self) -> &str {
        &self.descriptor.header
    }
}
