//! Serde model of a GitHub Action metadata document.
//!
//! The *generated* wrapper is fully typed. The *source* document is
//! kept as a raw JSON object so the pipeline can strip the fields it
//! understands and still see everything that remains for the
//! leftover-field verification.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{Error, Result},
    fault::Fault,
    fsio,
};

/// Top-level source fields the generated wrapper replaces wholesale.
pub const REPLACED_FIELDS: [&str; 4] = ["name", "description", "branding", "runs"];

/// A raw source document: an ordered JSON object.
pub type SourceFields = serde_json::Map<String, Value>;

/// Marketplace branding block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub icon: String,
    pub color: String,
}

/// One declared action input, carried over verbatim.
///
/// Only `description`, `required`, and `default` are interpreted (for
/// the reference table); any other option key rides along untouched and
/// is re-emitted exactly as declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(flatten)]
    pub rest: IndexMap<String, Value>,
}

impl InputSpec {
    /// Whether the input is marked required; absent means optional.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

/// The `runs:` block of a composite action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeRuns {
    pub using: String,
    pub steps: Vec<CompositeStep>,
}

/// A single `uses:` step with its `with:` arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeStep {
    pub uses: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub with: IndexMap<String, Value>,
}

/// A complete generated action document.
///
/// Field order here is serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDocument {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,
    pub inputs: IndexMap<String, InputSpec>,
    pub runs: CompositeRuns,
}

/// Load the source action document as an ordered JSON object.
pub fn load_source(path: &Path) -> Result<SourceFields> {
    let text = fsio::read_file(path)?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|err| Error::ParseError(format!("{}: {err}", path.display())))?;
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(Error::ParseError(format!(
            "{}: expected a JSON object describing an action, got {other}",
            path.display()
        ))),
    }
}

/// Remove the top-level fields the wrapper replaces.
///
/// An absent field means the source is not the document shape the
/// manifest was written against; that is recorded as a fault rather
/// than stopping the run.
pub fn strip_replaced_fields(source: &mut SourceFields, faults: &mut Vec<Fault>) {
    for field in REPLACED_FIELDS {
        if source.shift_remove(field).is_none() {
            faults.push(Fault::MissingSourceField(field));
        }
    }
}
