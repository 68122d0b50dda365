//! The transformation manifest.
//!
//! A TOML document declaring everything about the derived action that
//! does not come from the source document: the generated header, the
//! wrapped step, and the keep/discard partition of the upstream inputs.

use std::{collections::HashSet, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    document::Branding,
    error::{Error, Result},
    fsio,
};

/// Header of the generated action document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionHeader {
    pub name: String,
    pub description: String,
    pub branding: Option<Branding>,
}

/// The upstream step the generated action forwards to.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Wrapped {
    /// Owner/repo slug, joined with a ref from the CLI into `uses:`
    pub slug: String,
    /// The retained input whose default is patched to the release tag
    pub tag_default_input: String,
    /// Fixed `with:` entries appended after the forwarded inputs
    #[serde(default)]
    pub with: IndexMap<String, Value>,
}

/// The keep/discard partition of the upstream inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputLists {
    pub keep: Vec<String>,
    pub discard: Vec<String>,
}

/// A parsed, validated transformation manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub action: ActionHeader,
    pub wrapped: Wrapped,
    pub inputs: InputLists,
}

impl Manifest {
    /// Load and validate a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fsio::read_file(path)?;
        Self::parse(&text)
    }

    /// Parse and validate a manifest from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Structural checks the type system cannot express.
    ///
    /// A bad manifest is operator error, not source drift, so these are
    /// hard errors rather than faults.
    fn validate(&self) -> Result<()> {
        let dup_keep = duplicates(&self.inputs.keep);
        if !dup_keep.is_empty() {
            return Err(Error::InvalidManifest(format!(
                "keep list contains duplicates: {}",
                dup_keep.join(", ")
            )));
        }

        let dup_discard = duplicates(&self.inputs.discard);
        if !dup_discard.is_empty() {
            return Err(Error::InvalidManifest(format!(
                "discard list contains duplicates: {}",
                dup_discard.join(", ")
            )));
        }

        let keep: HashSet<&str> = self.inputs.keep.iter().map(String::as_str).collect();
        let overlap: Vec<&str> = self
            .inputs
            .discard
            .iter()
            .map(String::as_str)
            .filter(|name| keep.contains(name))
            .collect();
        if !overlap.is_empty() {
            return Err(Error::InvalidManifest(format!(
                "inputs listed as both keep and discard: {}",
                overlap.join(", ")
            )));
        }

        if !keep.contains(self.wrapped.tag_default_input.as_str()) {
            return Err(Error::InvalidManifest(format!(
                "tag_default_input '{}' is not in the keep list",
                self.wrapped.tag_default_input
            )));
        }

        Ok(())
    }
}

fn duplicates(names: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            dups.push(name.as_str());
        }
    }
    dups
}
