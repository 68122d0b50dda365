//! Assemble the generated wrapper document.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

use crate::{
    document::{ActionDocument, CompositeRuns, CompositeStep, InputSpec},
    error::{Error, Result},
    manifest::Manifest,
};

/// Build the wrapper action from the manifest header and the retained
/// inputs.
///
/// The single composite step forwards every retained input as
/// `${{ inputs.<name> }}` in retained order, then appends the
/// manifest's fixed `with:` entries. The tag-defaulted input gets the
/// current release tag as its default; when that input was not
/// retained the partition already faulted it, so the patch is skipped.
pub fn wrapper_document(
    manifest: &Manifest,
    mut kept: IndexMap<String, InputSpec>,
    wrapped_ref: &str,
    release_tag: &str,
) -> ActionDocument {
    let mut with = IndexMap::new();
    for name in kept.keys() {
        with.insert(
            name.clone(),
            Value::String(format!("${{{{ inputs.{name} }}}}")),
        );
    }
    for (key, value) in &manifest.wrapped.with {
        with.insert(key.clone(), value.clone());
    }

    if let Some(spec) = kept.get_mut(&manifest.wrapped.tag_default_input) {
        spec.default = Some(Value::String(release_tag.to_owned()));
    }

    ActionDocument {
        name: manifest.action.name.clone(),
        description: manifest.action.description.clone(),
        branding: manifest.action.branding.clone(),
        inputs: kept,
        runs: CompositeRuns {
            using: "composite".to_owned(),
            steps: vec![CompositeStep {
                uses: format!("{}@{wrapped_ref}", manifest.wrapped.slug),
                with,
            }],
        },
    }
}

/// Serialize the document as 4-space-indented JSON, no trailing newline.
///
/// JSON is a subset of YAML, so the result is written directly to the
/// generated `action.yml`.
pub fn to_pretty_json(document: &ActionDocument) -> Result<String> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|err| Error::ParseError(err.to_string()))
}
