//! Pipeline orchestration: load, transform, validate, write.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    compose, document,
    error::{Error, Result},
    fault::Fault,
    fsio,
    manifest::Manifest,
    partition, readme, table,
};

/// Everything one generation run needs.
#[derive(Debug, Clone)]
pub struct Request {
    pub manifest: Manifest,
    pub source_path: PathBuf,
    pub readme_template_path: PathBuf,
    /// Released upstream tag; patched into the tag-defaulted input and
    /// substituted for the version marker
    pub release_tag: String,
    /// Revision pinned into the wrapped step's `uses:`
    pub wrapped_ref: String,
    /// Checkout action tag substituted into the README
    pub checkout_tag: String,
}

/// The artifacts of one render, plus every fault recorded on the way.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Generated action document, 4-space-indented JSON
    pub action_json: String,
    /// README with all markers substituted
    pub readme: String,
    /// The inputs table on its own, for the preview
    pub table: String,
    pub faults: Vec<Fault>,
}

impl Rendered {
    pub fn has_faults(&self) -> bool {
        !self.faults.is_empty()
    }
}

/// Run the pipeline up to (but excluding) the writes.
///
/// Faults do not stop the render; they ride along in the result so the
/// caller can report all of them and then refuse to save.
pub fn render(request: &Request) -> Result<Rendered> {
    let mut faults = Vec::new();

    info!(source = %request.source_path.display(), "loading source action document");
    let mut source = document::load_source(&request.source_path)?;
    document::strip_replaced_fields(&mut source, &mut faults);

    let kept = partition::partition_inputs(&mut source, &request.manifest.inputs, &mut faults)?;
    partition::verify_obliterated(&source, &mut faults);

    let wrapper = compose::wrapper_document(
        &request.manifest,
        kept,
        &request.wrapped_ref,
        &request.release_tag,
    );
    let table = table::render(&wrapper.inputs);

    info!(template = %request.readme_template_path.display(), "reading the README template");
    let template = fsio::read_file(&request.readme_template_path)?;
    for marker in readme::missing_markers(&template) {
        faults.push(Fault::MissingMarker {
            marker,
            path: request.readme_template_path.display().to_string(),
        });
    }

    let readme = readme::substitute(
        &template,
        &readme::Substitutions {
            table: &table,
            release_tag: &request.release_tag,
            checkout_tag: &request.checkout_tag,
        },
    );
    let action_json = compose::to_pretty_json(&wrapper)?;

    Ok(Rendered {
        action_json,
        readme,
        table,
        faults,
    })
}

/// Write both artifacts. Refuses if the render recorded any fault.
pub fn write(rendered: &Rendered, action_out: &Path, readme_out: &Path) -> Result<()> {
    ensure_clean(rendered)?;

    info!(path = %action_out.display(), "writing out the generated action document");
    fsio::write_file(action_out, &rendered.action_json)?;

    info!(path = %readme_out.display(), "writing out the generated README");
    fsio::write_file(readme_out, &rendered.readme)?;

    Ok(())
}

/// Compare both artifacts against the files on disk without writing.
///
/// Returns the stale paths: outputs that are missing or differ from
/// the render. Refuses if the render recorded any fault.
pub fn check(rendered: &Rendered, action_out: &Path, readme_out: &Path) -> Result<Vec<PathBuf>> {
    ensure_clean(rendered)?;

    let mut stale = Vec::new();
    for (path, expected) in [
        (action_out, &rendered.action_json),
        (readme_out, &rendered.readme),
    ] {
        match std::fs::read_to_string(path) {
            Ok(existing) if existing == *expected => {}
            Ok(_) | Err(_) => stale.push(path.to_owned()),
        }
    }
    Ok(stale)
}

fn ensure_clean(rendered: &Rendered) -> Result<()> {
    if rendered.has_faults() {
        return Err(Error::Faults {
            faults: rendered.faults.clone(),
        });
    }
    Ok(())
}
