//! Generate the wrapper action document and README.

use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use distill_core::{
    generate::{self, Request},
    manifest::Manifest,
};
use tracing::info;

/// Resolved arguments for one generation run.
pub struct GenerateOptions {
    pub manifest: PathBuf,
    pub source: PathBuf,
    pub action_out: PathBuf,
    pub readme_template: PathBuf,
    pub readme_out: PathBuf,
    pub release_tag: String,
    pub wrapped_ref: String,
    pub checkout_tag: String,
    pub check: bool,
}

impl GenerateOptions {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            manifest: required(matches, "manifest")?.into(),
            source: required(matches, "source")?.into(),
            action_out: required(matches, "action-out")?.into(),
            readme_template: required(matches, "readme-template")?.into(),
            readme_out: required(matches, "readme-out")?.into(),
            release_tag: required(matches, "release-tag")?,
            wrapped_ref: required(matches, "wrapped-ref")?,
            checkout_tag: required(matches, "checkout-tag")?,
            check: matches.get_flag("check"),
        })
    }
}

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("missing required argument --{name}"))
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let opts = GenerateOptions::from_matches(matches)?;

    // Echo the resolved arguments before doing any work, so a failed
    // CI run shows at a glance what it was invoked with.
    info!(tag = %opts.release_tag, "wrapped action release tag");
    info!(reference = %opts.wrapped_ref, "wrapped action revision");
    info!(tag = %opts.checkout_tag, "checkout action tag");
    info!(path = %opts.source.display(), "source action metadata");
    info!(path = %opts.action_out.display(), "target action document");
    info!(path = %opts.readme_template.display(), "readme template file");
    info!(path = %opts.readme_out.display(), "target readme");

    let manifest = Manifest::load(&opts.manifest)?;
    let request = Request {
        manifest,
        source_path: opts.source,
        readme_template_path: opts.readme_template,
        release_tag: opts.release_tag,
        wrapped_ref: opts.wrapped_ref,
        checkout_tag: opts.checkout_tag,
    };

    let rendered = generate::render(&request)?;

    println!("Resulting action:");
    println!("{}", rendered.action_json);
    println!();
    println!("Readme table:");
    println!("{}", rendered.table);

    if opts.check {
        let stale = generate::check(&rendered, &opts.action_out, &opts.readme_out)?;
        if !stale.is_empty() {
            return Err(distill_core::Error::out_of_date(&stale).into());
        }
        info!("generated files are up to date");
        return Ok(());
    }

    generate::write(&rendered, &opts.action_out, &opts.readme_out)?;
    Ok(())
}
