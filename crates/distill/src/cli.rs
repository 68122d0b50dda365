//! CLI command definitions using `clap`

use clap::{Arg, ArgAction, Command as ClapCommand};

pub fn after_help_text(examples: &[&str]) -> String {
    let mut text = String::from("EXAMPLES:\n");
    for example in examples {
        text.push_str("  ");
        text.push_str(example);
        text.push('\n');
    }
    text
}

pub fn build_cli() -> ClapCommand {
    ClapCommand::new("distill")
        .about("Derive a reduced-surface composite action from an upstream action's metadata")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd_generate())
}

pub fn cmd_generate() -> ClapCommand {
    ClapCommand::new("generate")
        .about("Generate the wrapper action document and README")
        .after_help(after_help_text(&[
            "distill generate --source upstream.json --action-out action.yml \\",
            "    --readme-template README.tpl.md --readme-out README.md \\",
            "    --release-tag v3.11.2 --wrapped-ref deadbeef --checkout-tag v5",
            "distill generate ... --check       Verify checked-in outputs are current",
            "distill generate ... --manifest other.toml",
        ]))
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .value_name("FILE")
                .default_value("distill.toml")
                .help("Transformation manifest"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .value_name("FILE")
                .required(true)
                .help("Upstream action metadata, as JSON"),
        )
        .arg(
            Arg::new("action-out")
                .long("action-out")
                .value_name("FILE")
                .required(true)
                .help("Where to write the generated action document"),
        )
        .arg(
            Arg::new("readme-template")
                .long("readme-template")
                .value_name("FILE")
                .required(true)
                .help("README template containing the placeholder markers"),
        )
        .arg(
            Arg::new("readme-out")
                .long("readme-out")
                .value_name("FILE")
                .required(true)
                .help("Where to write the substituted README"),
        )
        .arg(
            Arg::new("release-tag")
                .long("release-tag")
                .value_name("TAG")
                .required(true)
                .help("Released upstream tag; becomes the patched input default and the README version"),
        )
        .arg(
            Arg::new("wrapped-ref")
                .long("wrapped-ref")
                .value_name("REF")
                .required(true)
                .help("Revision of the wrapped action pinned into the generated `uses:`"),
        )
        .arg(
            Arg::new("checkout-tag")
                .long("checkout-tag")
                .value_name("TAG")
                .required(true)
                .help("Checkout action tag substituted into the README"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .action(ArgAction::SetTrue)
                .help("Verify the outputs on disk match a fresh render, without writing"),
        )
}
