//! Patch command - mount one description, update it to another

use clap::Args;
use std::path::PathBuf;
use tessera_atelier::VirtualDomOptions;
use tessera_relief::Description;

use super::{read_description, stage, Report};
use crate::config::{OutputFormat, TesseraConfig};
use crate::error::CliResult;

#[derive(Args)]
pub struct PatchArgs {
    /// Description mounted first (JSON)
    pub from: PathBuf,

    /// Description the mounted tree is updated to (JSON)
    pub to: PathBuf,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip precondition checks
    #[arg(long)]
    pub unchecked: bool,
}

pub fn run(args: PatchArgs, config: &TesseraConfig) -> CliResult<()> {
    let from = read_description(&args.from)?;
    let to = read_description(&args.to)?;
    let options = VirtualDomOptions::default().with_check_preconditions(!args.unchecked);
    let format = args.format.unwrap_or(config.format);

    let output = patch(from, to, &config.root_tag, options, format)?;
    println!("{output}");
    Ok(())
}

/// Mount `from`, update it to `to`, and report on the update alone.
pub(crate) fn patch(
    from: Description,
    to: Description,
    root_tag: &str,
    options: VirtualDomOptions,
    format: OutputFormat,
) -> CliResult<String> {
    let (mut dom, root) = stage(root_tag, options);
    let tree = dom.append(&root, from, None)?;
    let previous_html = dom.host().inner_html(root);
    dom.host_mut().clear_mutations();

    let tree = dom.update(tree, to)?;
    tracing::info!(
        root = ?tree.id,
        mutations = dom.host().mutation_count(),
        "updated"
    );

    Report::new(dom.host_mut(), root, Some(previous_html)).format(format)
}
