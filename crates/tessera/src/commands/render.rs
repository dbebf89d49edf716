//! Render command - mount a description and print the result

use clap::Args;
use std::path::PathBuf;
use tessera_atelier::VirtualDomOptions;
use tessera_relief::Description;

use super::{read_description, stage, Report};
use crate::config::{OutputFormat, TesseraConfig};
use crate::error::CliResult;

#[derive(Args)]
pub struct RenderArgs {
    /// Description file (JSON)
    pub file: PathBuf,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip precondition checks
    #[arg(long)]
    pub unchecked: bool,
}

pub fn run(args: RenderArgs, config: &TesseraConfig) -> CliResult<()> {
    let description = read_description(&args.file)?;
    let options = VirtualDomOptions::default().with_check_preconditions(!args.unchecked);
    let format = args.format.unwrap_or(config.format);

    let output = render(description, &config.root_tag, options, format)?;
    println!("{output}");
    Ok(())
}

/// Mount `description` into an empty container and report on it.
pub(crate) fn render(
    description: Description,
    root_tag: &str,
    options: VirtualDomOptions,
    format: OutputFormat,
) -> CliResult<String> {
    let (mut dom, root) = stage(root_tag, options);
    let tree = dom.append(&root, description, None)?;
    tracing::info!(root = ?tree.id, "mounted");

    Report::new(dom.host_mut(), root, None).format(format)
}
