//! CLI commands.

pub mod patch;
pub mod render;

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use tessera_atelier::{VirtualDom, VirtualDomOptions};
use tessera_gesso::{MemoryHost, Mutation, MutationStats, NodeId};
use tessera_relief::{Description, Host};

use crate::config::OutputFormat;
use crate::error::{CliError, CliResult};

/// Read and parse a description file.
pub(crate) fn read_description(path: &Path) -> CliResult<Description> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Description {
        path: path.to_path_buf(),
        source,
    })
}

/// A reconciler over a fresh in-memory host with an empty container.
pub(crate) fn stage(root_tag: &str, options: VirtualDomOptions) -> (VirtualDom<MemoryHost>, NodeId) {
    let mut host = MemoryHost::new();
    let root = host.create_element(root_tag);
    host.clear_mutations();
    (VirtualDom::with_options(host, options), root)
}

/// What a command observed, printed in the chosen format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Report {
    /// Container markup before the update, for `patch`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) previous_html: Option<String>,
    pub(crate) html: String,
    pub(crate) mutations: Vec<Mutation>,
    pub(crate) stats: MutationStats,
}

impl Report {
    pub(crate) fn new(host: &mut MemoryHost, root: NodeId, previous_html: Option<String>) -> Self {
        let mutations = host.take_mutations();
        Self {
            previous_html,
            html: host.inner_html(root),
            stats: MutationStats::from_mutations(&mutations),
            mutations,
        }
    }

    pub(crate) fn format(&self, format: OutputFormat) -> CliResult<String> {
        Ok(match format {
            OutputFormat::Html => self.html.clone(),
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Stats => format_stats(&self.stats),
        })
    }
}

fn format_stats(stats: &MutationStats) -> String {
    let mut out = String::new();
    for (label, count) in [
        ("created", stats.created),
        ("inserted", stats.inserted),
        ("removed", stats.removed),
        ("text", stats.text_changes),
        ("attributes", stats.attribute_changes),
        ("styles", stats.style_changes),
    ] {
        let _ = writeln!(out, "{label:<11}{count}");
    }
    let _ = write!(out, "{:<11}{}", "total", stats.total());
    out
}
