//! List the sections the content maps to.

use std::path::PathBuf;

use folio_content::map_sections;

use crate::commands::load_entries;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render, SectionSummary, SectionsOutput};

/// Execute the sections command.
pub async fn sections(
    config: CliConfig,
    format: OutputFormat,
    input: Option<PathBuf>,
) -> CliResult<String> {
    let entries = load_entries(&config.cms, input.as_deref()).await?;
    let sections = map_sections(&entries);

    let summaries: Vec<_> = sections.iter().map(SectionSummary::from_section).collect();
    let total = summaries.len();

    let output = SectionsOutput {
        sections: summaries,
        total,
    };
    Ok(output.render(format))
}
