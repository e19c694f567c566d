//! Render the landing page to an HTML file.

use std::path::PathBuf;

use tracing::info;

use folio_content::map_sections;
use folio_render::render_page;

use crate::commands::load_entries;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{BuildOutput, OutputFormat, Render};

/// Execute the build command.
pub async fn build(
    config: CliConfig,
    format: OutputFormat,
    input: Option<PathBuf>,
    output: PathBuf,
) -> CliResult<String> {
    let entries = load_entries(&config.cms, input.as_deref()).await?;
    let sections = map_sections(&entries);
    let skipped = entries.len() - sections.len();

    let meta = config.site.resolve_meta();
    let page = render_page(&meta, &sections);
    info!(
        sections = sections.len(),
        skipped,
        bytes = page.len(),
        "Rendered page"
    );

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output, page)?;

    let result = BuildOutput {
        sections: sections.len(),
        skipped,
        path: output.display().to_string(),
    };
    Ok(result.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn snapshot() -> &'static str {
        r#"[
            {
                "sys": {"id": "hero-1", "contentType": {"sys": {"id": "sectionHero"}}},
                "fields": {"anchorId": "top", "title": "Gilberto Haro"}
            },
            {
                "sys": {"id": "other-1", "contentType": {"sys": {"id": "unknownType"}}},
                "fields": {}
            }
        ]"#
    }

    #[tokio::test]
    async fn test_build_from_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("entries.json");
        let output = temp_dir.path().join("site").join("index.html");
        std::fs::write(&input, snapshot()).unwrap();

        build(
            CliConfig::default(),
            OutputFormat::Human,
            Some(input),
            output.clone(),
        )
        .await
        .unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        assert!(page.contains("<h1 class=\"hero-title\">Gilberto Haro</h1>"));
        assert!(page.contains("<section id=\"top\">"));
    }

    #[tokio::test]
    async fn test_build_missing_snapshot_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = build(
            CliConfig::default(),
            OutputFormat::Human,
            Some(temp_dir.path().join("missing.json")),
            temp_dir.path().join("index.html"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, crate::error::CliError::FileNotFound(_)));
    }
}
