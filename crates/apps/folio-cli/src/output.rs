//! Output formatting for CLI.

use colored::Colorize;
use serde::Serialize;

use folio_types::Section;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// Output for config initialization.
#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub config_path: String,
}

impl Render for InitOutput {
    fn render_human(&self) -> String {
        format!(
            "{} {}\n{}",
            "Configuration written to:".green().bold(),
            self.config_path,
            "Fill in cms.space_id and cms.access_token before fetching."
        )
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the fetch command.
#[derive(Debug, Serialize)]
pub struct FetchOutput {
    pub entries: usize,
    pub path: String,
}

impl Render for FetchOutput {
    fn render_human(&self) -> String {
        format!(
            "{} {} entries to {}",
            "Saved".green().bold(),
            self.entries,
            self.path
        )
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the build command.
#[derive(Debug, Serialize)]
pub struct BuildOutput {
    pub sections: usize,
    pub skipped: usize,
    pub path: String,
}

impl Render for BuildOutput {
    fn render_human(&self) -> String {
        let mut out = format!(
            "{} {} section(s) to {}",
            "Rendered".green().bold(),
            self.sections,
            self.path
        );
        if self.skipped > 0 {
            out.push_str(&format!(
                "\n{} {} unsupported entr{} skipped",
                "Note:".yellow(),
                self.skipped,
                if self.skipped == 1 { "y" } else { "ies" }
            ));
        }
        out
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// One row in the sections listing.
#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub section_type: String,
    pub anchor_id: Option<String>,
    pub title: Option<String>,
    pub hero_style: Option<String>,
}

impl SectionSummary {
    /// Summarize a mapped section for display.
    pub fn from_section(section: &Section) -> Self {
        let hero = section.as_hero();
        Self {
            section_type: section.section_type().to_string(),
            anchor_id: section.anchor_id().map(str::to_string),
            title: hero.and_then(|h| h.title.clone()),
            hero_style: hero.map(|h| h.hero_style.as_str().to_string()),
        }
    }
}

/// Output for the sections command.
#[derive(Debug, Serialize)]
pub struct SectionsOutput {
    pub sections: Vec<SectionSummary>,
    pub total: usize,
}

impl Render for SectionsOutput {
    fn render_human(&self) -> String {
        if self.sections.is_empty() {
            return "No supported sections found.".yellow().to_string();
        }

        let mut out = format!("{} section(s):\n", self.total);
        for summary in &self.sections {
            out.push_str(&format!(
                "  {} {}  anchor={}  title={}\n",
                "-".dimmed(),
                summary.section_type.cyan(),
                summary.anchor_id.as_deref().unwrap_or("(none)"),
                summary.title.as_deref().unwrap_or("(untitled)")
            ));
        }
        out.trim_end().to_string()
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
