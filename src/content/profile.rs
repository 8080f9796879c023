use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::selection::{validate_items, SelectableItem};

/// Who the portfolio is about, plus the outbound links derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub role: String,
    pub experience: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    /// Href of the downloadable résumé document.
    pub resume: String,
    pub summary: String,
}

impl Identity {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// The LinkedIn URL without scheme or `www.`, e.g. `linkedin.com/in/jane`.
    pub fn linkedin_display(&self) -> &str {
        let url = self
            .linkedin
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        url.strip_prefix("www.").unwrap_or(url)
    }

    /// Lowercased name without whitespace, used as the shell user name.
    pub fn handle(&self) -> String {
        self.name
            .split_whitespace()
            .collect::<String>()
            .to_lowercase()
    }
}

/// A canned command of the simulated terminal panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalCommand {
    pub id: String,
    pub label: String,
    pub command: String,
    pub output: Vec<String>,
}

impl SelectableItem for TerminalCommand {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub body: Vec<String>,
}

/// A canned request of the API playground. Nothing is ever sent; the
/// response is part of the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub id: String,
    pub method: HttpMethod,
    pub url: String,
    pub description: String,
    pub curl: String,
    pub response: ApiResponse,
}

impl ApiRequest {
    /// The URL as shown in the request list, without the scheme.
    pub fn short_url(&self) -> &str {
        self.url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
    }
}

impl SelectableItem for ApiRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        self.short_url()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub summary: String,
    pub impacts: Vec<String>,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// Everything the portfolio shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub identity: Identity,
    #[serde(default)]
    pub hero_tags: Vec<String>,
    pub terminal_commands: Vec<TerminalCommand>,
    pub api_requests: Vec<ApiRequest>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub recent_focus: Vec<String>,
}

impl Profile {
    /// Load a profile from a JSON file and validate it.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
        let profile: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse profile file: {}", path.display()))?;
        profile
            .validate()
            .with_context(|| format!("Invalid profile file: {}", path.display()))?;
        Ok(profile)
    }

    /// Both selectable lists must be non-empty with unique ids.
    pub fn validate(&self) -> Result<()> {
        validate_items(&self.terminal_commands).context("Invalid terminal_commands")?;
        validate_items(&self.api_requests).context("Invalid api_requests")?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize profile")
    }
}
