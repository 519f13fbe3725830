use std::sync::LazyLock;

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PageConfig;

pub const SITE_FILE: &str = "site.json";
/// Tags shown on a project card before collapsing the rest into `+N`.
pub const MAX_VISIBLE_TAGS: usize = 4;

pub static GLOBAL_SITE: LazyLock<Result<Site, ContentError>> = LazyLock::new(load_site);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub page: PageConfig,
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Education,
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub monogram: String,
    pub tagline: String,
    pub roles: Vec<String>,
    pub summary: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    pub contact_blurb: String,
    #[serde(default)]
    pub footer_note: String,
    #[serde(default)]
    pub socials: Vec<Link>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub icon: String,
    pub href: String,
}

impl Link {
    /// Web links open in a new tab; `mailto:` and `tel:` stay in place.
    pub fn is_external(&self) -> bool {
        is_external(&self.href)
    }
}

pub fn is_external(href: &str) -> bool {
    href.starts_with("http")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub metric: String,
    pub icon: String,
    pub link: String,
}

impl Project {
    pub fn visible_tech(&self) -> &[String] {
        &self.tech[..self.tech.len().min(MAX_VISIBLE_TAGS)]
    }

    pub fn hidden_tech_count(&self) -> usize {
        self.tech.len().saturating_sub(MAX_VISIBLE_TAGS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub period: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

pub fn parse_site(content: &str) -> Result<Site, ContentError> {
    let mut site: Site =
        serde_json::from_str(content).map_err(|e| ContentError::ParseError {
            file: SITE_FILE.to_string(),
            reason: e.to_string(),
        })?;
    site.page = site.page.normalized();
    Ok(site)
}

fn load_site() -> Result<Site, ContentError> {
    let file = Assets::get(SITE_FILE).ok_or(ContentError::NotFound(SITE_FILE.to_string()))?;
    let content = String::from_utf8(file.data.into()).map_err(|e| ContentError::ParseError {
        file: SITE_FILE.to_string(),
        reason: e.to_string(),
    })?;
    parse_site(&content)
}

/// Embedded site content, parsed once.
pub fn site() -> Result<&'static Site, ContentError> {
    GLOBAL_SITE.as_ref().map_err(Clone::clone)
}

/// Year the site was built, for the footer.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::section::Section;

    #[test]
    fn test_embedded_site_parses() {
        let site = site().expect("embedded site should parse");
        assert_eq!(site.page.sections, Section::ALL.to_vec());
        assert_eq!(site.page.theme, Theme::Midnight);
        assert_eq!(site.profile.monogram, "MJ");
        assert_eq!(site.projects.len(), 5);
        assert_eq!(site.experience.len(), 2);
        assert_eq!(site.skills.len(), 4);
        assert_eq!(site.certifications.len(), 5);
        assert!(site.profile.socials.iter().any(|l| !l.is_external()));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_site("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::ParseError { ref file, .. } if file == SITE_FILE));

        let missing_profile = parse_site(
            r#"{"projects":[],"experience":[],"education":{"degree":"","school":"","location":"","period":"","courses":[]},"skills":[]}"#,
        );
        assert!(missing_profile.is_err());
    }

    #[test]
    fn test_parse_normalizes_tracker_constants() {
        let embedded = Assets::get(SITE_FILE).unwrap();
        let mut json: serde_json::Value = serde_json::from_slice(&embedded.data).unwrap();
        json["page"]["tracker"]["reveal_threshold"] = serde_json::json!(1.5);
        json["page"]["tracker"]["detection_line_px"] = serde_json::json!(-40);

        let site = parse_site(&json.to_string()).unwrap();
        let threshold = site.page.tracker.reveal_threshold;
        assert!((0.0..=1.0).contains(&threshold));
        assert_eq!(site.page.tracker.detection_line_px, -40.0);
    }

    #[test]
    fn test_project_tag_overflow() {
        let project = Project {
            title: "t".to_string(),
            description: "d".to_string(),
            tech: (0..6).map(|i| format!("tag{i}")).collect(),
            metric: "m".to_string(),
            icon: "database".to_string(),
            link: "https://example.com".to_string(),
        };
        assert_eq!(project.visible_tech().len(), 4);
        assert_eq!(project.hidden_tech_count(), 2);

        let small = Project {
            tech: vec!["one".to_string()],
            ..project
        };
        assert_eq!(small.visible_tech(), &["one".to_string()]);
        assert_eq!(small.hidden_tech_count(), 0);
    }

    #[test]
    fn test_external_links() {
        assert!(is_external("https://github.com"));
        assert!(is_external("http://www.linkedin.com/in/x"));
        assert!(!is_external("mailto:someone@example.com"));
        assert!(!is_external("tel:617-331-8900"));
        assert!(!is_external("#projects"));
    }

    #[test]
    fn test_build_year() {
        let year = build_year().expect("BUILD_TIME should be rfc3339");
        assert!(year >= 2024);
    }
}
