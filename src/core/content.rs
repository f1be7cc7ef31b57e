//! Portfolio content model
//!
//! All content is embedded at build time from `content/portfolio.json` and
//! validated once at startup. Nothing here is mutated afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::markup::Markup;

const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.json");

static WEB_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/?#@]+[^\s]*$").expect("valid web url pattern"));
static MAILTO_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^mailto:[^\s@]+@[^\s@]+$").expect("valid mailto pattern"));

/// Errors raised while loading content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("link '{label}' has an invalid absolute URL: {url}")]
    InvalidUrl { label: String, url: String },

    #[error("skill category '{0}' is declared more than once")]
    DuplicateSkillCategory(String),

    #[error("{record} is missing required field '{field}'")]
    MissingField { record: String, field: &'static str },
}

/// An external reference with a display label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

impl ProjectLink {
    fn validate(&self) -> Result<(), ContentError> {
        if is_absolute_url(&self.url) {
            Ok(())
        } else {
            Err(ContentError::InvalidUrl {
                label: self.label.clone(),
                url: self.url.clone(),
            })
        }
    }
}

/// Check that a URL is an absolute http(s) or mailto URL
pub fn is_absolute_url(url: &str) -> bool {
    WEB_URL.is_match(url) || MAILTO_URL.is_match(url)
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub description: Markup,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub achievements: Vec<Markup>,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// A category label with its ordered skill tags
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Downloadable résumé asset
#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub path: String,
    pub download_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Who the page is about
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub greeting: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub focus_tags: Vec<String>,
    pub location: String,
    pub profile_image: String,
    pub resume: Resume,
    pub contact: Contact,
    #[serde(default)]
    pub footer: Vec<String>,
}

/// The complete page content
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

impl Portfolio {
    /// Load the content compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Parse and validate content from JSON
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(source)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), ContentError> {
        require(&self.profile.name, "profile", "name")?;
        require(&self.profile.contact.email, "profile", "contact.email")?;
        let mailto = ProjectLink {
            label: "email".to_string(),
            url: self.profile.contact.mailto(),
        };
        mailto.validate()?;
        for link in &self.profile.contact.links {
            link.validate()?;
        }

        for project in &self.projects {
            require(&project.title, "project", "title")?;
            for link in &project.links {
                link.validate()?;
            }
        }

        for entry in &self.experience {
            let record = format!("experience entry '{}'", entry.role);
            require(&entry.role, &record, "role")?;
            require(&entry.company, &record, "company")?;
            require(&entry.period, &record, "period")?;
        }

        let mut seen = HashSet::new();
        for group in &self.skills {
            if !seen.insert(group.category.as_str()) {
                return Err(ContentError::DuplicateSkillCategory(group.category.clone()));
            }
        }

        Ok(())
    }

    /// Look up a skill group by category
    #[cfg(test)]
    pub fn skill_group(&self, category: &str) -> Option<&SkillGroup> {
        self.skills.iter().find(|group| group.category == category)
    }
}

fn require(value: &str, record: &str, field: &'static str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::MissingField {
            record: record.to_string(),
            field,
        })
    } else {
        Ok(())
    }
}
