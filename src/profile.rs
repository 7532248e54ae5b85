//! The content the page template renders.
//!
//! A portfolio differs from the next one only in its data, so there is one
//! page and one [`Profile`]. The profile ships as `content/profile.json`,
//! embedded into both the server and the WASM bundle.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::SubmitMode;

pub static SITE_PROFILE: LazyLock<Profile> = LazyLock::new(Profile::load_or_default);

const PROFILE_FILE: &str = "profile.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile content not found")]
    NotFound,
    #[error("Couldn't parse profile: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// devicon class, e.g. `devicon-github-plain`
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub repository: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    pub heading: String,
    pub intro: String,
    pub mode: SubmitMode,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            heading: "Get In Touch".to_string(),
            intro: "I'm always open to discussing new opportunities. Feel free to say hello!"
                .to_string(),
            mode: SubmitMode::Notify,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub initials: String,
    pub avatar: Option<String>,
    pub about: String,
    pub links: Vec<SocialLink>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub contact: ContactSettings,
}

impl Default for Profile {
    fn default() -> Self {
        Profile::builder()
            .name("Your Name")
            .headline("Full-Stack Engineer • Open Source Enthusiast")
            .initials("YN")
            .about(
                "I'm a software engineer specializing in modern web architectures, cloud \
                 infrastructure, and performance-driven UX.",
            )
            .link("GitHub", "https://github.com/yourusername", "devicon-github-plain")
            .link(
                "LinkedIn",
                "https://linkedin.com/in/yourusername",
                "devicon-linkedin-plain",
            )
            .skills(["Rust", "TypeScript", "PostgreSQL", "Docker"])
            .build()
    }
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ProfileError> {
        serde_json::from_slice(bytes).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    pub fn load() -> Result<Self, ProfileError> {
        let file = Content::get(PROFILE_FILE).ok_or(ProfileError::NotFound)?;
        Self::from_json(&file.data)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("{e}, using default profile");
            Self::default()
        })
    }

    pub fn copyright(&self) -> String {
        format!("© {} {}. All rights reserved.", build_year(), self.name)
    }
}

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

/// Assembles a [`Profile`] field by field; anything not set stays empty.
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    name: String,
    headline: String,
    initials: String,
    avatar: Option<String>,
    about: String,
    links: Vec<SocialLink>,
    skills: Vec<String>,
    projects: Vec<Project>,
    experience: Vec<Experience>,
    contact: ContactSettings,
}

impl ProfileBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = headline.into();
        self
    }

    pub fn initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = initials.into();
        self
    }

    pub fn avatar(mut self, src: impl Into<String>) -> Self {
        self.avatar = Some(src.into());
        self
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    pub fn link(
        mut self,
        label: impl Into<String>,
        href: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        self.links.push(SocialLink {
            label: label.into(),
            href: href.into(),
            icon: icon.into(),
        });
        self
    }

    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    pub fn experience(mut self, entry: Experience) -> Self {
        self.experience.push(entry);
        self
    }

    pub fn contact_mode(mut self, mode: SubmitMode) -> Self {
        self.contact.mode = mode;
        self
    }

    pub fn contact_intro(mut self, intro: impl Into<String>) -> Self {
        self.contact.intro = intro.into();
        self
    }

    pub fn build(self) -> Profile {
        Profile {
            name: self.name,
            headline: self.headline,
            initials: self.initials,
            avatar: self.avatar,
            about: self.about,
            links: self.links,
            skills: self.skills,
            projects: self.projects,
            experience: self.experience,
            contact: self.contact,
        }
    }
}
