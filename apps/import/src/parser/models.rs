//! Output data model of the résumé scan — incrementally-built draft records.
//!
//! Draft fields are all optional because the scan fills them in as lines are
//! classified; unset fields stay unset rather than defaulting here. Defaults
//! are the populator's job (see `populate`), so a draft faithfully records
//! what the document actually said.

use serde::{Deserialize, Serialize};

/// Skill confidence assigned to every extracted skill. Free-text résumés carry
/// no usable proficiency signal, so every skill gets the same level.
pub const DEFAULT_SKILL_LEVEL: u8 = 70;

/// Complete structured output of one parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub profile: ProfileFragment,
    pub experience: Vec<ExperienceDraft>,
    pub education: Vec<EducationDraft>,
    pub skills: Vec<SkillDraft>,
}

/// Profile fields discovered before the first section header.
/// Each field is set at most once — first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileFragment {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.title.is_none() && self.email.is_none()
    }
}

/// In-progress experience entry, flushed to `ParsedResume::experience` when a
/// new date range starts a fresh entry, the section changes, or input ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub description: Vec<String>,
}

impl ExperienceDraft {
    /// A draft with no fields set is never flushed to the output list.
    pub fn is_empty(&self) -> bool {
        self.period.is_none()
            && self.role.is_none()
            && self.company.is_none()
            && self.description.is_empty()
    }
}

/// In-progress education entry. Same flush lifecycle as [`ExperienceDraft`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

impl EducationDraft {
    pub fn is_empty(&self) -> bool {
        self.period.is_none() && self.degree.is_none() && self.institution.is_none()
    }
}

/// A single extracted skill. Appended directly to the output — skills have no
/// multi-line draft accumulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
    pub level: u8,
}

impl SkillDraft {
    pub fn new(name: impl Into<String>) -> Self {
        SkillDraft {
            name: name.into(),
            level: DEFAULT_SKILL_LEVEL,
        }
    }
}
