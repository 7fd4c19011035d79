//! Persisted record types produced by the populator.
//!
//! These are the fully-defaulted documents handed to a [`DocumentStore`]
//! (see `populate`) — unlike parser drafts, every field here is concrete.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parser::models::{EducationDraft, ExperienceDraft, SkillDraft};

pub const DEFAULT_ROLE: &str = "Role not specified";
pub const DEFAULT_COMPANY: &str = "Company not specified";
pub const DEFAULT_DEGREE: &str = "Degree not specified";
pub const DEFAULT_INSTITUTION: &str = "Institution not specified";

/// Skill category every imported skill lands in. Imported skills are never
/// merged into existing categories.
pub const IMPORT_SKILL_CATEGORY: &str = "General Skills";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: Vec<String>,
}

impl ExperienceRecord {
    /// Builds an insertable record from a draft, filling unset fields with
    /// the defined defaults.
    pub fn from_draft(draft: &ExperienceDraft) -> Self {
        ExperienceRecord {
            id: Uuid::new_v4(),
            role: draft.role.clone().unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            company: draft
                .company
                .clone()
                .unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
            location: String::new(),
            period: draft.period.clone().unwrap_or_default(),
            description: draft.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationRecord {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub field: String,
}

impl EducationRecord {
    pub fn from_draft(draft: &EducationDraft) -> Self {
        EducationRecord {
            id: Uuid::new_v4(),
            degree: draft
                .degree
                .clone()
                .unwrap_or_else(|| DEFAULT_DEGREE.to_string()),
            institution: draft
                .institution
                .clone()
                .unwrap_or_else(|| DEFAULT_INSTITUTION.to_string()),
            location: String::new(),
            period: draft.period.clone().unwrap_or_default(),
            field: String::new(),
        }
    }
}

/// One named group of skills, inserted whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategoryRecord {
    pub id: Uuid,
    pub category: String,
    pub skills: Vec<SkillDraft>,
}

impl SkillCategoryRecord {
    /// Wraps imported skills as one `"General Skills"` category.
    pub fn general(skills: &[SkillDraft]) -> Self {
        SkillCategoryRecord {
            id: Uuid::new_v4(),
            category: IMPORT_SKILL_CATEGORY.to_string(),
            skills: skills.to_vec(),
        }
    }
}
