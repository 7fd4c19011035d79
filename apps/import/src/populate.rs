//! Database populator — pushes a parsed résumé into a document store.
//!
//! The store is trait-based so backends swap without touching the import
//! pipeline. `MemoryStore` is the built-in backend used by tests and the CLI
//! dry-run; a real document-database backend implements the same trait.

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use crate::errors::ImportError;
use crate::models::{EducationRecord, ExperienceRecord, SkillCategoryRecord};
use crate::parser::models::{ParsedResume, ProfileFragment};

/// Storage backend for imported résumé records.
///
/// Profile updates use merge semantics: fields unset in the fragment must be
/// preserved on the stored profile. Experience, education, and skill-category
/// records are always inserted as new documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn upsert_profile(&self, fragment: &ProfileFragment) -> anyhow::Result<()>;
    async fn insert_experience(&self, record: ExperienceRecord) -> anyhow::Result<()>;
    async fn insert_education(&self, record: EducationRecord) -> anyhow::Result<()>;
    async fn insert_skill_category(&self, record: SkillCategoryRecord) -> anyhow::Result<()>;
}

/// Counts of what one populate pass wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PopulateReport {
    pub profile_updated: bool,
    pub experience_inserted: usize,
    pub education_inserted: usize,
    pub skill_categories_inserted: usize,
}

/// Writes a parsed résumé into `store` per the import contract:
///
/// - a non-empty profile fragment is upserted (merge semantics);
/// - experience drafts carrying at least a role or company become fully
///   defaulted records with fresh ids; drafts with neither are skipped;
/// - education drafts carrying at least a degree or institution likewise;
/// - a non-empty skills list becomes one `"General Skills"` category.
///
/// Store failures propagate immediately; nothing is retried here.
pub async fn populate_store(
    store: &dyn DocumentStore,
    resume: &ParsedResume,
) -> Result<PopulateReport, ImportError> {
    let mut report = PopulateReport::default();

    if !resume.profile.is_empty() {
        store
            .upsert_profile(&resume.profile)
            .await
            .map_err(ImportError::Store)?;
        report.profile_updated = true;
    }

    for draft in &resume.experience {
        if draft.role.is_none() && draft.company.is_none() {
            continue;
        }
        store
            .insert_experience(ExperienceRecord::from_draft(draft))
            .await
            .map_err(ImportError::Store)?;
        report.experience_inserted += 1;
    }

    for draft in &resume.education {
        if draft.degree.is_none() && draft.institution.is_none() {
            continue;
        }
        store
            .insert_education(EducationRecord::from_draft(draft))
            .await
            .map_err(ImportError::Store)?;
        report.education_inserted += 1;
    }

    if !resume.skills.is_empty() {
        store
            .insert_skill_category(SkillCategoryRecord::general(&resume.skills))
            .await
            .map_err(ImportError::Store)?;
        report.skill_categories_inserted += 1;
    }

    info!(
        profile_updated = report.profile_updated,
        experience = report.experience_inserted,
        education = report.education_inserted,
        skill_categories = report.skill_categories_inserted,
        "resume import populated store"
    );

    Ok(report)
}

/// In-memory document store. Backs unit tests and the CLI dry-run.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryContents>,
}

/// Snapshot of everything a [`MemoryStore`] holds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryContents {
    pub profile: ProfileFragment,
    pub experience: Vec<ExperienceRecord>,
    pub education: Vec<EducationRecord>,
    pub skill_categories: Vec<SkillCategoryRecord>,
}

impl MemoryStore {
    pub async fn snapshot(&self) -> MemoryContents {
        self.inner.lock().await.clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn upsert_profile(&self, fragment: &ProfileFragment) -> anyhow::Result<()> {
        let mut contents = self.inner.lock().await;
        // Merge: only fields present in the fragment overwrite.
        if let Some(name) = &fragment.name {
            contents.profile.name = Some(name.clone());
        }
        if let Some(title) = &fragment.title {
            contents.profile.title = Some(title.clone());
        }
        if let Some(email) = &fragment.email {
            contents.profile.email = Some(email.clone());
        }
        Ok(())
    }

    async fn insert_experience(&self, record: ExperienceRecord) -> anyhow::Result<()> {
        self.inner.lock().await.experience.push(record);
        Ok(())
    }

    async fn insert_education(&self, record: EducationRecord) -> anyhow::Result<()> {
        self.inner.lock().await.education.push(record);
        Ok(())
    }

    async fn insert_skill_category(&self, record: SkillCategoryRecord) -> anyhow::Result<()> {
        self.inner.lock().await.skill_categories.push(record);
        Ok(())
    }
}
