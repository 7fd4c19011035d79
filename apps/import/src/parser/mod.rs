// Résumé text parser.
// Implements: heuristic section/field extraction from free-form PDF text as an
// explicit finite-state scan. The scan state and per-line transition live in
// `classifier`; `driver` folds the transition over the input lines.

pub mod classifier;
pub mod driver;
pub mod models;

// Re-export the public API consumed by other modules (populate, main).
pub use driver::parse_resume_text;
pub use models::{EducationDraft, ExperienceDraft, ParsedResume, ProfileFragment, SkillDraft};
