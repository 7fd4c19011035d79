//! Line classifier — the per-line transition function of the résumé scan.
//!
//! State is `ScanState`: the current section, with the in-progress draft held
//! inside the section variant so an experience draft cannot outlive the
//! experience section. `step` applies one trimmed non-blank line; `finish`
//! performs the end-of-input flush. The classifier is total — a line that
//! matches no rule at the current state is ignored, never an error. Content is
//! not validated: free-text extraction is heuristic, garbage in stays garbage
//! out.

use std::sync::OnceLock;

use regex::Regex;

use crate::parser::models::{EducationDraft, ExperienceDraft, ParsedResume, ProfileFragment, SkillDraft};

/// Section-header keyword sets, matched by case-insensitive substring
/// containment. Checked in this order; the first matching category wins.
const EXPERIENCE_HEADINGS: &[&str] = &["experience", "work history", "employment"];
const EDUCATION_HEADINGS: &[&str] = &["education", "academic", "qualification"];
const SKILLS_HEADINGS: &[&str] = &["skills", "technical skills", "competencies"];

/// Keywords marking a profile line as a job title.
const TITLE_KEYWORDS: &[&str] = &["developer", "engineer", "designer", "manager", "specialist"];

/// Keywords marking an education line as a degree.
const DEGREE_KEYWORDS: &[&str] = &["bachelor", "master", "phd", "diploma", "degree"];

/// A name line has at most this many whitespace-separated tokens.
const NAME_MAX_TOKENS: usize = 4;

/// A role line has at most this many whitespace-separated tokens; longer lines
/// fall through to description handling.
const ROLE_MAX_TOKENS: usize = 8;

const MONTH_PATTERN: &str = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?";

/// Date range for experience entries: `YYYY - YYYY` or `Mon YYYY - Mon YYYY`,
/// with the right bound replaceable by `present`/`current`. Separator is `-`
/// or `–`, optionally surrounded by whitespace. Matched anywhere in the line;
/// the full matched substring becomes the entry's `period`.
fn experience_range() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)(?:{m}\s+)?\d{{4}}\s*[-–]\s*(?:(?:{m}\s+)?\d{{4}}|present|current)",
            m = MONTH_PATTERN
        ))
        .expect("experience date pattern is valid")
    })
}

/// Date range for education entries — stricter: no `present`/`current` bound.
fn education_range() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)(?:{m}\s+)?\d{{4}}\s*[-–]\s*(?:{m}\s+)?\d{{4}}",
            m = MONTH_PATTERN
        ))
        .expect("education date pattern is valid")
    })
}

/// Current scan section, carrying the section's in-progress draft.
/// Exactly one section is active at a time; profile capture only happens
/// before the first section header (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Experience(ExperienceDraft),
    Education(EducationDraft),
    Skills,
}

/// Section category detected from a header line, before a draft is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Experience,
    Education,
    Skills,
}

fn detect_section(line: &str) -> Option<SectionKind> {
    let lower = line.to_lowercase();
    if EXPERIENCE_HEADINGS.iter().any(|k| lower.contains(k)) {
        Some(SectionKind::Experience)
    } else if EDUCATION_HEADINGS.iter().any(|k| lower.contains(k)) {
        Some(SectionKind::Education)
    } else if SKILLS_HEADINGS.iter().any(|k| lower.contains(k)) {
        Some(SectionKind::Skills)
    } else {
        None
    }
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Strips a leading bullet marker (`•`, `-`, or `*`) and any whitespace after it.
fn strip_bullet(line: &str) -> &str {
    for marker in ["•", "-", "*"] {
        if let Some(rest) = line.strip_prefix(marker) {
            return rest.trim_start();
        }
    }
    line
}

/// Mutable scan state threaded through the line fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    section: Section,
}

impl ScanState {
    /// Applies one trimmed, non-blank line to the scan state, appending any
    /// flushed drafts or skills to `out`.
    pub fn step(&mut self, line: &str, out: &mut ParsedResume) {
        // Priority 1: section headers. They flush the previous section's draft
        // and contribute no field data themselves.
        if let Some(kind) = detect_section(line) {
            flush_section(std::mem::take(&mut self.section), out);
            self.section = match kind {
                SectionKind::Experience => Section::Experience(ExperienceDraft::default()),
                SectionKind::Education => Section::Education(EducationDraft::default()),
                SectionKind::Skills => Section::Skills,
            };
            return;
        }

        match &mut self.section {
            Section::None => capture_profile(line, &mut out.profile),
            Section::Experience(draft) => {
                if let Some(m) = experience_range().find(line) {
                    // A new date range starts a fresh entry; the old draft is
                    // flushed even if only its period was ever set.
                    let period = m.as_str().to_string();
                    let prev = std::mem::take(draft);
                    if !prev.is_empty() {
                        out.experience.push(prev);
                    }
                    draft.period = Some(period);
                } else if draft.role.is_none()
                    && line.split_whitespace().count() <= ROLE_MAX_TOKENS
                {
                    draft.role = Some(line.to_string());
                } else if draft.role.is_some() && draft.company.is_none() {
                    draft.company = Some(line.to_string());
                } else {
                    let text = strip_bullet(line);
                    if !text.is_empty() {
                        draft.description.push(text.to_string());
                    }
                }
            }
            Section::Education(draft) => {
                if let Some(m) = education_range().find(line) {
                    let period = m.as_str().to_string();
                    let prev = std::mem::take(draft);
                    if !prev.is_empty() {
                        out.education.push(prev);
                    }
                    draft.period = Some(period);
                } else if contains_any(&line.to_lowercase(), DEGREE_KEYWORDS) {
                    draft.degree = Some(line.to_string());
                } else if draft.degree.is_some() && draft.institution.is_none() {
                    draft.institution = Some(line.to_string());
                }
            }
            Section::Skills => capture_skills(line, &mut out.skills),
        }
    }

    /// End-of-input flush: appends the in-progress draft if it is non-empty.
    pub fn finish(self, out: &mut ParsedResume) {
        flush_section(self.section, out);
    }
}

fn flush_section(section: Section, out: &mut ParsedResume) {
    match section {
        Section::Experience(d) if !d.is_empty() => out.experience.push(d),
        Section::Education(d) if !d.is_empty() => out.education.push(d),
        _ => {}
    }
}

/// Profile capture, active only before the first section header.
/// Each field is set at most once, and a line is consumed by the first field
/// it qualifies for — `"John Developer"` becomes a name, never a title.
fn capture_profile(line: &str, profile: &mut ProfileFragment) {
    if profile.name.is_none()
        && line.split_whitespace().count() <= NAME_MAX_TOKENS
        && line.chars().next().is_some_and(char::is_uppercase)
    {
        profile.name = Some(line.to_string());
    } else if profile.email.is_none() && line.contains('@') {
        profile.email = Some(line.to_string());
    } else if profile.title.is_none() && contains_any(&line.to_lowercase(), TITLE_KEYWORDS) {
        profile.title = Some(line.to_string());
    }
}

/// Skills append directly to the output — no draft accumulation. A comma line
/// yields one skill per non-empty piece; anything else yields a single skill
/// after bullet stripping.
fn capture_skills(line: &str, skills: &mut Vec<SkillDraft>) {
    if line.contains(',') {
        for piece in line.split(',') {
            let piece = piece.trim();
            if !piece.is_empty() {
                skills.push(SkillDraft::new(piece));
            }
        }
    } else {
        let name = strip_bullet(line);
        if !name.is_empty() {
            skills.push(SkillDraft::new(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Section detection ──────────────────────────────────────────────────

    #[test]
    fn test_detects_experience_headings() {
        for line in ["EXPERIENCE", "Work History", "Employment record"] {
            assert_eq!(detect_section(line), Some(SectionKind::Experience), "{line}");
        }
    }

    #[test]
    fn test_detects_education_headings() {
        for line in ["Education", "ACADEMIC BACKGROUND", "Qualifications"] {
            assert_eq!(detect_section(line), Some(SectionKind::Education), "{line}");
        }
    }

    #[test]
    fn test_detects_skills_headings() {
        for line in ["Skills", "TECHNICAL SKILLS", "Core Competencies"] {
            assert_eq!(detect_section(line), Some(SectionKind::Skills), "{line}");
        }
    }

    #[test]
    fn test_plain_line_is_not_a_section() {
        assert_eq!(detect_section("Software Engineer at Acme"), None);
    }

    #[test]
    fn test_experience_wins_over_education_on_ambiguous_header() {
        // Check order: experience > education > skills.
        assert_eq!(
            detect_section("Experience and Education"),
            Some(SectionKind::Experience)
        );
    }

    // ── Date ranges ────────────────────────────────────────────────────────

    #[test]
    fn test_experience_range_plain_years() {
        let m = experience_range().find("2020 - 2022").unwrap();
        assert_eq!(m.as_str(), "2020 - 2022");
    }

    #[test]
    fn test_experience_range_month_bounds() {
        let m = experience_range().find("Jan 2020 - Mar 2022").unwrap();
        assert_eq!(m.as_str(), "Jan 2020 - Mar 2022");
    }

    #[test]
    fn test_experience_range_present_and_current() {
        assert!(experience_range().is_match("2021 - Present"));
        assert!(experience_range().is_match("June 2021 - current"));
    }

    #[test]
    fn test_experience_range_en_dash_and_tight_spacing() {
        assert!(experience_range().is_match("2019–2021"));
        assert!(experience_range().is_match("2019-2021"));
    }

    #[test]
    fn test_experience_range_matches_inside_prose() {
        // Known heuristic limitation, preserved deliberately: the pattern is a
        // substring search, so year pairs in running text also match.
        assert!(experience_range().is_match("grew revenue 2018 - 2020 across regions"));
    }

    #[test]
    fn test_education_range_rejects_present() {
        assert!(!education_range().is_match("2021 - Present"));
        assert!(education_range().is_match("2016 - 2020"));
    }

    #[test]
    fn test_no_match_on_single_year() {
        assert!(!experience_range().is_match("Since 2020"));
    }

    // ── Bullet stripping ───────────────────────────────────────────────────

    #[test]
    fn test_strip_bullet_markers() {
        assert_eq!(strip_bullet("- Built things"), "Built things");
        assert_eq!(strip_bullet("• Shipped features"), "Shipped features");
        assert_eq!(strip_bullet("*   Tuned queries"), "Tuned queries");
    }

    #[test]
    fn test_strip_bullet_leaves_plain_lines_alone() {
        assert_eq!(strip_bullet("Built things"), "Built things");
    }

    #[test]
    fn test_bare_marker_strips_to_empty() {
        assert_eq!(strip_bullet("-"), "");
    }

    // ── Profile capture ────────────────────────────────────────────────────

    #[test]
    fn test_name_requires_uppercase_and_token_limit() {
        let mut p = ProfileFragment::default();
        capture_profile("john smith", &mut p);
        assert_eq!(p.name, None, "lowercase first char is not a name");
        capture_profile("John Alexander Smith Jones Fifth", &mut p);
        assert_eq!(p.name, None, "5 tokens exceed the name limit");
        capture_profile("John Smith", &mut p);
        assert_eq!(p.name.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_name_line_does_not_double_as_title() {
        let mut p = ProfileFragment::default();
        capture_profile("John Developer", &mut p);
        assert_eq!(p.name.as_deref(), Some("John Developer"));
        assert_eq!(p.title, None);
    }

    #[test]
    fn test_title_keyword_capture_once_name_is_set() {
        let mut p = ProfileFragment::default();
        capture_profile("John Smith", &mut p);
        capture_profile("Senior Backend Engineer", &mut p);
        assert_eq!(p.title.as_deref(), Some("Senior Backend Engineer"));
    }

    #[test]
    fn test_profile_fields_are_first_match_wins() {
        let mut p = ProfileFragment::default();
        capture_profile("john@x.com", &mut p);
        capture_profile("jane@y.com", &mut p);
        assert_eq!(p.email.as_deref(), Some("john@x.com"));
    }

    // ── Transition-level checks on ScanState ───────────────────────────────

    #[test]
    fn test_section_header_flushes_previous_draft() {
        let mut out = ParsedResume::default();
        let mut state = ScanState::default();
        state.step("EXPERIENCE", &mut out);
        state.step("2020 - 2022", &mut out);
        state.step("EDUCATION", &mut out);
        assert_eq!(out.experience.len(), 1);
        assert_eq!(out.experience[0].period.as_deref(), Some("2020 - 2022"));
    }

    #[test]
    fn test_empty_draft_is_not_flushed_on_section_change() {
        let mut out = ParsedResume::default();
        let mut state = ScanState::default();
        state.step("EXPERIENCE", &mut out);
        state.step("SKILLS", &mut out);
        assert!(out.experience.is_empty());
    }

    #[test]
    fn test_consecutive_date_ranges_split_entries() {
        let mut out = ParsedResume::default();
        let mut state = ScanState::default();
        state.step("EXPERIENCE", &mut out);
        state.step("2020 - 2022", &mut out);
        state.step("2018 - 2020", &mut out);
        state.finish(&mut out);
        assert_eq!(out.experience.len(), 2);
        assert_eq!(out.experience[0].period.as_deref(), Some("2020 - 2022"));
        assert_eq!(out.experience[1].period.as_deref(), Some("2018 - 2020"));
    }

    #[test]
    fn test_long_line_with_unset_role_goes_to_description() {
        let mut out = ParsedResume::default();
        let mut state = ScanState::default();
        state.step("EXPERIENCE", &mut out);
        state.step("2020 - 2022", &mut out);
        let long = "Responsible for the design build and rollout of nine services";
        assert!(long.split_whitespace().count() > ROLE_MAX_TOKENS);
        state.step(long, &mut out);
        state.finish(&mut out);
        assert_eq!(out.experience[0].role, None);
        assert_eq!(out.experience[0].description, vec![long.to_string()]);
    }

    #[test]
    fn test_role_then_company_then_bullets() {
        let mut out = ParsedResume::default();
        let mut state = ScanState::default();
        state.step("EXPERIENCE", &mut out);
        state.step("2020 - 2022", &mut out);
        state.step("Software Engineer", &mut out);
        state.step("Acme Corp", &mut out);
        state.step("- Built things", &mut out);
        state.step("• Shipped more things", &mut out);
        state.finish(&mut out);
        let entry = &out.experience[0];
        assert_eq!(entry.role.as_deref(), Some("Software Engineer"));
        assert_eq!(entry.company.as_deref(), Some("Acme Corp"));
        assert_eq!(entry.description, vec!["Built things", "Shipped more things"]);
    }

    #[test]
    fn test_degree_then_institution() {
        let mut out = ParsedResume::default();
        let mut state = ScanState::default();
        state.step("EDUCATION", &mut out);
        state.step("2016 - 2020", &mut out);
        state.step("Bachelor of Science", &mut out);
        state.step("Tech U", &mut out);
        state.finish(&mut out);
        let entry = &out.education[0];
        assert_eq!(entry.degree.as_deref(), Some("Bachelor of Science"));
        assert_eq!(entry.institution.as_deref(), Some("Tech U"));
    }

    #[test]
    fn test_education_line_without_degree_context_is_ignored() {
        let mut out = ParsedResume::default();
        let mut state = ScanState::default();
        state.step("EDUCATION", &mut out);
        state.step("Tech U", &mut out);
        state.finish(&mut out);
        assert!(out.education.is_empty(), "institution requires a degree first");
    }

    #[test]
    fn test_skills_comma_split_and_bullets() {
        let mut out = ParsedResume::default();
        let mut state = ScanState::default();
        state.step("SKILLS", &mut out);
        state.step("Python, Go , Rust", &mut out);
        state.step("• Kubernetes", &mut out);
        let names: Vec<&str> = out.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "Go", "Rust", "Kubernetes"]);
        assert!(out.skills.iter().all(|s| s.level == 70));
    }

    #[test]
    fn test_trailing_comma_yields_no_empty_skill() {
        let mut out = ParsedResume::default();
        let mut state = ScanState::default();
        state.step("SKILLS", &mut out);
        state.step("Python,", &mut out);
        assert_eq!(out.skills.len(), 1);
    }
}
