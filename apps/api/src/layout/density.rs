//! Content density estimation.
//!
//! A weighted count over present entries, used by the compositor to pick a
//! spacing band. Deterministic and pure: the same record always scores the
//! same. Empty entries contribute nothing so invisible content cannot shift
//! spacing.

use crate::models::resume::{ExperienceEntry, ResumeRecord};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

pub const EXPERIENCE_WEIGHT: f32 = 1.0;
pub const BULLET_LINE_WEIGHT: f32 = 0.5;
pub const EDUCATION_WEIGHT: f32 = 1.0;
pub const SKILL_WEIGHT: f32 = 0.3;
pub const LANGUAGE_WEIGHT: f32 = 0.5;
pub const CUSTOM_SECTION_WEIGHT: f32 = 2.0;

// ────────────────────────────────────────────────────────────────────────────
// Core function
// ────────────────────────────────────────────────────────────────────────────

/// Computes the weighted content density of a record.
///
/// Each present experience entry costs 1.0 plus 0.5 per bullet line. When the
/// dedicated bullet list is used, every bullet is a line; when bullets come
/// from the description, the first line is already priced into the entry
/// itself and only the extra lines count. An empty record scores 0.0.
pub fn estimate_density(record: &ResumeRecord) -> f32 {
    let experience: f32 = record
        .present_experience()
        .map(|e| EXPERIENCE_WEIGHT + BULLET_LINE_WEIGHT * bullet_line_count(e) as f32)
        .sum();
    let education = record.present_education().count() as f32 * EDUCATION_WEIGHT;
    let skills = record.present_skills().count() as f32 * SKILL_WEIGHT;
    let languages = record.present_languages().count() as f32 * LANGUAGE_WEIGHT;
    let custom = record.present_custom_sections().count() as f32 * CUSTOM_SECTION_WEIGHT;

    experience + education + skills + languages + custom
}

/// Billable bullet lines for one experience entry.
fn bullet_line_count(entry: &ExperienceEntry) -> usize {
    let dedicated = entry
        .bullet_points
        .iter()
        .filter(|b| !b.trim().is_empty())
        .count();
    if dedicated > 0 {
        return dedicated;
    }
    entry
        .description
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count()
        .saturating_sub(1)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
