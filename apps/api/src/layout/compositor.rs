//! Adaptive layout compositor.
//!
//! Maps a density score onto a spacing band, applies the vertical
//! distribution adjustment, and assembles the rendered section tree in the
//! template's order. Absent sections are omitted entirely so they contribute
//! no spacing.
//!
//! # Band table
//! - d < 10        → low:        spacing ×1.40, line height +0.15, font +0.5pt
//! - 10 ≤ d < 15   → medium-low: spacing ×1.20, line height +0.08
//! - 15 ≤ d ≤ 20   → neutral:    no adjustment
//! - d > 20        → high:       spacing ×0.80, line height −0.08, font −0.5pt
//!
//! Boundary values belong to the band whose lower bound they are.

use serde::{Deserialize, Serialize};

use crate::layout::document::{
    EducationItem, ExperienceItem, HeaderBlock, LanguageItem, LayoutParameters, RenderedDocument,
    Section, SectionBody,
};
use crate::layout::templates::{PageLayoutMode, SectionKind, SpacingSet, TemplateStyleSet};
use crate::models::resume::ResumeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Density bands
// ────────────────────────────────────────────────────────────────────────────

const LOW_BAND_MAX: f32 = 10.0;
const MEDIUM_LOW_BAND_MAX: f32 = 15.0;
const NEUTRAL_BAND_MAX: f32 = 20.0;

/// Multiplier applied when the record has no custom sections.
const NO_CUSTOM_DISTRIBUTION_BOOST: f32 = 1.15;
/// Further multiplier when fewer than 4 of the 5 content sections are present.
const SPARSE_SECTION_BOOST: f32 = 1.10;
const SPARSE_SECTION_THRESHOLD: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DensityBand {
    Low,
    MediumLow,
    Neutral,
    High,
}

/// Spacing and text adjustments for one band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandAdjustments {
    pub spacing_multiplier: f32,
    pub line_height_delta: f32,
    pub font_size_delta: f32,
}

pub fn band_for_density(density: f32) -> DensityBand {
    if density < LOW_BAND_MAX {
        DensityBand::Low
    } else if density < MEDIUM_LOW_BAND_MAX {
        DensityBand::MediumLow
    } else if density <= NEUTRAL_BAND_MAX {
        DensityBand::Neutral
    } else {
        DensityBand::High
    }
}

impl DensityBand {
    pub fn adjustments(&self) -> BandAdjustments {
        match self {
            DensityBand::Low => BandAdjustments {
                spacing_multiplier: 1.40,
                line_height_delta: 0.15,
                font_size_delta: 0.5,
            },
            DensityBand::MediumLow => BandAdjustments {
                spacing_multiplier: 1.20,
                line_height_delta: 0.08,
                font_size_delta: 0.0,
            },
            DensityBand::Neutral => BandAdjustments {
                spacing_multiplier: 1.0,
                line_height_delta: 0.0,
                font_size_delta: 0.0,
            },
            DensityBand::High => BandAdjustments {
                spacing_multiplier: 0.80,
                line_height_delta: -0.08,
                font_size_delta: -0.5,
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section presence
// ────────────────────────────────────────────────────────────────────────────

/// Which of the five content sections have any visible entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPresence {
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub languages: bool,
    pub custom: bool,
}

impl SectionPresence {
    pub fn of(record: &ResumeRecord) -> Self {
        Self {
            experience: record.present_experience().next().is_some(),
            education: record.present_education().next().is_some(),
            skills: record.present_skills().next().is_some(),
            languages: record.present_languages().next().is_some(),
            custom: record.present_custom_sections().next().is_some(),
        }
    }

    pub fn has(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Experience => self.experience,
            SectionKind::Education => self.education,
            SectionKind::Skills => self.skills,
            SectionKind::Languages => self.languages,
            SectionKind::Custom => self.custom,
        }
    }

    pub fn count(&self) -> usize {
        [
            self.experience,
            self.education,
            self.skills,
            self.languages,
            self.custom,
        ]
        .iter()
        .filter(|p| **p)
        .count()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parameter resolution
// ────────────────────────────────────────────────────────────────────────────

/// Resolves the final layout parameters from the template's base spacings,
/// the density band, and section presence. The distribution factor is
/// multiplicative with the band spacing.
pub fn derive_parameters(
    base: &SpacingSet,
    band: DensityBand,
    presence: &SectionPresence,
) -> LayoutParameters {
    let adjustments = band.adjustments();

    let mut distribution = 1.0;
    if !presence.custom {
        distribution *= NO_CUSTOM_DISTRIBUTION_BOOST;
    }
    if presence.count() < SPARSE_SECTION_THRESHOLD {
        distribution *= SPARSE_SECTION_BOOST;
    }

    let scale = adjustments.spacing_multiplier * distribution;
    LayoutParameters {
        section_spacing: base.section_spacing * scale,
        item_spacing: base.item_spacing * scale,
        bullet_spacing: base.bullet_spacing * scale,
        font_size_delta: adjustments.font_size_delta,
        line_height_delta: adjustments.line_height_delta,
        vertical_distribution_factor: distribution,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Assembles the rendered document for a record under a template.
pub fn compose(
    record: &ResumeRecord,
    styles: &'static TemplateStyleSet,
    density: f32,
) -> RenderedDocument {
    let presence = SectionPresence::of(record);
    let band = band_for_density(density);
    let parameters = derive_parameters(&styles.spacing, band, &presence);
    let header = build_header(record);

    let (sidebar, body) = match styles.layout_mode {
        PageLayoutMode::TwoColumn => {
            // Fixed creative split: chips and languages in the sidebar,
            // everything narrative in the main column.
            let sidebar: Vec<Section> = [SectionKind::Skills, SectionKind::Languages]
                .into_iter()
                .filter(|kind| presence.has(*kind))
                .flat_map(|kind| build_sections(kind, record, styles))
                .collect();
            let body: Vec<Section> = [
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::Custom,
            ]
            .into_iter()
            .filter(|kind| presence.has(*kind))
            .flat_map(|kind| build_sections(kind, record, styles))
            .collect();
            (Some(sidebar), body)
        }
        PageLayoutMode::SingleColumn => {
            let body: Vec<Section> = styles
                .section_order
                .into_iter()
                .filter(|kind| presence.has(*kind))
                .flat_map(|kind| build_sections(kind, record, styles))
                .collect();
            (None, body)
        }
    };

    RenderedDocument {
        template: styles.id.as_str().to_owned(),
        density,
        parameters,
        header,
        sidebar,
        body,
    }
}

fn build_header(record: &ResumeRecord) -> HeaderBlock {
    let info = &record.personal_info;
    let contact: Vec<String> = [&info.email, &info.phone, &info.location]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    HeaderBlock {
        full_name: info.full_name.clone(),
        title: non_blank_owned(&info.title),
        contact,
        summary: non_blank_owned(&info.summary),
    }
}

/// Builds the sections for one kind. Custom sections expand into one section
/// each, carrying their own titles; the other kinds produce exactly one.
fn build_sections(
    kind: SectionKind,
    record: &ResumeRecord,
    styles: &TemplateStyleSet,
) -> Vec<Section> {
    match kind {
        SectionKind::Experience => vec![Section {
            kind,
            title: styles.titles.for_kind(kind).to_owned(),
            body: SectionBody::Experience(
                record
                    .present_experience()
                    .map(|e| ExperienceItem {
                        title: e.title.clone(),
                        company: e.company.clone(),
                        location: e.location.clone(),
                        date_range: format_date_range(&e.start_date, &e.end_date),
                        bullets: e.bullet_lines(),
                    })
                    .collect(),
            ),
        }],
        SectionKind::Education => vec![Section {
            kind,
            title: styles.titles.for_kind(kind).to_owned(),
            body: SectionBody::Education(
                record
                    .present_education()
                    .map(|e| EducationItem {
                        degree: e.degree.clone(),
                        school: e.school.clone(),
                        location: e.location.clone(),
                        graduation_date: e.graduation_date.clone(),
                    })
                    .collect(),
            ),
        }],
        SectionKind::Skills => vec![Section {
            kind,
            title: styles.titles.for_kind(kind).to_owned(),
            body: SectionBody::Skills(record.present_skills().map(str::to_owned).collect()),
        }],
        SectionKind::Languages => vec![Section {
            kind,
            title: styles.titles.for_kind(kind).to_owned(),
            body: SectionBody::Languages(
                record
                    .present_languages()
                    .map(|l| LanguageItem {
                        language: l.language.trim().to_owned(),
                        proficiency: l.proficiency.as_str().to_owned(),
                    })
                    .collect(),
            ),
        }],
        SectionKind::Custom => record
            .present_custom_sections()
            .map(|c| {
                let title = if styles.section_title_uppercase {
                    c.title.to_uppercase()
                } else {
                    c.title.clone()
                };
                Section {
                    kind,
                    title,
                    body: SectionBody::Custom(
                        c.description
                            .lines()
                            .map(str::trim)
                            .filter(|l| !l.is_empty())
                            .map(str::to_owned)
                            .collect(),
                    ),
                }
            })
            .collect(),
    }
}

/// `start - end`, with an empty end shown as `Present`. Both blank → empty.
fn format_date_range(start: &str, end: &str) -> String {
    let start = start.trim();
    let end = end.trim();
    if start.is_empty() && end.is_empty() {
        return String::new();
    }
    if end.is_empty() {
        format!("{start} - Present")
    } else {
        format!("{start} - {end}")
    }
}

fn non_blank_owned(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
