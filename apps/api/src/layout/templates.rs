//! Static template style registry for the three resume templates.
#![allow(dead_code)]
//!
//! Every visual constant a template needs is fixed here, independent of
//! content. Font families are already-resolved PostScript identifiers
//! (`Times-Roman`, `Helvetica`) so there is no font I/O to initialize.
//! Sizes are in points, spacings in points, colors as hex strings.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Template identity
// ────────────────────────────────────────────────────────────────────────────

/// The three supported templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// Serif, single column, centered header.
    Professional,
    /// Sans-serif, dark sidebar + main column.
    Creative,
    /// Sans-serif, single column, left-aligned.
    Minimal,
}

impl TemplateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Professional => "professional",
            TemplateId::Creative => "creative",
            TemplateId::Minimal => "minimal",
        }
    }
}

/// Resolved font identifiers, no runtime loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    #[serde(rename = "Times-Roman")]
    TimesRoman,
    Helvetica,
}

impl FontFamily {
    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontFamily::TimesRoman => "Times-Roman",
            FontFamily::Helvetica => "Helvetica",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageLayoutMode {
    SingleColumn,
    TwoColumn,
}

/// The five content sections a template can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Languages,
    Custom,
}

// ────────────────────────────────────────────────────────────────────────────
// Style structs
// ────────────────────────────────────────────────────────────────────────────

/// Font size + line height for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub size_pt: f32,
    pub line_height: f32,
}

/// Base vertical spacing constants before any density adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingSet {
    pub section_spacing: f32,
    pub item_spacing: f32,
    pub bullet_spacing: f32,
}

/// Two-column split used by the creative template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnStyle {
    pub sidebar_width_pct: f32,
    pub sidebar_padding: f32,
    pub sidebar_background: &'static str,
    pub sidebar_foreground: &'static str,
    pub main_padding: f32,
}

/// Per-template display titles for the content sections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTitles {
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub languages: &'static str,
}

impl SectionTitles {
    pub fn for_kind(&self, kind: SectionKind) -> &'static str {
        match kind {
            SectionKind::Experience => self.experience,
            SectionKind::Education => self.education,
            SectionKind::Skills => self.skills,
            SectionKind::Languages => self.languages,
            // custom sections carry their own titles
            SectionKind::Custom => "",
        }
    }
}

/// Everything a template fixes about the page, independent of content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyleSet {
    pub id: TemplateId,
    pub layout_mode: PageLayoutMode,
    pub font: FontFamily,
    pub page_padding_v: f32,
    pub page_padding_h: f32,
    pub background: &'static str,

    pub header: TextStyle,
    pub header_centered: bool,
    pub sub_header: TextStyle,
    pub contact: TextStyle,
    pub section_title: TextStyle,
    pub section_title_uppercase: bool,
    pub job_title: TextStyle,
    pub body: TextStyle,
    pub skill_chip: TextStyle,
    pub language_entry: TextStyle,

    pub section_title_color: &'static str,
    pub body_color: &'static str,
    pub muted_color: &'static str,
    pub section_title_underline: Option<&'static str>,
    pub skill_chip_background: Option<&'static str>,

    pub spacing: SpacingSet,
    /// Section flow for the single-column layout. The two-column layout
    /// ignores this and uses the fixed sidebar/main split below.
    pub section_order: [SectionKind; 5],
    pub two_column: Option<TwoColumnStyle>,
    pub titles: SectionTitles,
}

// ────────────────────────────────────────────────────────────────────────────
// Static style sets
// ────────────────────────────────────────────────────────────────────────────

/// Professional — serif, single column, centered 28pt header, underlined
/// section titles, education before experience.
static PROFESSIONAL: TemplateStyleSet = TemplateStyleSet {
    id: TemplateId::Professional,
    layout_mode: PageLayoutMode::SingleColumn,
    font: FontFamily::TimesRoman,
    page_padding_v: 40.0,
    page_padding_h: 60.0,
    background: "#ffffff",

    header: TextStyle {
        size_pt: 28.0,
        line_height: 1.2,
    },
    header_centered: true,
    sub_header: TextStyle {
        size_pt: 14.0,
        line_height: 1.3,
    },
    contact: TextStyle {
        size_pt: 11.0,
        line_height: 1.4,
    },
    section_title: TextStyle {
        size_pt: 14.0,
        line_height: 1.3,
    },
    section_title_uppercase: false,
    job_title: TextStyle {
        size_pt: 13.0,
        line_height: 1.3,
    },
    body: TextStyle {
        size_pt: 12.0,
        line_height: 1.4,
    },
    skill_chip: TextStyle {
        size_pt: 11.0,
        line_height: 1.4,
    },
    language_entry: TextStyle {
        size_pt: 11.0,
        line_height: 1.4,
    },

    section_title_color: "#000000",
    body_color: "#000000",
    muted_color: "#444444",
    section_title_underline: Some("#000000"),
    skill_chip_background: None,

    spacing: SpacingSet {
        section_spacing: 15.0,
        item_spacing: 8.0,
        bullet_spacing: 2.0,
    },
    section_order: [
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::Custom,
    ],
    two_column: None,
    titles: SectionTitles {
        experience: "Professional Experience",
        education: "Education",
        skills: "Skills",
        languages: "Languages",
    },
};

/// Creative — sans-serif, 30% dark sidebar holding skills and languages as
/// white chips, 70% main column, uppercase section titles.
static CREATIVE: TemplateStyleSet = TemplateStyleSet {
    id: TemplateId::Creative,
    layout_mode: PageLayoutMode::TwoColumn,
    font: FontFamily::Helvetica,
    page_padding_v: 0.0,
    page_padding_h: 0.0,
    background: "#ffffff",

    header: TextStyle {
        size_pt: 24.0,
        line_height: 1.2,
    },
    header_centered: false,
    sub_header: TextStyle {
        size_pt: 13.0,
        line_height: 1.3,
    },
    contact: TextStyle {
        size_pt: 10.0,
        line_height: 1.5,
    },
    section_title: TextStyle {
        size_pt: 16.0,
        line_height: 1.3,
    },
    section_title_uppercase: true,
    job_title: TextStyle {
        size_pt: 13.0,
        line_height: 1.3,
    },
    body: TextStyle {
        size_pt: 11.0,
        line_height: 1.5,
    },
    skill_chip: TextStyle {
        size_pt: 10.0,
        line_height: 1.4,
    },
    language_entry: TextStyle {
        size_pt: 10.0,
        line_height: 1.4,
    },

    section_title_color: "#2D3748",
    body_color: "#4A5568",
    muted_color: "#A0AEC0",
    section_title_underline: None,
    skill_chip_background: Some("#4A5568"),

    spacing: SpacingSet {
        section_spacing: 25.0,
        item_spacing: 20.0,
        bullet_spacing: 4.0,
    },
    // unused by the two-column flow, kept for completeness
    section_order: [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::Custom,
    ],
    two_column: Some(TwoColumnStyle {
        sidebar_width_pct: 30.0,
        sidebar_padding: 20.0,
        sidebar_background: "#2D3748",
        sidebar_foreground: "#ffffff",
        main_padding: 30.0,
    }),
    titles: SectionTitles {
        experience: "EXPERIENCE",
        education: "EDUCATION",
        skills: "SKILLS",
        languages: "LANGUAGES",
    },
};

/// Minimal — sans-serif, single column, left-aligned header, thin #ccc
/// underline under section titles, experience first.
static MINIMAL: TemplateStyleSet = TemplateStyleSet {
    id: TemplateId::Minimal,
    layout_mode: PageLayoutMode::SingleColumn,
    font: FontFamily::Helvetica,
    page_padding_v: 40.0,
    page_padding_h: 40.0,
    background: "#ffffff",

    header: TextStyle {
        size_pt: 28.0,
        line_height: 1.2,
    },
    header_centered: false,
    sub_header: TextStyle {
        size_pt: 13.0,
        line_height: 1.3,
    },
    contact: TextStyle {
        size_pt: 10.0,
        line_height: 1.4,
    },
    section_title: TextStyle {
        size_pt: 16.0,
        line_height: 1.3,
    },
    section_title_uppercase: false,
    job_title: TextStyle {
        size_pt: 13.0,
        line_height: 1.3,
    },
    body: TextStyle {
        size_pt: 11.0,
        line_height: 1.5,
    },
    skill_chip: TextStyle {
        size_pt: 10.0,
        line_height: 1.4,
    },
    language_entry: TextStyle {
        size_pt: 10.0,
        line_height: 1.4,
    },

    section_title_color: "#333333",
    body_color: "#333333",
    muted_color: "#666666",
    section_title_underline: Some("#cccccc"),
    skill_chip_background: None,

    spacing: SpacingSet {
        section_spacing: 20.0,
        item_spacing: 15.0,
        bullet_spacing: 2.0,
    },
    section_order: [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::Custom,
    ],
    two_column: None,
    titles: SectionTitles {
        experience: "Experience",
        education: "Education",
        skills: "Skills",
        languages: "Languages",
    },
};

/// Returns the style set for a template id string.
///
/// Unrecognized ids fall back to `professional`, never an error.
pub fn get_style_set(template_id: &str) -> &'static TemplateStyleSet {
    match template_id.trim().to_ascii_lowercase().as_str() {
        "creative" => &CREATIVE,
        "minimal" => &MINIMAL,
        _ => &PROFESSIONAL,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
