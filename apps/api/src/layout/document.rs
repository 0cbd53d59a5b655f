//! Rendered document tree.
#![allow(dead_code)]
//!
//! The owned output of a render call: template identity, the resolved layout
//! parameters, and the assembled header/sidebar/body content. Serializes to
//! the camelCase JSON the HTTP layer returns.

use serde::{Deserialize, Serialize};

use crate::layout::templates::SectionKind;

/// Fully resolved layout parameters for one render.
///
/// Spacings already include the density band multiplier and the vertical
/// distribution factor; the deltas apply on top of each text run's base
/// style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParameters {
    pub section_spacing: f32,
    pub item_spacing: f32,
    pub bullet_spacing: f32,
    pub font_size_delta: f32,
    pub line_height_delta: f32,
    pub vertical_distribution_factor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBlock {
    pub full_name: String,
    /// Professional headline, present only when non-blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Non-blank contact items in display order.
    pub contact: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "items")]
pub enum SectionBody {
    Experience(Vec<ExperienceItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<String>),
    Languages(Vec<LanguageItem>),
    Custom(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub location: String,
    pub date_range: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageItem {
    pub language: String,
    pub proficiency: String,
}

/// The complete output of one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub template: String,
    pub density: f32,
    pub parameters: LayoutParameters,
    pub header: HeaderBlock,
    /// Present only for two-column templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Vec<Section>>,
    pub body: Vec<Section>,
}

impl RenderedDocument {
    /// Section kinds in body order, a convenience for assertions and clients.
    pub fn body_kinds(&self) -> Vec<SectionKind> {
        self.body.iter().map(|s| s.kind).collect()
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        let in_body = self.body.iter().any(|s| s.kind == kind);
        let in_sidebar = self
            .sidebar
            .as_ref()
            .is_some_and(|sections| sections.iter().any(|s| s.kind == kind));
        in_body || in_sidebar
    }
}
