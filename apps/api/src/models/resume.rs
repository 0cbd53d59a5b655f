//! Resume content model.
//!
//! This is the wire shape clients POST and the read-only input to the layout
//! engine. Every field defaults so a record with missing keys still
//! deserializes; sparse input degrades to absent sections instead of a 400.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub languages: Vec<LanguageEntry>,
    pub custom_sections: Vec<CustomSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    /// Professional headline, shown as a sub-header by the creative template.
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// Empty string means a current position.
    pub end_date: String,
    pub description: String,
    /// Takes precedence over splitting `description` when non-empty.
    pub bullet_points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageEntry {
    pub language: String,
    pub proficiency: Proficiency,
}

/// Closed proficiency scale. `Conversational` and `Basic` arrive from older
/// clients and map onto the nearest canonical level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Native,
    Fluent,
    #[serde(alias = "Conversational")]
    Advanced,
    Intermediate,
    #[serde(alias = "Basic")]
    Elementary,
    #[default]
    Beginner,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Elementary => "Elementary",
            Proficiency::Beginner => "Beginner",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSection {
    pub title: String,
    pub description: String,
}

// ─── Presence predicates ────────────────────────────────────────────────────
// Shared by the density estimator and the compositor so an entry that is
// invisible in the output also contributes nothing to the density score.

fn non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

impl ExperienceEntry {
    pub fn has_content(&self) -> bool {
        non_blank(&self.title) || non_blank(&self.company)
    }

    /// Bullet lines for this entry: the dedicated list when it has any
    /// non-blank item, otherwise the line-break-separated description.
    pub fn bullet_lines(&self) -> Vec<String> {
        let dedicated: Vec<String> = self
            .bullet_points
            .iter()
            .map(|b| b.trim())
            .filter(|b| !b.is_empty())
            .map(str::to_owned)
            .collect();
        if !dedicated.is_empty() {
            return dedicated;
        }
        self.description
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl EducationEntry {
    pub fn has_content(&self) -> bool {
        non_blank(&self.degree) || non_blank(&self.school)
    }
}

impl LanguageEntry {
    pub fn has_content(&self) -> bool {
        non_blank(&self.language)
    }
}

impl CustomSection {
    pub fn has_content(&self) -> bool {
        non_blank(&self.title) || non_blank(&self.description)
    }
}

impl ResumeRecord {
    pub fn present_experience(&self) -> impl Iterator<Item = &ExperienceEntry> {
        self.experience.iter().filter(|e| e.has_content())
    }

    pub fn present_education(&self) -> impl Iterator<Item = &EducationEntry> {
        self.education.iter().filter(|e| e.has_content())
    }

    pub fn present_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn present_languages(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.languages.iter().filter(|l| l.has_content())
    }

    pub fn present_custom_sections(&self) -> impl Iterator<Item = &CustomSection> {
        self.custom_sections.iter().filter(|c| c.has_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default() {
        let record: ResumeRecord = serde_json::from_str(r#"{"skills": ["Rust"]}"#).unwrap();
        assert_eq!(record.skills, vec!["Rust"]);
        assert!(record.experience.is_empty());
        assert_eq!(record.personal_info.full_name, "");
    }

    #[test]
    fn test_empty_object_deserializes() {
        let record: ResumeRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ResumeRecord::default());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = r#"{
            "personalInfo": {"fullName": "Ada Lovelace", "email": "ada@example.com"},
            "experience": [{"title": "Engineer", "startDate": "2020", "endDate": "", "bulletPoints": ["Shipped it"]}],
            "education": [{"degree": "BSc", "graduationDate": "2019"}],
            "customSections": [{"title": "Awards"}]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.personal_info.full_name, "Ada Lovelace");
        assert_eq!(record.experience[0].start_date, "2020");
        assert_eq!(record.experience[0].bullet_points, vec!["Shipped it"]);
        assert_eq!(record.education[0].graduation_date, "2019");
        assert_eq!(record.custom_sections[0].title, "Awards");

        let out = serde_json::to_value(&record).unwrap();
        assert!(out["personalInfo"]["fullName"].is_string());
        assert!(out["experience"][0]["bulletPoints"].is_array());
    }

    #[test]
    fn test_experience_presence_requires_title_or_company() {
        let mut entry = ExperienceEntry::default();
        assert!(!entry.has_content());
        entry.location = "Berlin".into();
        assert!(!entry.has_content());
        entry.company = "Acme".into();
        assert!(entry.has_content());
    }

    #[test]
    fn test_bullet_points_take_precedence_over_description() {
        let entry = ExperienceEntry {
            description: "line one\nline two".into(),
            bullet_points: vec!["only bullet".into(), "  ".into()],
            ..Default::default()
        };
        assert_eq!(entry.bullet_lines(), vec!["only bullet"]);
    }

    #[test]
    fn test_description_splits_on_line_breaks() {
        let entry = ExperienceEntry {
            description: "first\n\n  second  \nthird".into(),
            ..Default::default()
        };
        assert_eq!(entry.bullet_lines(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_whitespace_skills_not_present() {
        let record = ResumeRecord {
            skills: vec!["  ".into(), "Rust".into(), "".into()],
            ..Default::default()
        };
        let present: Vec<&str> = record.present_skills().collect();
        assert_eq!(present, vec!["Rust"]);
    }

    #[test]
    fn test_proficiency_aliases() {
        let conv: Proficiency = serde_json::from_str(r#""Conversational""#).unwrap();
        assert_eq!(conv, Proficiency::Advanced);
        let basic: Proficiency = serde_json::from_str(r#""Basic""#).unwrap();
        assert_eq!(basic, Proficiency::Elementary);
    }

    #[test]
    fn test_blank_language_not_present() {
        let record = ResumeRecord {
            languages: vec![
                LanguageEntry {
                    language: " ".into(),
                    proficiency: Proficiency::Native,
                },
                LanguageEntry {
                    language: "Spanish".into(),
                    proficiency: Proficiency::Fluent,
                },
            ],
            ..Default::default()
        };
        assert_eq!(record.present_languages().count(), 1);
    }
}
