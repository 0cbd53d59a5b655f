// Adaptive layout engine: style registry, density estimation, compositor.
// Pure and synchronous end to end; handlers call render() directly.

pub mod compositor;
pub mod density;
pub mod document;
pub mod handlers;
pub mod templates;

// Re-export the public API consumed by other modules (handlers, tests).
pub use compositor::{band_for_density, compose, DensityBand};
pub use density::estimate_density;
pub use document::RenderedDocument;
pub use templates::{get_style_set, TemplateStyleSet};

use crate::models::resume::ResumeRecord;

/// Renders a record under a template: registry lookup, density estimation,
/// composition. Unknown template ids fall back to `professional`.
pub fn render(record: &ResumeRecord, template_id: &str) -> RenderedDocument {
    let styles = get_style_set(template_id);
    let density = estimate_density(record);
    compose(record, styles, density)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::templates::SectionKind;
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo, Proficiency,
    };

    fn make_sparse_record() -> ResumeRecord {
        // 1 one-line experience + 3 skills + 1 language
        ResumeRecord {
            personal_info: PersonalInfo {
                full_name: "Grace Hopper".into(),
                email: "grace@example.com".into(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                title: "Rear Admiral".into(),
                company: "US Navy".into(),
                start_date: "1943".into(),
                description: "Invented the compiler".into(),
                ..Default::default()
            }],
            skills: vec!["COBOL".into(), "Compilers".into(), "Debugging".into()],
            languages: vec![LanguageEntry {
                language: "English".into(),
                proficiency: Proficiency::Native,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let record = make_sparse_record();
        let first = serde_json::to_string(&render(&record, "creative")).unwrap();
        let second = serde_json::to_string(&render(&record, "creative")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_template_renders_as_professional() {
        let record = make_sparse_record();
        let fallback = render(&record, "does-not-exist");
        let professional = render(&record, "professional");
        assert_eq!(fallback, professional);
    }

    #[test]
    fn test_sparse_record_end_to_end() {
        let doc = render(&make_sparse_record(), "professional");

        assert!((doc.density - 2.4).abs() < 1e-6);
        assert_eq!(band_for_density(doc.density), DensityBand::Low);

        // low band + sparse distribution: 15.0 * 1.40 * 1.15 * 1.10
        let expected = 15.0 * 1.40 * 1.15 * 1.10;
        assert!((doc.parameters.section_spacing - expected).abs() < 1e-3);

        assert!(doc.has_section(SectionKind::Experience));
        assert!(doc.has_section(SectionKind::Skills));
        assert!(doc.has_section(SectionKind::Languages));
        assert!(!doc.has_section(SectionKind::Education));
        assert!(!doc.has_section(SectionKind::Custom));
    }

    #[test]
    fn test_engineered_densities_select_documented_bands() {
        // education entries weigh 1.0 each, so the count is the density
        let cases = [
            (9, DensityBand::Low),
            (10, DensityBand::MediumLow),
            (15, DensityBand::Neutral),
            (20, DensityBand::Neutral),
            (21, DensityBand::High),
        ];
        for (count, band) in cases {
            let record = ResumeRecord {
                education: (0..count)
                    .map(|i| EducationEntry {
                        degree: format!("Degree {i}"),
                        school: "School".into(),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            };
            let density = estimate_density(&record);
            assert!((density - count as f32).abs() < 1e-6);
            assert_eq!(band_for_density(density), band, "count {count}");
        }
    }

    #[test]
    fn test_neutral_record_keeps_base_spacing() {
        // 10 experiences with two extra description lines each: 10 * 2.0 = 20.0
        let mut record = make_sparse_record();
        record.skills.clear();
        record.languages.clear();
        record.experience = (0..10)
            .map(|i| ExperienceEntry {
                title: format!("Role {i}"),
                company: "Acme".into(),
                description: "one\ntwo\nthree".into(),
                ..Default::default()
            })
            .collect();
        let doc = render(&record, "minimal");
        assert!((doc.density - 20.0).abs() < 1e-6);
        assert_eq!(band_for_density(doc.density), DensityBand::Neutral);
        // neutral band, no custom (×1.15), but only 1 section present (×1.10)
        let expected = 20.0 * 1.0 * 1.15 * 1.10;
        assert!((doc.parameters.section_spacing - expected).abs() < 1e-3);
    }
}
