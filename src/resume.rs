//! Typed resume record
//!
//! The record mirrors the YAML document field for field (camelCase keys).
//! Required entry fields are plain Rust fields, so a malformed entry is
//! rejected when the record is deserialized instead of being rendered as a
//! partial fragment.

use serde::{Deserialize, Deserializer};

use crate::sections::TitledSection;
use crate::style::StyleOptions;

/// Complete resume document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub contact: ContactInfo,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub skills: Option<Vec<SkillCategory>>,
    #[serde(default)]
    pub experience: Option<Vec<Experience>>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub certifications: Option<Vec<Certification>>,
    #[serde(default)]
    pub section_titles: Option<SectionTitles>,
    /// Template identifier used when the caller does not pick one
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub style: Option<StyleOptions>,
}

/// Header block. `full_name` and `email` are gated by the loader; the other
/// fields are rendered only when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "scalar_text")]
    pub full_name: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub city: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Summary {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    #[serde(deserialize_with = "scalar_text")]
    pub period: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Live demo URL
    #[serde(default)]
    pub link: Option<String>,
    /// Source repository URL
    #[serde(default)]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(deserialize_with = "scalar_text")]
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub year: Option<String>,
}

/// Any plain YAML scalar, so `year: 2020` and `phone: 5551234` read as text
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_text)
}

fn optional_scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer).map(|value| value.map(Scalar::into_text))
}

/// A per-section heading override.
///
/// `Hidden` comes from an empty string or an explicit `null` and suppresses
/// the heading; it is distinct from the field being absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOverride {
    Hidden,
    Text(String),
}

impl TitleOverride {
    fn from_raw(raw: Option<String>) -> Self {
        match raw {
            Some(text) if !text.is_empty() => TitleOverride::Text(text),
            _ => TitleOverride::Hidden,
        }
    }
}

/// Only called when the key is present, so `null` maps to `Some(Hidden)`
/// while a missing key stays `None` via `#[serde(default)]`.
fn deserialize_title<'de, D>(deserializer: D) -> Result<Option<TitleOverride>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(Some(TitleOverride::from_raw(raw)))
}

/// Heading overrides for the six titled sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SectionTitles {
    #[serde(default, deserialize_with = "deserialize_title")]
    pub summary: Option<TitleOverride>,
    #[serde(default, deserialize_with = "deserialize_title")]
    pub skills: Option<TitleOverride>,
    #[serde(default, deserialize_with = "deserialize_title")]
    pub experience: Option<TitleOverride>,
    #[serde(default, deserialize_with = "deserialize_title")]
    pub projects: Option<TitleOverride>,
    #[serde(default, deserialize_with = "deserialize_title")]
    pub education: Option<TitleOverride>,
    #[serde(default, deserialize_with = "deserialize_title")]
    pub certifications: Option<TitleOverride>,
}

impl SectionTitles {
    /// Get the override for a section, if one was supplied
    pub fn get(&self, section: TitledSection) -> Option<&TitleOverride> {
        match section {
            TitledSection::Summary => self.summary.as_ref(),
            TitledSection::Skills => self.skills.as_ref(),
            TitledSection::Experience => self.experience.as_ref(),
            TitledSection::Projects => self.projects.as_ref(),
            TitledSection::Education => self.education.as_ref(),
            TitledSection::Certifications => self.certifications.as_ref(),
        }
    }

    /// Set the override for a section
    pub fn set(&mut self, section: TitledSection, title: TitleOverride) {
        let slot = match section {
            TitledSection::Summary => &mut self.summary,
            TitledSection::Skills => &mut self.skills,
            TitledSection::Experience => &mut self.experience,
            TitledSection::Projects => &mut self.projects,
            TitledSection::Education => &mut self.education,
            TitledSection::Certifications => &mut self.certifications,
        };
        *slot = Some(title);
    }
}

/// Borrow a list section's entries, treating an absent list and an empty
/// list the same way.
pub fn non_empty<T>(items: &Option<Vec<T>>) -> Option<&[T]> {
    match items.as_deref() {
        Some(items) if !items.is_empty() => Some(items),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_override_tristate() {
        let titles: SectionTitles = serde_yaml::from_str(
            r#"
summary: "About Me"
skills: ""
experience: ~
"#,
        )
        .unwrap();

        assert_eq!(
            titles.summary,
            Some(TitleOverride::Text("About Me".to_string()))
        );
        assert_eq!(titles.skills, Some(TitleOverride::Hidden));
        assert_eq!(titles.experience, Some(TitleOverride::Hidden));
        assert_eq!(titles.projects, None);
    }

    #[test]
    fn test_non_empty_treats_none_and_empty_alike() {
        let absent: Option<Vec<Education>> = None;
        let empty: Option<Vec<Education>> = Some(vec![]);
        assert!(non_empty(&absent).is_none());
        assert!(non_empty(&empty).is_none());
    }

    #[test]
    fn test_project_requires_name() {
        let result: Result<Project, _> = serde_yaml::from_str(
            r#"
description: Missing a name
technologies: [Rust]
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("name"), "unexpected error: {}", err);
    }

    #[test]
    fn test_numeric_scalars_read_as_text() {
        let education: Education = serde_yaml::from_str(
            "degree: BSc\ninstitution: Uni\nyear: 2020\n",
        )
        .unwrap();
        assert_eq!(education.year, "2020");

        let certification: Certification =
            serde_yaml::from_str("name: CKA\nissuer: CNCF\nyear: 2021\n").unwrap();
        assert_eq!(certification.year.as_deref(), Some("2021"));

        let certification: Certification =
            serde_yaml::from_str("name: CKA\nissuer: CNCF\nyear: ~\n").unwrap();
        assert_eq!(certification.year, None);

        let contact: ContactInfo =
            serde_yaml::from_str("fullName: Ada\nemail: a@b.c\nphone: 5551234\n").unwrap();
        assert_eq!(contact.phone, "5551234");
    }

    #[test]
    fn test_section_titles_set_and_get() {
        let mut titles = SectionTitles::default();
        titles.set(TitledSection::Education, TitleOverride::Text("Studies".into()));
        assert_eq!(
            titles.get(TitledSection::Education),
            Some(&TitleOverride::Text("Studies".into()))
        );
        assert_eq!(titles.get(TitledSection::Skills), None);
    }
}
