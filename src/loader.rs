//! Reading resume documents from YAML

use std::path::Path;

use crate::error::LoadError;
use crate::resume::Resume;

/// Parse and validate a resume from YAML text.
///
/// The document must carry a `contact` block with a non-empty `fullName`
/// and `email`. Keys the record does not know about are ignored.
pub fn parse_resume(yaml: &str) -> Result<Resume, LoadError> {
    if yaml.trim().is_empty() {
        return Err(LoadError::MissingContact);
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;

    match value.get("contact") {
        None | Some(serde_yaml::Value::Null) => return Err(LoadError::MissingContact),
        Some(_) => {}
    }

    let resume: Resume = serde_yaml::from_value(value)?;
    if resume.contact.full_name.is_empty() || resume.contact.email.is_empty() {
        return Err(LoadError::MissingNameOrEmail);
    }

    Ok(resume)
}

/// Read and validate a resume file
pub fn load_resume(path: &Path) -> Result<Resume, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
        source,
    })?;
    parse_resume(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"
contact:
  fullName: John Doe
  email: john.doe@example.com
  city: San Francisco, CA
  phone: "+1-555-123-4567"
  linkedin: linkedin.com/in/johndoe
  github: github.com/johndoe

summary:
  text: Software engineer with 5 years of experience.

skills:
  - category: Programming Languages
    skills:
      - TypeScript
      - Python

experience:
  - position: Senior Developer
    company: Tech Corp
    period: Jan 2020 - Present
    highlights:
      - Built scalable applications
"#;

    #[test]
    fn test_parse_valid_resume() {
        let resume = parse_resume(VALID).unwrap();
        assert_eq!(resume.contact.full_name, "John Doe");
        assert_eq!(resume.contact.email, "john.doe@example.com");
        assert_eq!(resume.contact.city, "San Francisco, CA");
        assert_eq!(
            resume.summary.unwrap().text,
            "Software engineer with 5 years of experience."
        );
        assert_eq!(resume.skills.unwrap().len(), 1);
        assert_eq!(resume.experience.unwrap().len(), 1);
    }

    #[test]
    fn test_missing_contact() {
        let err = parse_resume("summary:\n  text: Some text\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingContact));
        assert_eq!(err.to_string(), "Contact information is required");

        let err = parse_resume("contact: ~\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingContact));

        let err = parse_resume("").unwrap_err();
        assert!(matches!(err, LoadError::MissingContact));
    }

    #[test]
    fn test_missing_full_name() {
        let err = parse_resume("contact:\n  email: john@example.com\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingNameOrEmail));
    }

    #[test]
    fn test_missing_email() {
        let err = parse_resume("contact:\n  fullName: John Doe\n").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Full name and email are required"));
    }

    #[test]
    fn test_malformed_entry_is_rejected() {
        let yaml = r#"
contact:
  fullName: John Doe
  email: john@example.com
projects:
  - description: No name here
    technologies: [Rust]
"#;
        let err = parse_resume(yaml).unwrap_err();
        assert!(matches!(err, LoadError::Yaml(_)));
        assert!(err.to_string().contains("name"), "{}", err);
    }

    #[test]
    fn test_unquoted_numbers_in_text_fields() {
        let yaml = r#"
contact:
  fullName: John Doe
  email: john@example.com
  phone: 5551234
experience:
  - position: Intern
    company: Tech Corp
    period: 2019
education:
  - degree: BSc Computer Science
    institution: State University
    year: 2020
certifications:
  - name: CKA
    issuer: CNCF
    year: 2022
"#;
        let resume = parse_resume(yaml).unwrap();
        assert_eq!(resume.contact.phone, "5551234");
        assert_eq!(resume.experience.unwrap()[0].period, "2019");
        assert_eq!(resume.education.unwrap()[0].year, "2020");
        assert_eq!(
            resume.certifications.unwrap()[0].year.as_deref(),
            Some("2022")
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();
        let resume = load_resume(file.path()).unwrap();
        assert_eq!(resume.contact.full_name, "John Doe");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = load_resume(&path).unwrap_err();
        match err {
            LoadError::Read { path: reported, .. } => assert!(reported.ends_with("nope.yaml")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
