//! Resume record model — the shape returned by the upstream resumes endpoint.
//!
//! Every field is tolerant of absence: upstream records are scraped from
//! heterogeneous source files, so missing text fields deserialize to
//! `None`/empty rather than failing the whole collection. A record missing a
//! field simply never matches a criterion against that field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Link to the original resume file.
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_record_deserializes() {
        // Only a name — every other field absent.
        let record: ResumeRecord =
            serde_json::from_value(json!({ "name": "Ann Lee" })).expect("sparse record");
        assert_eq!(record.name, "Ann Lee");
        assert!(record.location.is_none());
        assert!(record.skills.is_empty());
        assert!(record.experience.is_empty());
    }

    #[test]
    fn test_nested_entries_tolerate_missing_fields() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "name": "Bo Chen",
            "education": [{ "degree": "B.S. CS" }],
            "experience": [{ "title": "Engineer" }],
            "projects": [{ "name": "indexer" }]
        }))
        .expect("partial nested entries");

        assert_eq!(record.education[0].institution, "");
        assert!(record.education[0].year.is_none());
        assert_eq!(record.experience[0].company, "");
        assert!(record.projects[0].technologies.is_empty());
    }

    #[test]
    fn test_full_record_round_trips() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "name": "Ann Lee",
            "email": "a@x.com",
            "phone": "555-0100",
            "location": "Austin",
            "education": [{ "degree": "B.S.", "institution": "UT", "year": "2019", "gpa": "3.8" }],
            "experience": [{ "title": "Engineer", "company": "Acme", "duration": "2019-2022",
                             "responsibilities": ["built pipelines"] }],
            "projects": [{ "name": "etl", "description": "batch loader", "technologies": ["Go"] }],
            "skills": ["Go", "SQL"],
            "certifications": ["AWS SAA"],
            "file_url": "https://files.example.com/ann.pdf"
        }))
        .expect("full record");

        assert_eq!(record.skills, vec!["Go", "SQL"]);
        assert_eq!(record.experience[0].responsibilities.len(), 1);
        assert_eq!(record.file_url.as_deref(), Some("https://files.example.com/ann.pdf"));
    }
}
