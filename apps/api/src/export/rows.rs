//! Row flattening — one spreadsheet row per resume, nested lists joined into
//! display strings. Absent optionals become empty cells.

use serde::Serialize;

use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord};

/// A fully flattened resume, ready for the spreadsheet writer.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub education: String,
    pub experience: String,
    pub projects: String,
    pub skills: String,
    pub certifications: String,
    pub file_url: String,
}

impl ResumeRow {
    pub const HEADERS: [&'static str; 10] = [
        "Name",
        "Email",
        "Phone",
        "Location",
        "Education",
        "Experience",
        "Projects",
        "Skills",
        "Certifications",
        "Resume URL",
    ];

    /// Cells in header order.
    pub fn cells(&self) -> [&str; 10] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.location,
            &self.education,
            &self.experience,
            &self.projects,
            &self.skills,
            &self.certifications,
            &self.file_url,
        ]
    }
}

pub fn flatten_record(record: &ResumeRecord) -> ResumeRow {
    ResumeRow {
        name: record.name.clone(),
        email: record.email.clone(),
        phone: record.phone.clone().unwrap_or_default(),
        location: record.location.clone().unwrap_or_default(),
        education: join_display(&record.education, education_display),
        experience: join_display(&record.experience, experience_display),
        projects: join_display(&record.projects, project_display),
        skills: record.skills.join(", "),
        certifications: record.certifications.join(", "),
        file_url: record.file_url.clone().unwrap_or_default(),
    }
}

fn join_display<T>(entries: &[T], display: fn(&T) -> String) -> String {
    entries.iter().map(display).collect::<Vec<_>>().join("; ")
}

fn education_display(entry: &EducationEntry) -> String {
    let mut out = entry.degree.clone();
    if !entry.institution.is_empty() {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(&entry.institution);
    }
    let detail: Vec<String> = [
        entry.year.clone(),
        entry.gpa.as_ref().map(|g| format!("GPA {g}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !detail.is_empty() {
        out.push_str(&format!(" ({})", detail.join(", ")));
    }
    out
}

fn experience_display(entry: &ExperienceEntry) -> String {
    let mut out = entry.title.clone();
    if !entry.company.is_empty() {
        if !out.is_empty() {
            out.push_str(" at ");
        }
        out.push_str(&entry.company);
    }
    if let Some(duration) = entry.duration.as_deref() {
        out.push_str(&format!(" ({duration})"));
    }
    out
}

fn project_display(entry: &ProjectEntry) -> String {
    let mut out = entry.name.clone();
    if !entry.technologies.is_empty() {
        out.push_str(&format!(" [{}]", entry.technologies.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_lists_join_to_display_strings() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "name": "Ann Lee",
            "email": "a@x.com",
            "education": [
                { "degree": "B.S. CS", "institution": "UT", "year": "2019", "gpa": "3.8" },
                { "degree": "M.S. CS", "institution": "MIT" }
            ],
            "experience": [
                { "title": "Engineer", "company": "Acme", "duration": "2019-2022" },
                { "title": "Senior Engineer", "company": "Initech" }
            ],
            "projects": [{ "name": "etl", "technologies": ["Go", "SQL"] }],
            "skills": ["Go", "SQL"],
            "certifications": ["AWS SAA", "CKA"]
        }))
        .unwrap();

        let row = flatten_record(&record);
        assert_eq!(
            row.education,
            "B.S. CS, UT (2019, GPA 3.8); M.S. CS, MIT"
        );
        assert_eq!(
            row.experience,
            "Engineer at Acme (2019-2022); Senior Engineer at Initech"
        );
        assert_eq!(row.projects, "etl [Go, SQL]");
        assert_eq!(row.skills, "Go, SQL");
        assert_eq!(row.certifications, "AWS SAA, CKA");
    }

    #[test]
    fn test_absent_optionals_become_empty_cells() {
        let record: ResumeRecord =
            serde_json::from_value(json!({ "name": "Bo Chen" })).unwrap();
        let row = flatten_record(&record);

        assert_eq!(row.phone, "");
        assert_eq!(row.location, "");
        assert_eq!(row.education, "");
        assert_eq!(row.experience, "");
        assert_eq!(row.file_url, "");
    }

    #[test]
    fn test_cells_align_with_headers() {
        let record: ResumeRecord =
            serde_json::from_value(json!({ "name": "Cara Diaz", "email": "cd@z.com" })).unwrap();
        let row = flatten_record(&record);
        let cells = row.cells();

        assert_eq!(cells.len(), ResumeRow::HEADERS.len());
        assert_eq!(cells[0], "Cara Diaz");
        assert_eq!(cells[1], "cd@z.com");
    }
}
