#![allow(dead_code)]

use chrono::Utc;
use kazike::db::Database;
use kazike::models::{
    CandidateProfile, Job, JobPreferences, JobStatus, JobType, SalaryRange,
};
use tempfile::TempDir;

/// Initialized database in a fresh temp dir. Keep the `TempDir` alive for
/// as long as the database is used.
pub fn temp_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("temp dir");
    let db = Database::open(&dir.path().join("kazike.db")).expect("open db");
    db.init().expect("init db");
    (dir, db)
}

pub fn reopen(dir: &TempDir) -> Database {
    Database::open(&dir.path().join("kazike.db")).expect("reopen db")
}

/// Builder for jobs to keep fixtures short
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            job: Job {
                id: id.to_string(),
                title: "Software Developer".to_string(),
                company: "Twiga Foods".to_string(),
                location: "Nairobi, Kenya".to_string(),
                job_type: JobType::FullTime,
                salary: "KSh 80K - 120K".to_string(),
                description: String::new(),
                requirements: vec![],
                posted_at: Utc::now(),
                applicants: 0,
                views: 0,
                status: JobStatus::Active,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.job.title = title.to_string();
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.job.company = company.to_string();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.job.location = location.to_string();
        self
    }

    pub fn job_type(mut self, job_type: JobType) -> Self {
        self.job.job_type = job_type;
        self
    }

    pub fn salary(mut self, salary: &str) -> Self {
        self.job.salary = salary.to_string();
        self
    }

    pub fn requirements(mut self, reqs: &[&str]) -> Self {
        self.job.requirements = reqs.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}

pub fn profile(skills: &[&str]) -> CandidateProfile {
    CandidateProfile {
        full_name: "Wanjiru Mwangi".to_string(),
        email: "wanjiru@example.com".to_string(),
        location: "Nairobi, Kenya".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        preferences: JobPreferences {
            job_types: vec![JobType::FullTime, JobType::Contract],
            salary_range: SalaryRange {
                min: 80_000,
                max: 150_000,
            },
            locations: vec!["Nairobi".to_string(), "Remote".to_string()],
            remote_work: true,
            industries: vec!["Technology".to_string()],
        },
        ..Default::default()
    }
}
