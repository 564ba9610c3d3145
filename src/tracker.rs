use chrono::Utc;
use tracing::{info, warn};

use crate::db::{APPLICATIONS_KEY, Database, SAVED_JOBS_KEY};
use crate::error::{KazikeError, Result};
use crate::models::{Application, ApplicationStatus, Job, generate_id};

/// Applications and saved jobs for the signed-in candidate.
///
/// Every mutation updates the in-memory lists first and then rewrites the
/// whole list in storage. A failed write is logged and the in-memory state
/// is kept, so the caller sees the action succeed.
pub struct ApplicationTracker<'a> {
    db: &'a Database,
    applications: Vec<Application>,
    saved_jobs: Vec<String>,
}

impl<'a> ApplicationTracker<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            applications: Vec::new(),
            saved_jobs: Vec::new(),
        }
    }

    /// Tracker with both lists read from storage.
    pub fn load(db: &'a Database) -> Self {
        let mut tracker = Self::new(db);
        tracker.reload();
        tracker
    }

    pub fn reload(&mut self) {
        self.applications = match self.db.get_json(APPLICATIONS_KEY) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to load applications: {}", e);
                Vec::new()
            }
        };
        self.saved_jobs = match self.db.get_json(SAVED_JOBS_KEY) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to load saved jobs: {}", e);
                Vec::new()
            }
        };
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn saved_jobs(&self) -> &[String] {
        &self.saved_jobs
    }

    pub fn has_applied(&self, job_id: &str) -> bool {
        self.applications.iter().any(|app| app.job_id == job_id)
    }

    pub fn is_saved(&self, job_id: &str) -> bool {
        self.saved_jobs.iter().any(|id| id == job_id)
    }

    /// Apply to `job_id`, which must be one of `jobs`.
    pub fn apply(&mut self, jobs: &[Job], job_id: &str) -> Result<&Application> {
        if self.has_applied(job_id) {
            return Err(KazikeError::DuplicateApplication(job_id.to_string()));
        }

        let job = jobs
            .iter()
            .find(|j| j.id == job_id)
            .ok_or_else(|| KazikeError::JobNotFound(job_id.to_string()))?;

        let application = Application {
            id: generate_id("app"),
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
            applied_at: Utc::now(),
            status: ApplicationStatus::Pending,
            notes: None,
        };
        info!(job_id, application_id = %application.id, "applied to job");

        self.applications.push(application);
        self.persist_applications();

        let idx = self.applications.len() - 1;
        Ok(&self.applications[idx])
    }

    /// Returns false when the job was already saved.
    pub fn save(&mut self, job_id: &str) -> bool {
        if self.is_saved(job_id) {
            return false;
        }
        self.saved_jobs.push(job_id.to_string());
        self.persist_saved_jobs();
        true
    }

    /// Returns false when the job was not saved.
    pub fn unsave(&mut self, job_id: &str) -> bool {
        let before = self.saved_jobs.len();
        self.saved_jobs.retain(|id| id != job_id);
        let removed = self.saved_jobs.len() != before;
        // Rewrites the list even when nothing changed
        self.persist_saved_jobs();
        removed
    }

    /// Record an external review decision on an application.
    pub fn review(
        &mut self,
        application_id: &str,
        status: ApplicationStatus,
        notes: Option<String>,
    ) -> Result<&Application> {
        let idx = self
            .applications
            .iter()
            .position(|app| app.id == application_id)
            .ok_or_else(|| KazikeError::ApplicationNotFound(application_id.to_string()))?;

        let current = self.applications[idx].status;
        if !current.can_transition_to(status) {
            return Err(KazikeError::InvalidTransition {
                from: current,
                to: status,
            });
        }

        let app = &mut self.applications[idx];
        app.status = status;
        if notes.is_some() {
            app.notes = notes;
        }
        info!(application_id, from = %current, to = %status, "application reviewed");

        self.persist_applications();
        Ok(&self.applications[idx])
    }

    fn persist_applications(&self) {
        if let Err(e) = self.db.put_json(APPLICATIONS_KEY, &self.applications) {
            warn!("Failed to save applications: {}", e);
        }
    }

    fn persist_saved_jobs(&self) {
        if let Err(e) = self.db.put_json(SAVED_JOBS_KEY, &self.saved_jobs) {
            warn!("Failed to save saved jobs: {}", e);
        }
    }
}
