use chrono::Utc;
use tracing::{info, warn};

use crate::db::{Database, JOBS_KEY};
use crate::error::{KazikeError, Result};
use crate::models::{Job, JobStatus, JobUpdate, NewJob, generate_id};

/// Employer-side job postings.
pub struct JobCatalog<'a> {
    db: &'a Database,
    jobs: Vec<Job>,
}

impl<'a> JobCatalog<'a> {
    pub fn load(db: &'a Database) -> Result<Self> {
        let jobs = db.get_json(JOBS_KEY)?.unwrap_or_default();
        Ok(Self { db, jobs })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn list(&self, status: Option<JobStatus>) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|j| status.is_none_or(|s| j.status == s))
            .collect()
    }

    /// Postings a candidate can still apply to.
    pub fn active(&self) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|j| j.status == JobStatus::Active)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn create(&mut self, new_job: NewJob) -> Result<&Job> {
        let job = build_job(new_job);
        info!(job_id = %job.id, title = %job.title, "job created");
        self.jobs.push(job);
        self.persist()?;
        Ok(&self.jobs[self.jobs.len() - 1])
    }

    /// Adds every posting in `new_jobs`. Returns how many were added.
    pub fn import(&mut self, new_jobs: Vec<NewJob>) -> Result<usize> {
        let mut added = 0;
        for new_job in new_jobs {
            if new_job.title.trim().is_empty() {
                warn!("Skipping job without a title from {}", new_job.company);
                continue;
            }
            self.jobs.push(build_job(new_job));
            added += 1;
        }
        self.persist()?;
        info!(added, "jobs imported");
        Ok(added)
    }

    pub fn update(&mut self, id: &str, updates: JobUpdate) -> Result<&Job> {
        let idx = self.position(id)?;
        let job = &mut self.jobs[idx];

        if let Some(v) = updates.title {
            job.title = v;
        }
        if let Some(v) = updates.location {
            job.location = v;
        }
        if let Some(v) = updates.salary {
            job.salary = v;
        }
        if let Some(v) = updates.description {
            job.description = v;
        }
        if let Some(v) = updates.requirements {
            job.requirements = v;
        }
        if let Some(v) = updates.status {
            job.status = v;
        }

        self.persist()?;
        Ok(&self.jobs[idx])
    }

    pub fn set_status(&mut self, id: &str, status: JobStatus) -> Result<&Job> {
        self.update(
            id,
            JobUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    /// Counts an application against the posting.
    pub fn record_applicant(&mut self, id: &str) -> Result<()> {
        let idx = self.position(id)?;
        self.jobs[idx].applicants += 1;
        self.persist()
    }

    /// Counts one look at the posting's details.
    pub fn record_view(&mut self, id: &str) -> Result<&Job> {
        let idx = self.position(id)?;
        self.jobs[idx].views += 1;
        self.persist()?;
        Ok(&self.jobs[idx])
    }

    pub fn delete(&mut self, id: &str) -> Result<Job> {
        let idx = self.position(id)?;
        let job = self.jobs.remove(idx);
        self.persist()?;
        info!(job_id = %job.id, "job deleted");
        Ok(job)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| KazikeError::JobNotFound(id.to_string()))
    }

    fn persist(&self) -> Result<()> {
        self.db.put_json(JOBS_KEY, &self.jobs)
    }
}

fn build_job(new_job: NewJob) -> Job {
    Job {
        id: generate_id("job"),
        title: new_job.title,
        company: new_job.company,
        location: new_job.location,
        job_type: new_job.job_type,
        salary: new_job.salary,
        description: new_job.description,
        requirements: new_job.requirements,
        posted_at: Utc::now(),
        applicants: 0,
        views: 0,
        status: new_job.status,
    }
}
