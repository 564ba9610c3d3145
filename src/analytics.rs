use serde::Serialize;

use crate::models::{Interaction, InteractionKind, Job, JobStatus};

const TOP_JOBS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPerformance {
    pub job_id: String,
    pub title: String,
    pub applications: u32,
    pub views: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEngagement {
    pub profile_views: usize,
    pub contacted: usize,
    pub interviewed: usize,
    pub hired: usize,
}

/// Employer dashboard figures, recomputed from the catalog and the
/// interaction log on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerAnalytics {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub total_applications: u64,
    pub total_views: u64,
    pub average_applications_per_job: u64,
    pub top_performing_jobs: Vec<JobPerformance>,
    pub candidate_engagement: CandidateEngagement,
}

pub fn summarize(jobs: &[Job], interactions: &[Interaction]) -> EmployerAnalytics {
    let total_applications: u64 = jobs.iter().map(|j| u64::from(j.applicants)).sum();
    let total_views: u64 = jobs.iter().map(|j| u64::from(j.views)).sum();

    let average_applications_per_job = if jobs.is_empty() {
        0
    } else {
        (total_applications as f64 / jobs.len() as f64).round() as u64
    };

    // Ties keep catalog order
    let mut ranked: Vec<&Job> = jobs.iter().collect();
    ranked.sort_by_key(|j| std::cmp::Reverse(u64::from(j.applicants) + u64::from(j.views)));
    let top_performing_jobs = ranked
        .into_iter()
        .take(TOP_JOBS)
        .map(|j| JobPerformance {
            job_id: j.id.clone(),
            title: j.title.clone(),
            applications: j.applicants,
            views: j.views,
        })
        .collect();

    let count = |kind: InteractionKind| interactions.iter().filter(|i| i.kind == kind).count();

    EmployerAnalytics {
        total_jobs: jobs.len(),
        active_jobs: jobs.iter().filter(|j| j.status == JobStatus::Active).count(),
        total_applications,
        total_views,
        average_applications_per_job,
        top_performing_jobs,
        candidate_engagement: CandidateEngagement {
            profile_views: count(InteractionKind::Viewed),
            contacted: count(InteractionKind::Contacted),
            interviewed: count(InteractionKind::Interviewed),
            hired: count(InteractionKind::Hired),
        },
    }
}
