use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::models::{CandidateProfile, Job, JobMatch};

pub const DEFAULT_MATCH_LIMIT: usize = 20;

const SKILL_POINTS: f64 = 40.0;
const JOB_TYPE_POINTS: f64 = 20.0;
const LOCATION_POINTS: f64 = 15.0;
const SALARY_POINTS: f64 = 15.0;
const TOP_COMPANY_POINTS: f64 = 10.0;

const TOP_COMPANIES: [&str; 4] = ["Safaricom", "Equity Bank", "KCB", "Co-operative Bank"];

static SALARY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid salary regex"));

/// Score a single job against a profile. Returns a value in `0..=100` and the
/// reasons that contributed to it, in bucket order.
pub fn score(job: &Job, profile: &CandidateProfile) -> (u8, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    let matching_skills: Vec<&String> = job
        .requirements
        .iter()
        .filter(|req| skill_matches(req, &profile.skills))
        .collect();

    // Only reachable with a non-empty requirement list
    if !matching_skills.is_empty() {
        score += matching_skills.len() as f64 / job.requirements.len() as f64 * SKILL_POINTS;
        let names: Vec<&str> = matching_skills.iter().map(|s| s.as_str()).collect();
        reasons.push(format!(
            "{} matching skills: {}",
            matching_skills.len(),
            names.join(", ")
        ));
    }

    if profile.preferences.job_types.contains(&job.job_type) {
        score += JOB_TYPE_POINTS;
        reasons.push(format!("Matches preferred job type: {}", job.job_type));
    }

    let location = job.location.to_lowercase();
    if profile
        .preferences
        .locations
        .iter()
        .any(|loc| location.contains(&loc.to_lowercase()))
    {
        score += LOCATION_POINTS;
        reasons.push("Matches location preference".to_string());
    }

    if let Some((min, max)) = parse_salary_range(&job.salary) {
        let wanted = profile.preferences.salary_range;
        if max >= wanted.min && min <= wanted.max {
            score += SALARY_POINTS;
            reasons.push("Salary range matches expectations".to_string());
        }
    }

    if TOP_COMPANIES.iter().any(|c| job.company.contains(c)) {
        score += TOP_COMPANY_POINTS;
        reasons.push("Top-tier company".to_string());
    }

    let rounded = score.round().clamp(0.0, 100.0) as u8;
    (rounded, reasons)
}

pub fn to_match(job: &Job, profile: &CandidateProfile) -> JobMatch {
    let (match_score, match_reasons) = score(job, profile);
    JobMatch {
        job: job.clone(),
        match_score,
        match_reasons,
    }
}

/// Score every job, best first. Equal scores keep catalog order.
pub fn rank(jobs: &[Job], profile: &CandidateProfile, limit: usize) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = jobs.iter().map(|job| to_match(job, profile)).collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(limit);

    debug!(
        catalog = jobs.len(),
        returned = matches.len(),
        top = matches.first().map(|m| m.match_score),
        "recomputed job matches"
    );
    matches
}

fn skill_matches(requirement: &str, skills: &[String]) -> bool {
    let req = requirement.to_lowercase();
    skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        skill.contains(&req) || req.contains(&skill)
    })
}

/// Read the first two digit runs of a free-text salary as a range in
/// thousands, so "KSh 80K - 120K" reads as 80000..120000. Separators split
/// runs: "KSh 150,000 - 200,000" reads as 150000..0 and never overlaps a
/// preference. Returns `None` when the text holds fewer than two numbers.
pub fn parse_salary_range(text: &str) -> Option<(u64, u64)> {
    let mut values = SALARY_NUMBER
        .find_iter(text)
        .map(|m| m.as_str().parse::<u64>().map_or(u64::MAX, |n| n.saturating_mul(1000)));

    let min = values.next()?;
    let max = values.next()?;
    Some((min, max))
}
