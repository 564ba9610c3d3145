mod common;

use chrono::Utc;
use kazike::matching::{self, DEFAULT_MATCH_LIMIT};
use kazike::models::{
    CandidateProfile, Job, JobPreferences, JobStatus, JobType, SalaryRange,
};
use kazike::tracker::ApplicationTracker;
use proptest::prelude::*;

const SKILLS: [&str; 10] = [
    "React Native", "Python", "SQL", "Java", "Kotlin", "Excel", "AWS", "Go", "Node.js", "Figma",
];
const PLACES: [&str; 5] = ["Nairobi", "Mombasa", "Kisumu", "Remote", "Eldoret"];
const COMPANIES: [&str; 4] = ["Safaricom PLC", "KCB Group", "Twiga Foods", "Acme Ltd"];

// --- STRATEGIES ---

fn arb_job_type() -> impl Strategy<Value = JobType> {
    prop_oneof![
        Just(JobType::FullTime),
        Just(JobType::PartTime),
        Just(JobType::Contract),
        Just(JobType::Internship),
    ]
}

fn arb_skill() -> impl Strategy<Value = String> {
    prop::sample::select(SKILLS.to_vec()).prop_map(str::to_string)
}

fn arb_salary() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u64..500, 0u64..500).prop_map(|(a, b)| format!("KSh {a}K - {b}K")),
        (0u64..500_000, 0u64..500_000).prop_map(|(a, b)| format!("KSh {a} - {b}")),
        "[a-zA-Z ,.-]{0,20}",
    ]
}

prop_compose! {
    fn arb_job()(
        id in "[a-z0-9]{6}",
        job_type in arb_job_type(),
        requirements in prop::collection::vec(arb_skill(), 0..6),
        location in prop::sample::select(PLACES.to_vec()),
        company in prop::sample::select(COMPANIES.to_vec()),
        salary in arb_salary(),
    ) -> Job {
        Job {
            id: format!("job_{id}"),
            title: "Role".to_string(),
            company: company.to_string(),
            location: format!("{location}, Kenya"),
            job_type,
            salary,
            description: String::new(),
            requirements,
            posted_at: Utc::now(),
            applicants: 0,
            views: 0,
            status: JobStatus::Active,
        }
    }
}

prop_compose! {
    fn arb_profile()(
        skills in prop::collection::vec(arb_skill(), 0..8),
        job_types in prop::collection::vec(arb_job_type(), 0..4),
        locations in prop::collection::vec(prop::sample::select(PLACES.to_vec()), 0..3),
        lo in 0u64..300_000,
        span in 0u64..300_000,
    ) -> CandidateProfile {
        CandidateProfile {
            full_name: "Test".to_string(),
            email: "test@example.com".to_string(),
            skills,
            preferences: JobPreferences {
                job_types,
                salary_range: SalaryRange { min: lo, max: lo + span },
                locations: locations.into_iter().map(str::to_string).collect(),
                remote_work: false,
                industries: vec![],
            },
            ..Default::default()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn score_stays_within_bounds(job in arb_job(), profile in arb_profile()) {
        let (score, reasons) = matching::score(&job, &profile);
        prop_assert!(score <= 100, "score {} above 100", score);
        prop_assert!(reasons.len() <= 5);
    }

    #[test]
    fn ranking_is_sorted_and_bounded(
        jobs in prop::collection::vec(arb_job(), 0..40),
        profile in arb_profile(),
    ) {
        let ranked = matching::rank(&jobs, &profile, DEFAULT_MATCH_LIMIT);
        prop_assert!(ranked.len() <= DEFAULT_MATCH_LIMIT);
        prop_assert_eq!(ranked.len(), jobs.len().min(DEFAULT_MATCH_LIMIT));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn ranking_scores_agree_with_scorer(
        jobs in prop::collection::vec(arb_job(), 1..10),
        profile in arb_profile(),
    ) {
        for m in matching::rank(&jobs, &profile, DEFAULT_MATCH_LIMIT) {
            let (score, reasons) = matching::score(&m.job, &profile);
            prop_assert_eq!(m.match_score, score);
            prop_assert_eq!(m.match_reasons, reasons);
        }
    }

    #[test]
    fn save_then_unsave_restores_saved_set(
        existing in prop::collection::hash_set("[a-z]{4}", 0..5),
        job_id in "job_[0-9]{3}",
    ) {
        let (_dir, db) = common::temp_db();
        let mut tracker = ApplicationTracker::load(&db);
        for id in &existing {
            tracker.save(id);
        }
        let before = tracker.saved_jobs().to_vec();

        tracker.save(&job_id);
        tracker.unsave(&job_id);
        prop_assert_eq!(tracker.saved_jobs().to_vec(), before);
    }
}

#[test]
fn zero_requirement_jobs_score_without_skill_bucket() {
    let job = common::JobBuilder::new("job_empty")
        .requirements(&[])
        .location("Nakuru")
        .salary("Negotiable")
        .build();
    let (score, reasons) = matching::score(&job, &common::profile(&["Python"]));
    assert_eq!(score, 20);
    assert_eq!(reasons, vec!["Matches preferred job type: full-time".to_string()]);
}
