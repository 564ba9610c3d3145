use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kazike::KazikeError;
use kazike::analytics;
use kazike::candidates::{CandidateDirectory, CandidateFilters};
use kazike::catalog::JobCatalog;
use kazike::config::Config;
use kazike::db::Database;
use kazike::interactions::InteractionLog;
use kazike::matching;
use kazike::models::{
    ApplicationStatus, Candidate, CandidateProfile, InteractionKind, JobPreferences, JobStatus,
    JobType, NewJob, PortfolioItem, PortfolioKind, PreferencesUpdate, ProfileUpdate,
    VerificationStatus,
};
use kazike::profile::ProfileStore;
use kazike::tracker::ApplicationTracker;

#[derive(Parser)]
#[command(name = "kazike")]
#[command(about = "Match Kenyan youth to jobs and track their applications")]
struct Cli {
    /// Path to the local database (overrides KAZIKE_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Manage the candidate profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Manage job postings
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },

    /// Show the best job matches for the profile
    Match {
        /// Number of matches to show (defaults to KAZIKE_MATCH_LIMIT or 20)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the reasons behind each score
        #[arg(short, long)]
        reasons: bool,
    },

    /// Apply to a job
    Apply {
        /// Job ID
        job_id: String,
    },

    /// Save a job for later
    Save {
        /// Job ID
        job_id: String,
    },

    /// Remove a job from the saved list
    Unsave {
        /// Job ID
        job_id: String,
    },

    /// List submitted applications
    Applications,

    /// List saved jobs
    Saved,

    /// Record a review decision on an application
    Review {
        /// Application ID
        application_id: String,

        /// New status (reviewed, interview, rejected, accepted)
        status: ApplicationStatus,

        /// Reviewer notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Search the candidate directory
    Candidates {
        #[command(subcommand)]
        command: CandidateCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the current profile
    Show,

    /// Create a new profile, replacing any existing one
    Init {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Where the candidate lives
        #[arg(long)]
        location: Option<String>,

        /// Comma-separated skills
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
    },

    /// Update profile details
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        experience: Option<String>,
        #[arg(long)]
        education: Option<String>,
        /// Comma-separated languages
        #[arg(long, value_delimiter = ',')]
        languages: Option<Vec<String>>,
    },

    /// Add a skill
    AddSkill { skill: String },

    /// Remove a skill
    RemoveSkill { skill: String },

    /// Update job preferences
    Prefs {
        /// Preferred job types (full-time, part-time, contract, internship)
        #[arg(long = "job-type", value_delimiter = ',')]
        job_types: Option<Vec<JobType>>,

        /// Preferred locations
        #[arg(long = "location", value_delimiter = ',')]
        locations: Option<Vec<String>>,

        /// Minimum expected salary (KSh)
        #[arg(long)]
        salary_min: Option<u64>,

        /// Maximum expected salary (KSh)
        #[arg(long)]
        salary_max: Option<u64>,

        /// Open to remote work
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "no_remote")]
        remote: bool,

        /// Not open to remote work
        #[arg(long, action = ArgAction::SetTrue)]
        no_remote: bool,

        /// Preferred industries
        #[arg(long = "industry", value_delimiter = ',')]
        industries: Option<Vec<String>>,
    },

    /// Add a portfolio item
    PortfolioAdd {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// project, certificate or achievement
        #[arg(long = "type", default_value = "project")]
        kind: PortfolioKind,
        #[arg(long)]
        url: Option<String>,
        /// Date in YYYY-MM-DD form
        #[arg(long)]
        date: String,
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
    },

    /// Remove a portfolio item
    PortfolioRemove { id: String },

    /// Delete the profile
    Reset,
}

#[derive(Subcommand)]
enum JobCommands {
    /// Post a job
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        location: String,
        /// full-time, part-time, contract or internship
        #[arg(long = "type", default_value = "full-time")]
        job_type: JobType,
        /// Free-text salary, e.g. "KSh 80K - 120K"
        #[arg(long, default_value = "")]
        salary: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma-separated requirements
        #[arg(long, value_delimiter = ',')]
        requirements: Vec<String>,
        /// Save as draft instead of publishing
        #[arg(long)]
        draft: bool,
    },

    /// Import job postings from a JSON array
    Import { file: PathBuf },

    /// List jobs
    List {
        /// Filter by status (active, closed, draft)
        #[arg(short, long)]
        status: Option<JobStatus>,
    },

    /// Show job details
    Show { id: String },

    /// Close a job to new applications
    Close { id: String },

    /// Publish a draft or reopen a closed job
    Open { id: String },

    /// Delete a job
    Delete { id: String },

    /// Show posting and candidate engagement figures
    Stats,
}

#[derive(Subcommand)]
enum CandidateCommands {
    /// Import candidate records from a JSON array
    Import { file: PathBuf },

    /// Search candidates
    Search {
        /// Skills to look for (any may match)
        #[arg(long = "skill", value_delimiter = ',')]
        skills: Vec<String>,
        #[arg(long)]
        experience: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// verified, pending or unverified
        #[arg(long)]
        status: Option<VerificationStatus>,
    },

    /// Record an interaction with a candidate
    Contact {
        /// Candidate ID
        id: String,

        /// viewed, contacted, shortlisted, interviewed, hired or rejected
        #[arg(long = "type", default_value = "contacted")]
        kind: InteractionKind,

        /// Job the interaction relates to
        #[arg(long)]
        job: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Show the interaction history for a candidate, newest first
    History {
        /// Candidate ID
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(path) = cli.db {
        config.db_path = path;
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.log_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let db = Database::open(&config.db_path)
        .with_context(|| format!("Failed to open database at {}", config.db_path.display()))?;

    if !matches!(cli.command, Commands::Init) {
        db.ensure_initialized()?;
    }
    run(&db, &config, cli.command)
}

fn run(db: &Database, config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            db.init()?;
            println!("Database initialized at {}", db.path().display());
        }
        Commands::Profile { command } => run_profile(db, config, command)?,
        Commands::Jobs { command } => run_jobs(db, command)?,

        Commands::Match { limit, reasons } => {
            let profiles = ProfileStore::load(db);
            let profile = profiles.require()?;
            let catalog = JobCatalog::load(db)?;
            let tracker = ApplicationTracker::load(db);
            let limit = limit.unwrap_or(config.match_limit);

            let matches = matching::rank(&catalog.active(), profile, limit);
            if matches.is_empty() {
                println!("No active jobs to match.");
            } else {
                println!(
                    "{:<5} {:>5} {:<26} {:<26} {:<18} {:<18} {}",
                    "RANK", "SCORE", "ID", "TITLE", "COMPANY", "LOCATION", "FLAGS"
                );
                println!("{}", "-".repeat(110));
                for (i, m) in matches.iter().enumerate() {
                    let mut flags = Vec::new();
                    if tracker.has_applied(&m.job.id) {
                        flags.push("applied");
                    }
                    if tracker.is_saved(&m.job.id) {
                        flags.push("saved");
                    }
                    println!(
                        "{:<5} {:>5} {:<26} {:<26} {:<18} {:<18} {}",
                        i + 1,
                        m.match_score,
                        truncate(&m.job.id, 24),
                        truncate(&m.job.title, 24),
                        truncate(&m.job.company, 16),
                        truncate(&m.job.location, 16),
                        flags.join(",")
                    );
                    if reasons {
                        for reason in &m.match_reasons {
                            for line in textwrap::wrap(reason, 90) {
                                println!("{:>12}{}", "", line);
                            }
                        }
                    }
                }
            }
        }

        Commands::Apply { job_id } => {
            let mut catalog = JobCatalog::load(db)?;
            let mut tracker = ApplicationTracker::load(db);
            let active = catalog.active();
            match tracker.apply(&active, &job_id) {
                Ok(app) => {
                    println!(
                        "Applied to '{}' at {} (application {}).",
                        app.job_title, app.company, app.id
                    );
                    catalog.record_applicant(&job_id)?;
                }
                Err(KazikeError::DuplicateApplication(_)) => {
                    println!("You have already applied to job {}.", job_id);
                }
                Err(KazikeError::JobNotFound(_)) => {
                    println!("Job {} not found or no longer accepting applications.", job_id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Save { job_id } => {
            let mut tracker = ApplicationTracker::load(db);
            if tracker.save(&job_id) {
                println!("Saved job {}.", job_id);
            } else {
                println!("Job {} is already saved.", job_id);
            }
        }

        Commands::Unsave { job_id } => {
            let mut tracker = ApplicationTracker::load(db);
            if tracker.unsave(&job_id) {
                println!("Removed job {} from saved jobs.", job_id);
            } else {
                println!("Job {} was not saved.", job_id);
            }
        }

        Commands::Applications => {
            let tracker = ApplicationTracker::load(db);
            let apps = tracker.applications();
            if apps.is_empty() {
                println!("No applications yet.");
            } else {
                println!(
                    "{:<26} {:<10} {:<26} {:<20} {:<17}",
                    "ID", "STATUS", "JOB", "COMPANY", "APPLIED"
                );
                println!("{}", "-".repeat(103));
                for app in apps {
                    println!(
                        "{:<26} {:<10} {:<26} {:<20} {:<17}",
                        truncate(&app.id, 24),
                        app.status,
                        truncate(&app.job_title, 24),
                        truncate(&app.company, 18),
                        app.applied_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }

        Commands::Saved => {
            let tracker = ApplicationTracker::load(db);
            let catalog = JobCatalog::load(db)?;
            if tracker.saved_jobs().is_empty() {
                println!("No saved jobs.");
            } else {
                for id in tracker.saved_jobs() {
                    match catalog.get(id) {
                        Some(job) => println!("{:<26} {} ({}, {})", id, job.title, job.company, job.status),
                        None => println!("{:<26} (no longer listed)", id),
                    }
                }
            }
        }

        Commands::Review {
            application_id,
            status,
            notes,
        } => {
            let mut tracker = ApplicationTracker::load(db);
            let app = tracker.review(&application_id, status, notes)?;
            println!("Application {} is now {}.", app.id, app.status);
        }

        Commands::Candidates { command } => run_candidates(db, command)?,
    }

    Ok(())
}

fn run_profile(db: &Database, config: &Config, command: ProfileCommands) -> Result<()> {
    let mut store = ProfileStore::load(db);

    let updated = match command {
        ProfileCommands::Show => {
            match store.profile() {
                Some(p) => print_profile(p),
                None => println!("No profile yet. Run 'kazike profile init'."),
            }
            return Ok(());
        }

        ProfileCommands::Init {
            name,
            email,
            location,
            skills,
        } => {
            let profile = CandidateProfile {
                full_name: name,
                email,
                location: location.clone().unwrap_or_default(),
                skills,
                preferences: JobPreferences {
                    locations: location.into_iter().collect(),
                    ..Default::default()
                },
                ..Default::default()
            };
            store.replace(profile)?
        }

        ProfileCommands::Set {
            name,
            email,
            phone,
            location,
            bio,
            experience,
            education,
            languages,
        } => store.update(ProfileUpdate {
            full_name: name,
            email,
            phone,
            location,
            bio,
            experience,
            education,
            languages,
        })?,

        ProfileCommands::AddSkill { skill } => store.add_skill(&skill)?,
        ProfileCommands::RemoveSkill { skill } => store.remove_skill(&skill)?,

        ProfileCommands::Prefs {
            job_types,
            locations,
            salary_min,
            salary_max,
            remote,
            no_remote,
            industries,
        } => store.update_preferences(PreferencesUpdate {
            job_types,
            salary_min,
            salary_max,
            locations,
            remote_work: remote_choice(remote, no_remote),
            industries,
        })?,

        ProfileCommands::PortfolioAdd {
            title,
            description,
            kind,
            url,
            date,
            skills,
        } => store.add_portfolio_item(PortfolioItem {
            id: String::new(),
            title,
            description,
            kind,
            url,
            date,
            skills,
        })?,

        ProfileCommands::PortfolioRemove { id } => store.remove_portfolio_item(&id)?,

        ProfileCommands::Reset => {
            store.clear()?;
            println!("Profile deleted.");
            return Ok(());
        }
    };

    print_profile(updated);

    // Profile edits change the ranking
    let catalog = JobCatalog::load(db)?;
    let matches = matching::rank(&catalog.active(), updated, config.match_limit);
    info!(matches = matches.len(), "job matches refreshed");
    if let Some(best) = matches.first() {
        println!(
            "\nBest match now: {} at {} ({}%)",
            best.job.title, best.job.company, best.match_score
        );
    }
    Ok(())
}

fn print_profile(p: &CandidateProfile) {
    println!("Name: {}", p.full_name);
    println!("Email: {}", p.email);
    if !p.phone.is_empty() {
        println!("Phone: {}", p.phone);
    }
    if !p.location.is_empty() {
        println!("Location: {}", p.location);
    }
    if !p.experience.is_empty() {
        println!("Experience: {}", p.experience);
    }
    if !p.education.is_empty() {
        println!("Education: {}", p.education);
    }
    println!("Skills: {}", p.skills.join(", "));
    if !p.languages.is_empty() {
        println!("Languages: {}", p.languages.join(", "));
    }

    let prefs = &p.preferences;
    let types: Vec<String> = prefs.job_types.iter().map(|t| t.to_string()).collect();
    println!("Preferred types: {}", types.join(", "));
    println!("Preferred locations: {}", prefs.locations.join(", "));
    println!(
        "Salary expectation: KSh {} - {}",
        prefs.salary_range.min,
        if prefs.salary_range.max == u64::MAX {
            "any".to_string()
        } else {
            prefs.salary_range.max.to_string()
        }
    );
    if prefs.remote_work {
        println!("Open to remote work");
    }

    if !p.portfolio.is_empty() {
        println!("\nPortfolio ({}):", p.portfolio.len());
        for item in &p.portfolio {
            println!("  {} - {} [{}] {}", item.id, item.title, item.kind, item.date);
        }
    }
    if !p.bio.is_empty() {
        println!("\n{}", textwrap::fill(&p.bio, 80));
    }
}

fn run_jobs(db: &Database, command: JobCommands) -> Result<()> {
    let mut catalog = JobCatalog::load(db)?;

    match command {
        JobCommands::Add {
            title,
            company,
            location,
            job_type,
            salary,
            description,
            requirements,
            draft,
        } => {
            let job = catalog.create(NewJob {
                title,
                company,
                location,
                job_type,
                salary,
                description,
                requirements,
                status: if draft { JobStatus::Draft } else { JobStatus::Active },
            })?;
            println!("Added job {}", job.id);
        }

        JobCommands::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read job file: {}", file.display()))?;
            let jobs: Vec<NewJob> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse jobs in {}", file.display()))?;
            let added = catalog.import(jobs)?;
            println!("Imported {} job(s).", added);
        }

        JobCommands::List { status } => {
            let jobs = catalog.list(status);
            if jobs.is_empty() {
                println!("No jobs found.");
            } else {
                println!(
                    "{:<26} {:<8} {:<26} {:<20} {:<11} {:>6} {:>6}",
                    "ID", "STATUS", "TITLE", "COMPANY", "TYPE", "APPLS", "VIEWS"
                );
                println!("{}", "-".repeat(109));
                for job in jobs {
                    println!(
                        "{:<26} {:<8} {:<26} {:<20} {:<11} {:>6} {:>6}",
                        truncate(&job.id, 24),
                        job.status,
                        truncate(&job.title, 24),
                        truncate(&job.company, 18),
                        job.job_type,
                        job.applicants,
                        job.views
                    );
                }
            }
        }

        JobCommands::Show { id } => match catalog.record_view(&id) {
            Ok(job) => {
                println!("Job {}", job.id);
                println!("Title: {}", job.title);
                println!("Company: {}", job.company);
                println!("Location: {}", job.location);
                println!("Type: {}", job.job_type);
                if !job.salary.is_empty() {
                    println!("Salary: {}", job.salary);
                }
                println!("Status: {}", job.status);
                println!("Applicants: {}", job.applicants);
                println!("Views: {}", job.views);
                println!("Posted: {}", job.posted_at.format("%Y-%m-%d %H:%M"));
                if !job.requirements.is_empty() {
                    println!("Requirements: {}", job.requirements.join(", "));
                }
                if !job.description.is_empty() {
                    println!("\n--- Description ---\n{}", textwrap::fill(&job.description, 80));
                }
            }
            Err(KazikeError::JobNotFound(_)) => println!("Job {} not found.", id),
            Err(e) => return Err(e.into()),
        },

        JobCommands::Close { id } => {
            let job = catalog.set_status(&id, JobStatus::Closed)?;
            println!("Closed '{}'.", job.title);
        }

        JobCommands::Open { id } => {
            let job = catalog.set_status(&id, JobStatus::Active)?;
            println!("'{}' is accepting applications.", job.title);
        }

        JobCommands::Delete { id } => {
            let job = catalog.delete(&id)?;
            println!("Deleted '{}'.", job.title);
        }

        JobCommands::Stats => {
            let log = InteractionLog::load(db)?;
            let stats = analytics::summarize(catalog.jobs(), log.interactions());
            println!("Jobs: {} ({} active)", stats.total_jobs, stats.active_jobs);
            println!("Applications: {}", stats.total_applications);
            println!("Views: {}", stats.total_views);
            println!(
                "Average applications per job: {}",
                stats.average_applications_per_job
            );

            if !stats.top_performing_jobs.is_empty() {
                println!("\nTop jobs:");
                for top in &stats.top_performing_jobs {
                    println!(
                        "  {:<26} {:<26} {:>5} appls {:>6} views",
                        truncate(&top.job_id, 24),
                        truncate(&top.title, 24),
                        top.applications,
                        top.views
                    );
                }
            }

            let e = &stats.candidate_engagement;
            println!(
                "\nCandidates: {} viewed, {} contacted, {} interviewed, {} hired",
                e.profile_views, e.contacted, e.interviewed, e.hired
            );
        }
    }

    Ok(())
}

fn run_candidates(db: &Database, command: CandidateCommands) -> Result<()> {
    let mut directory = CandidateDirectory::load(db)?;

    match command {
        CandidateCommands::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read candidate file: {}", file.display()))?;
            let candidates: Vec<Candidate> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse candidates in {}", file.display()))?;
            let count = directory.import(candidates)?;
            println!("Imported {} candidate(s).", count);
        }

        CandidateCommands::Search {
            skills,
            experience,
            location,
            status,
        } => {
            let found = directory.search(&CandidateFilters {
                skills,
                experience,
                location,
                verification_status: status,
            });
            if found.is_empty() {
                println!("No candidates found.");
            } else {
                println!(
                    "{:<14} {:<22} {:<11} {:<18} {}",
                    "ID", "NAME", "STATUS", "LOCATION", "SKILLS"
                );
                println!("{}", "-".repeat(90));
                for c in found {
                    println!(
                        "{:<14} {:<22} {:<11} {:<18} {}",
                        truncate(&c.id, 12),
                        truncate(&c.full_name, 20),
                        c.verification_status,
                        truncate(&c.location, 16),
                        c.skills.join(", ")
                    );
                }
            }
        }

        CandidateCommands::Contact {
            id,
            kind,
            job,
            notes,
        } => {
            if !directory.candidates().iter().any(|c| c.id == id) {
                println!("Candidate {} not found.", id);
                return Ok(());
            }
            let mut log = InteractionLog::load(db)?;
            let entry = log.record(&id, kind, notes, job)?;
            println!(
                "Recorded '{}' for candidate {} at {}.",
                entry.kind,
                entry.candidate_id,
                entry.date.format("%Y-%m-%d %H:%M")
            );
        }

        CandidateCommands::History { id } => {
            let log = InteractionLog::load(db)?;
            let history = log.for_candidate(&id);
            if history.is_empty() {
                println!("No interactions with candidate {}.", id);
            } else {
                for entry in history {
                    println!(
                        "{:<17} {:<12} {:<26} {}",
                        entry.date.format("%Y-%m-%d %H:%M"),
                        entry.kind,
                        entry.job_id.as_deref().unwrap_or("-"),
                        entry.notes.as_deref().unwrap_or("")
                    );
                }
            }
        }
    }

    Ok(())
}

/// `--remote` and `--no-remote` set the preference; neither leaves it alone.
fn remote_choice(remote: bool, no_remote: bool) -> Option<bool> {
    match (remote, no_remote) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    fn prefs_remote(args: &[&str]) -> Option<bool> {
        let mut argv = vec!["kazike", "profile", "prefs"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Profile {
                command: ProfileCommands::Prefs {
                    remote, no_remote, ..
                },
            } => remote_choice(remote, no_remote),
            _ => panic!("expected profile prefs"),
        }
    }

    #[test]
    fn remote_is_a_bare_flag() {
        assert_eq!(prefs_remote(&["--remote"]), Some(true));
        assert_eq!(prefs_remote(&["--no-remote"]), Some(false));
        assert_eq!(prefs_remote(&[]), None);
        assert!(Cli::try_parse_from(["kazike", "profile", "prefs", "--remote", "--no-remote"]).is_err());
    }

    #[test]
    fn contact_defaults_to_contacted() {
        let cli = Cli::try_parse_from(["kazike", "candidates", "contact", "c1", "--job", "job_1"]).unwrap();
        match cli.command {
            Commands::Candidates {
                command: CandidateCommands::Contact { id, kind, job, .. },
            } => {
                assert_eq!(id, "c1");
                assert_eq!(kind, InteractionKind::Contacted);
                assert_eq!(job.as_deref(), Some("job_1"));
            }
            _ => panic!("expected candidates contact"),
        }
    }
}
