use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullTime => write!(f, "full-time"),
            Self::PartTime => write!(f, "part-time"),
            Self::Contract => write!(f, "contract"),
            Self::Internship => write!(f, "internship"),
        }
    }
}

impl std::str::FromStr for JobType {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full-time" | "fulltime" => Ok(Self::FullTime),
            "part-time" | "parttime" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            "internship" => Ok(Self::Internship),
            _ => Err(format!("Invalid job type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
    Draft,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Closed => write!(f, "closed"),
            Self::Draft => write!(f, "draft"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            "draft" => Ok(Self::Draft),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: String, // free text, e.g. "KSh 80K - 120K"
    #[serde(default)]
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_at: DateTime<Utc>,
    #[serde(default)]
    pub applicants: u32,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub status: JobStatus,
}

/// A job posting as an employer submits it, before the catalog assigns
/// id, posting time and the applicant and view counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub status: JobStatus,
}

#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPreferences {
    pub job_types: Vec<JobType>,
    pub salary_range: SalaryRange,
    pub locations: Vec<String>,
    #[serde(default)]
    pub remote_work: bool,
    #[serde(default)]
    pub industries: Vec<String>,
}

impl Default for JobPreferences {
    fn default() -> Self {
        Self {
            job_types: vec![JobType::FullTime],
            salary_range: SalaryRange { min: 0, max: u64::MAX },
            locations: Vec::new(),
            remote_work: false,
            industries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioKind {
    Project,
    Certificate,
    Achievement,
}

impl std::fmt::Display for PortfolioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::Certificate => write!(f, "certificate"),
            Self::Achievement => write!(f, "achievement"),
        }
    }
}

impl std::str::FromStr for PortfolioKind {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" => Ok(Self::Project),
            "certificate" => Ok(Self::Certificate),
            "achievement" => Ok(Self::Achievement),
            _ => Err(format!("Invalid portfolio item type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PortfolioKind,
    pub url: Option<String>,
    pub date: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    pub preferences: JobPreferences,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct PreferencesUpdate {
    pub job_types: Option<Vec<JobType>>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub locations: Option<Vec<String>>,
    pub remote_work: Option<bool>,
    pub industries: Option<Vec<String>>,
}

/// A job annotated with how well it fits the current profile. Display only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    #[serde(flatten)]
    pub job: Job,
    pub match_score: u8,
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Interview,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    /// Transitions an external reviewer may make. Interview, rejected and
    /// accepted are terminal.
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        if self.is_terminal() {
            return false;
        }
        matches!(
            (self, next),
            (Pending, Reviewed | Rejected | Accepted) | (Reviewed, Interview | Rejected | Accepted)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Interview | Self::Rejected | Self::Accepted)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Reviewed => write!(f, "reviewed"),
            Self::Interview => write!(f, "interview"),
            Self::Rejected => write!(f, "rejected"),
            Self::Accepted => write!(f, "accepted"),
        }
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "interview" => Ok(Self::Interview),
            "rejected" => Ok(Self::Rejected),
            "accepted" => Ok(Self::Accepted),
            _ => Err(format!("Invalid application status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub job_title: String, // denormalized for display
    pub company: String,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Unverified,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified => write!(f, "verified"),
            Self::Pending => write!(f, "pending"),
            Self::Unverified => write!(f, "unverified"),
        }
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verified" => Ok(Self::Verified),
            "pending" => Ok(Self::Pending),
            "unverified" => Ok(Self::Unverified),
            _ => Err(format!("Invalid verification status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub domain: String, // e.g. "johndoe1234.ke"
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub profile_views: u32,
    #[serde(default)]
    pub applications: u32,
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Viewed,
    Contacted,
    Shortlisted,
    Interviewed,
    Hired,
    Rejected,
}

impl std::fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Viewed => write!(f, "viewed"),
            Self::Contacted => write!(f, "contacted"),
            Self::Shortlisted => write!(f, "shortlisted"),
            Self::Interviewed => write!(f, "interviewed"),
            Self::Hired => write!(f, "hired"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for InteractionKind {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewed" => Ok(Self::Viewed),
            "contacted" => Ok(Self::Contacted),
            "shortlisted" => Ok(Self::Shortlisted),
            "interviewed" => Ok(Self::Interviewed),
            "hired" => Ok(Self::Hired),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("Invalid interaction type: {}", s)),
        }
    }
}

/// Something an employer did with a candidate, stamped when recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub candidate_id: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

/// Builds a record id like `app_1718000000000_3f2a`. The random suffix keeps
/// ids distinct when two records are created within the same millisecond.
pub fn generate_id(prefix: &str) -> String {
    format!(
        "{}_{}_{:04x}",
        prefix,
        Utc::now().timestamp_millis(),
        rand::random::<u16>()
    )
}
