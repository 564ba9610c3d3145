use tracing::info;

use crate::db::{CANDIDATES_KEY, Database};
use crate::error::Result;
use crate::models::{Candidate, VerificationStatus};

#[derive(Debug, Clone, Default)]
pub struct CandidateFilters {
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub verification_status: Option<VerificationStatus>,
}

/// Candidate records visible to employers.
pub struct CandidateDirectory<'a> {
    db: &'a Database,
    candidates: Vec<Candidate>,
}

impl<'a> CandidateDirectory<'a> {
    pub fn load(db: &'a Database) -> Result<Self> {
        let candidates = db.get_json(CANDIDATES_KEY)?.unwrap_or_default();
        Ok(Self { db, candidates })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Adds new records and replaces those whose id is already known.
    pub fn import(&mut self, incoming: Vec<Candidate>) -> Result<usize> {
        let count = incoming.len();
        for candidate in incoming {
            match self.candidates.iter_mut().find(|c| c.id == candidate.id) {
                Some(existing) => *existing = candidate,
                None => self.candidates.push(candidate),
            }
        }
        self.db.put_json(CANDIDATES_KEY, &self.candidates)?;
        info!(count, total = self.candidates.len(), "candidates imported");
        Ok(count)
    }

    /// All filters must hold. A candidate passes the skill filter when any
    /// filter skill appears inside any of their skills.
    pub fn search(&self, filters: &CandidateFilters) -> Vec<&Candidate> {
        let skills: Vec<String> = filters.skills.iter().map(|s| s.to_lowercase()).collect();
        let location = filters.location.as_ref().map(|l| l.to_lowercase());

        self.candidates
            .iter()
            .filter(|c| {
                skills.is_empty()
                    || skills.iter().any(|wanted| {
                        c.skills
                            .iter()
                            .any(|have| have.to_lowercase().contains(wanted.as_str()))
                    })
            })
            .filter(|c| {
                filters
                    .experience
                    .as_ref()
                    .is_none_or(|exp| c.experience.contains(exp.as_str()))
            })
            .filter(|c| {
                location
                    .as_ref()
                    .is_none_or(|loc| c.location.to_lowercase().contains(loc.as_str()))
            })
            .filter(|c| {
                filters
                    .verification_status
                    .is_none_or(|status| c.verification_status == status)
            })
            .collect()
    }
}
