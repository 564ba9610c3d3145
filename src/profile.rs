use tracing::{info, warn};

use crate::db::{Database, PROFILE_KEY};
use crate::error::{KazikeError, Result};
use crate::models::{
    CandidateProfile, PortfolioItem, PreferencesUpdate, ProfileUpdate, generate_id,
};

/// The candidate's own profile. Absent until the candidate creates one.
///
/// Edits return the updated profile so the caller can re-rank job matches.
pub struct ProfileStore<'a> {
    db: &'a Database,
    profile: Option<CandidateProfile>,
}

impl<'a> ProfileStore<'a> {
    pub fn load(db: &'a Database) -> Self {
        let profile = match db.get_json(PROFILE_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to load profile: {}", e);
                None
            }
        };
        Self { db, profile }
    }

    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    pub fn require(&self) -> Result<&CandidateProfile> {
        self.profile.as_ref().ok_or(KazikeError::ProfileMissing)
    }

    pub fn replace(&mut self, profile: CandidateProfile) -> Result<&CandidateProfile> {
        self.db.put_json(PROFILE_KEY, &profile)?;
        info!(name = %profile.full_name, "profile saved");
        Ok(&*self.profile.insert(profile))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.db.remove(PROFILE_KEY)?;
        self.profile = None;
        Ok(())
    }

    pub fn update(&mut self, updates: ProfileUpdate) -> Result<&CandidateProfile> {
        let mut profile = self.require()?.clone();

        if let Some(v) = updates.full_name {
            profile.full_name = v;
        }
        if let Some(v) = updates.email {
            profile.email = v;
        }
        if let Some(v) = updates.phone {
            profile.phone = v;
        }
        if let Some(v) = updates.location {
            profile.location = v;
        }
        if let Some(v) = updates.bio {
            profile.bio = v;
        }
        if let Some(v) = updates.experience {
            profile.experience = v;
        }
        if let Some(v) = updates.education {
            profile.education = v;
        }
        if let Some(v) = updates.languages {
            profile.languages = v;
        }

        self.replace(profile)
    }

    /// Exact duplicates are ignored.
    pub fn add_skill(&mut self, skill: &str) -> Result<&CandidateProfile> {
        let mut profile = self.require()?.clone();
        if profile.skills.iter().any(|s| s == skill) {
            return self.require();
        }
        profile.skills.push(skill.to_string());
        self.replace(profile)
    }

    pub fn remove_skill(&mut self, skill: &str) -> Result<&CandidateProfile> {
        let mut profile = self.require()?.clone();
        profile.skills.retain(|s| s != skill);
        self.replace(profile)
    }

    pub fn add_portfolio_item(&mut self, mut item: PortfolioItem) -> Result<&CandidateProfile> {
        let mut profile = self.require()?.clone();
        item.id = generate_id("portfolio");
        profile.portfolio.push(item);
        self.replace(profile)
    }

    pub fn remove_portfolio_item(&mut self, id: &str) -> Result<&CandidateProfile> {
        let mut profile = self.require()?.clone();
        profile.portfolio.retain(|item| item.id != id);
        self.replace(profile)
    }

    pub fn update_preferences(&mut self, updates: PreferencesUpdate) -> Result<&CandidateProfile> {
        let mut profile = self.require()?.clone();
        let prefs = &mut profile.preferences;

        if let Some(v) = updates.job_types {
            prefs.job_types = v;
        }
        if let Some(v) = updates.salary_min {
            prefs.salary_range.min = v;
        }
        if let Some(v) = updates.salary_max {
            prefs.salary_range.max = v;
        }
        if let Some(v) = updates.locations {
            prefs.locations = v;
        }
        if let Some(v) = updates.remote_work {
            prefs.remote_work = v;
        }
        if let Some(v) = updates.industries {
            prefs.industries = v;
        }

        self.replace(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobType, PortfolioKind};

    fn store_with_profile(db: &Database) -> ProfileStore<'_> {
        let mut store = ProfileStore::load(db);
        store
            .replace(CandidateProfile {
                full_name: "Brian Kamau".to_string(),
                email: "brian@example.com".to_string(),
                skills: vec!["Python".to_string()],
                ..Default::default()
            })
            .unwrap();
        store
    }

    fn db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.init().unwrap();
        db
    }

    #[test]
    fn edits_without_profile_fail() {
        let db = db();
        let mut store = ProfileStore::load(&db);
        assert!(store.profile().is_none());
        assert!(matches!(
            store.add_skill("Rust"),
            Err(KazikeError::ProfileMissing)
        ));
    }

    #[test]
    fn skills_are_added_once_and_removed() {
        let db = db();
        let mut store = store_with_profile(&db);

        store.add_skill("Rust").unwrap();
        let p = store.add_skill("Rust").unwrap();
        assert_eq!(p.skills, vec!["Python", "Rust"]);

        let p = store.remove_skill("Python").unwrap();
        assert_eq!(p.skills, vec!["Rust"]);
    }

    #[test]
    fn edits_survive_reload() {
        let db = db();
        let mut store = store_with_profile(&db);
        store
            .update_preferences(PreferencesUpdate {
                job_types: Some(vec![JobType::Contract, JobType::Internship]),
                salary_min: Some(50_000),
                locations: Some(vec!["Kisumu".to_string()]),
                ..Default::default()
            })
            .unwrap();
        store
            .update(ProfileUpdate {
                location: Some("Kisumu, Kenya".to_string()),
                ..Default::default()
            })
            .unwrap();

        let reloaded = ProfileStore::load(&db);
        let p = reloaded.require().unwrap();
        assert_eq!(p.location, "Kisumu, Kenya");
        assert_eq!(
            p.preferences.job_types,
            vec![JobType::Contract, JobType::Internship]
        );
        assert_eq!(p.preferences.salary_range.min, 50_000);
        assert_eq!(p.preferences.locations, vec!["Kisumu"]);
    }

    #[test]
    fn portfolio_items_get_fresh_ids() {
        let db = db();
        let mut store = store_with_profile(&db);
        let item = PortfolioItem {
            id: String::new(),
            title: "M-Pesa budget app".to_string(),
            description: "Tracks spending from SMS receipts".to_string(),
            kind: PortfolioKind::Project,
            url: None,
            date: "2024-03-01".to_string(),
            skills: vec!["Kotlin".to_string()],
        };

        let id = store.add_portfolio_item(item).unwrap().portfolio[0].id.clone();
        assert!(id.starts_with("portfolio_"));

        let p = store.remove_portfolio_item(&id).unwrap();
        assert!(p.portfolio.is_empty());
    }

    #[test]
    fn clear_removes_profile() {
        let db = db();
        let mut store = store_with_profile(&db);
        store.clear().unwrap();
        assert!(store.profile().is_none());
        assert!(ProfileStore::load(&db).profile().is_none());
    }
}
