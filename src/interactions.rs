use chrono::Utc;
use tracing::info;

use crate::db::{Database, INTERACTIONS_KEY};
use crate::error::Result;
use crate::models::{Interaction, InteractionKind};

/// Employer contact history with candidates, oldest first as recorded.
pub struct InteractionLog<'a> {
    db: &'a Database,
    interactions: Vec<Interaction>,
}

impl<'a> InteractionLog<'a> {
    pub fn load(db: &'a Database) -> Result<Self> {
        let interactions = db.get_json(INTERACTIONS_KEY)?.unwrap_or_default();
        Ok(Self { db, interactions })
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn record(
        &mut self,
        candidate_id: &str,
        kind: InteractionKind,
        notes: Option<String>,
        job_id: Option<String>,
    ) -> Result<&Interaction> {
        self.interactions.push(Interaction {
            candidate_id: candidate_id.to_string(),
            kind,
            date: Utc::now(),
            notes,
            job_id,
        });
        self.db.put_json(INTERACTIONS_KEY, &self.interactions)?;
        info!(candidate_id, %kind, "interaction recorded");
        Ok(&self.interactions[self.interactions.len() - 1])
    }

    /// Newest first. Entries with the same timestamp keep recording order.
    pub fn for_candidate(&self, candidate_id: &str) -> Vec<&Interaction> {
        let mut found: Vec<&Interaction> = self
            .interactions
            .iter()
            .filter(|i| i.candidate_id == candidate_id)
            .collect();
        found.sort_by(|a, b| b.date.cmp(&a.date));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};

    fn db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.init().unwrap();
        db
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()
    }

    fn entry(candidate_id: &str, kind: InteractionKind, day: u32) -> Interaction {
        Interaction {
            candidate_id: candidate_id.to_string(),
            kind,
            date: at(day),
            notes: None,
            job_id: None,
        }
    }

    #[test]
    fn recorded_interactions_are_persisted() {
        let db = db();
        let mut log = InteractionLog::load(&db).unwrap();
        log.record(
            "c1",
            InteractionKind::Contacted,
            Some("Sent interview invite".to_string()),
            Some("job_1".to_string()),
        )
        .unwrap();

        let reloaded = InteractionLog::load(&db).unwrap();
        let history = reloaded.for_candidate("c1");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, InteractionKind::Contacted);
        assert_eq!(history[0].job_id.as_deref(), Some("job_1"));
    }

    #[test]
    fn candidate_history_is_newest_first() {
        let db = db();
        db.put_json(
            INTERACTIONS_KEY,
            &[
                entry("c1", InteractionKind::Viewed, 1),
                entry("c2", InteractionKind::Viewed, 2),
                entry("c1", InteractionKind::Interviewed, 9),
                entry("c1", InteractionKind::Contacted, 4),
            ],
        )
        .unwrap();

        let log = InteractionLog::load(&db).unwrap();
        let kinds: Vec<InteractionKind> = log.for_candidate("c1").iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InteractionKind::Interviewed,
                InteractionKind::Contacted,
                InteractionKind::Viewed
            ]
        );
        assert!(log.for_candidate("c9").is_empty());
    }

    #[test]
    fn stored_interactions_use_type_field() {
        let db = db();
        let mut log = InteractionLog::load(&db).unwrap();
        log.record("c1", InteractionKind::Hired, None, None).unwrap();

        let raw: serde_json::Value = db.get_json(INTERACTIONS_KEY).unwrap().unwrap();
        assert_eq!(raw[0]["candidateId"], "c1");
        assert_eq!(raw[0]["type"], "hired");
        assert!(raw[0].get("notes").is_none());
    }
}
