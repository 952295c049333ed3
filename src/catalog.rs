//! The immutable catalog and its read accessors.

use serde::Serialize;
use tracing::info;

use crate::domain::{Day, Performer};
use crate::error::Result;
use crate::program::{self, ShowSlot};
use crate::roster::build_roster;

/// Every performer record plus program metadata, built once at load time
/// and never mutated.
#[derive(Debug, Serialize)]
pub struct Catalog {
    days: Vec<Day>,
    performers: Vec<Performer>,
}

impl Catalog {
    /// Build the catalog from the static data tables.
    pub fn load() -> Result<Self> {
        let performers = build_roster()?;
        let days = program::DAYS
            .iter()
            .map(|(id, label, year, has_thank_you)| Day {
                id: (*id).to_string(),
                label: (*label).to_string(),
                year: *year,
                has_thank_you: *has_thank_you,
            })
            .collect();
        let catalog = Self { days, performers };
        info!(
            performers = catalog.performers.len(),
            days = catalog.days.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn performers(&self) -> &[Performer] {
        &self.performers
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn show_slots(&self) -> &'static [ShowSlot] {
        program::SHOW_SLOTS
    }

    /// All performers appearing on the given day.
    pub fn performers_by_day(&self, day_id: &str) -> Vec<&Performer> {
        self.performers
            .iter()
            .filter(|p| p.performances.iter().any(|s| s.day_id == day_id))
            .collect()
    }

    /// All performers appearing in the given show instance.
    pub fn performers_by_stage(&self, stage_id: &str) -> Vec<&Performer> {
        self.performers
            .iter()
            .filter(|p| p.performances.iter().any(|s| s.stage_id == stage_id))
            .collect()
    }

    /// All performers appearing in the given show instance on the given day.
    pub fn performers_by_stage_and_day(&self, stage_id: &str, day_id: &str) -> Vec<&Performer> {
        self.performers
            .iter()
            .filter(|p| {
                p.performances
                    .iter()
                    .any(|s| s.stage_id == stage_id && s.day_id == day_id)
            })
            .collect()
    }

    /// First record whose derived id matches. Ids are lossy; aliased names
    /// resolve to the earliest record in table order.
    pub fn performer_by_id(&self, id: &str) -> Option<&Performer> {
        self.performers.iter().find(|p| p.id == id)
    }

    /// Record by exact display name.
    pub fn performer_by_name(&self, name: &str) -> Option<&Performer> {
        self.performers.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.performers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.performers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_by_day() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.performers_by_day("monday-24th").len(), 41);
        assert_eq!(catalog.performers_by_day("thursday-27th").len(), 46);
        assert!(catalog.performers_by_day("friday-28th").is_empty());
    }

    #[test]
    fn test_accessors_by_stage_and_day() {
        let catalog = Catalog::load().unwrap();
        // Tuesday's Stage Two: the scheduled cast plus the spreadsheet's
        // divergent-time listing.
        assert_eq!(
            catalog
                .performers_by_stage_and_day("stage-two-tuesday", "tuesday-25th")
                .len(),
            15
        );
        assert!(catalog
            .performers_by_stage_and_day("stage-two-tuesday", "monday-24th")
            .is_empty());
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let catalog = Catalog::load().unwrap();
        let by_id = catalog.performer_by_id("darby-scott-anderson").unwrap();
        assert_eq!(by_id.name, "Darby Scott-Anderson");
        let by_name = catalog.performer_by_name("Darby Scott-Anderson").unwrap();
        assert_eq!(by_name.id, "darby-scott-anderson");
        assert!(catalog.performer_by_id("nobody-here").is_none());
    }

    #[test]
    fn test_program_metadata() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.days().len(), 4);
        assert!(catalog.days().last().unwrap().has_thank_you);
        assert_eq!(catalog.show_slots().len(), 13);
    }
}
