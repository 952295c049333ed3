//! Roster construction: one pure pass over the canonical data table.

mod data;

pub use data::RosterSection;

use tracing::debug;

use crate::domain::{PerformanceSlot, Performer};
use crate::error::Result;
use crate::normalize::{
    is_eligible, map_date_to_day_id, normalize_id, resolve_display_commitment,
};
use crate::program;

/// Build the full performer list from the static roster table. Records come
/// out in table order, one per roster row. Fails when a row names a (day,
/// stage, time) combination with no scheduled show.
pub fn build_roster() -> Result<Vec<Performer>> {
    let mut performers = Vec::new();

    for section in data::ROSTER {
        let day_id = map_date_to_day_id(section.date);
        let slot = program::resolve_show_slot(&day_id, section.stage, section.time)?;
        debug!(
            stage_id = slot.stage_id,
            members = section.members.len(),
            "building roster section"
        );

        for (name, commitment) in section.members {
            performers.push(Performer {
                id: normalize_id(name),
                name: (*name).to_string(),
                commitment: resolve_display_commitment(name, commitment),
                award_eligible: is_eligible(name),
                performances: vec![PerformanceSlot {
                    date: section.date.to_string(),
                    day_id: day_id.clone(),
                    time: section.time.to_string(),
                    stage: section.stage.to_string(),
                    stage_id: slot.stage_id.to_string(),
                }],
            });
        }
    }

    Ok(performers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_roster_succeeds_over_real_data() {
        let performers = build_roster().unwrap();
        assert_eq!(performers.len(), 170);
    }

    #[test]
    fn test_record_fields_derived() {
        let performers = build_roster().unwrap();
        let maggie = performers
            .iter()
            .find(|p| p.name == "Maggie Amarant")
            .unwrap();
        assert_eq!(maggie.id, "maggie-amarant");
        assert!(maggie.award_eligible);
        assert_eq!(maggie.commitment, "6 years of drama");
        assert_eq!(maggie.performances.len(), 1);
        assert_eq!(maggie.performances[0].stage_id, "stage-two-monday");
        assert_eq!(maggie.performances[0].day_id, "monday-24th");
    }

    #[test]
    fn test_ineligible_commitment_displays_none() {
        let performers = build_roster().unwrap();
        let logan = performers.iter().find(|p| p.name == "Logan Shard").unwrap();
        assert!(!logan.award_eligible);
        assert_eq!(logan.commitment, "(None)");
    }

    #[test]
    fn test_first_year_pin_survives_verbatim() {
        let performers = build_roster().unwrap();
        let anna = performers.iter().find(|p| p.name == "Anna Francis").unwrap();
        assert!(!anna.award_eligible);
        assert_eq!(anna.commitment, "First Year Pin Nov");
    }

    #[test]
    fn test_slash_variant_matches_eligibility_roster() {
        let performers = build_roster().unwrap();
        let alira = performers.iter().find(|p| p.name == "Alira Hill").unwrap();
        assert!(alira.award_eligible);
        assert_eq!(alira.commitment, "4 years of drama");
    }

    #[test]
    fn test_thursday_stage_two_slots_split_by_time() {
        let performers = build_roster().unwrap();
        let pirated: Vec<_> = performers
            .iter()
            .filter(|p| p.performances[0].stage_id == "stage-two-thursday-pirated")
            .collect();
        assert_eq!(pirated.len(), 13);
        assert!(pirated.iter().any(|p| p.name == "Brock Kostos"));

        let our_space = performers
            .iter()
            .filter(|p| p.performances[0].stage_id == "stage-two-thursday-our-space")
            .count();
        assert_eq!(our_space, 12);

        let bad_side = performers
            .iter()
            .filter(|p| p.performances[0].stage_id == "stage-two-thursday-bad-side")
            .count();
        assert_eq!(bad_side, 12);
    }

    #[test]
    fn test_divergent_time_on_single_show_stage_still_builds() {
        // Amy Clarkson is listed against Stage Two with the Stage One time
        // window; Tuesday's Stage Two hosts one show, so she lands there.
        let performers = build_roster().unwrap();
        let amy = performers.iter().find(|p| p.name == "Amy Clarkson").unwrap();
        assert_eq!(amy.performances[0].stage_id, "stage-two-tuesday");
    }
}
