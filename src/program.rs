//! The showcase program: days, productions, and the show-slot schedule.
//!
//! Each `ShowSlot` is one show instance. Most (day, stage) pairs host a
//! single show; Thursday's Stage Two hosts three different productions in
//! three time windows, so slot resolution there requires an exact time
//! match.

use crate::error::{CatalogError, Result};
use serde::Serialize;

/// One of the plays staged during the showcase week.
#[derive(Debug, Serialize)]
pub struct Production {
    pub title: &'static str,
    pub written_by: &'static str,
    pub summary: &'static str,
}

/// One scheduled show instance: a production on a stage in a time window.
#[derive(Debug, Serialize)]
pub struct ShowSlot {
    pub day_id: &'static str,
    pub stage: &'static str,
    pub time: &'static str,
    pub stage_id: &'static str,
    pub production: &'static Production,
}

pub static FIVE_MINUTES: Production = Production {
    title: "FIVE MINUTES",
    written_by: "Olivia Jacobs and Alise Amarant",
    summary: "Brody lives in a thousand worlds complete with adventures, main characters and invisible friends. What is the cost of five minutes? Inspired by the worlds that the young at heart can make up and the power of being distracted within our everyday lives.",
};

pub static THE_BAD_SIDE: Production = Production {
    title: "THE BAD SIDE",
    written_by: "Alise Amarant",
    summary: "At the annual meeting of the Bad Wolves Club, we're given a behind-the-scenes look into the secret world of wolves. Gathered from fables, TV shows, comics, and films, these famous \"bad wolves\" come together to challenge their notorious reputation and explore what it takes to be seen as good once again.",
};

pub static FERRIERS_SHOES: Production = Production {
    title: "FERRIER'S SHOES",
    written_by: "Alise Amarant, Olivia Jacobs and special guest Darcy Gibson",
    summary: "In Ferrier's Shoes, we spend a day with Stanley in his family's old shoe shop, passed down through generations from his father's father's father. It's just Stanley now, serving everyone from teenagers to toddlers to grannies. But something strange is afoot: all the left shoes have mysteriously vanished. As the mystery deepens, it might take a detective to uncover the real reason behind the missing shoes.",
};

pub static OUR_SPACE: Production = Production {
    title: "OUR SPACE",
    written_by: "Alise Amarant",
    summary: "OUR SPACE takes us aboard the Titanic in 1912, in the midst of chaos as the crew faces the unimaginable. Amid the rising panic, they each search for their own sense of personal space, even as they're literally surrounded by it. A story about the strength of friendship, the boundaries of humor, and what happens when a joke goes too far.",
};

pub static PIRATED: Production = Production {
    title: "PIRATED",
    written_by: "Alise Amarant, Olivia Jacobs and special guest Jacob Amarant",
    summary: "What happens when a band of pirates finally discovers the land they've always dreamed of finding? And once their dream comes true, what comes next? Through the use of song lyrics and storytelling, this play explores the pirates' hopes, struggles, and the unexpected reality of achieving their long-sought dream when piracy is a crime.",
};

/// Known spreadsheet date strings mapped to program day ids.
pub(crate) const DATE_TO_DAY: &[(&str, &str)] = &[
    ("Monday, 3 November 2025", "monday-24th"),
    ("Tuesday, 4 November 2025", "tuesday-25th"),
    ("Wednesday, 5 November 2025", "wednesday-26th"),
    ("Thursday, 6 November 2025", "thursday-27th"),
];

/// Program day metadata in showcase order.
pub(crate) const DAYS: &[(&str, &str, i32, bool)] = &[
    ("monday-24th", "Monday 24th", 2025, false),
    ("tuesday-25th", "Tuesday 25th", 2025, false),
    ("wednesday-26th", "Wednesday 26th", 2025, false),
    ("thursday-27th", "Thursday 27th", 2025, true),
];

/// Every show instance of the week, in program order.
pub static SHOW_SLOTS: &[ShowSlot] = &[
    ShowSlot { day_id: "monday-24th", stage: "Stage One", time: "4:00 PM to 5:00 PM", stage_id: "stage-one-monday", production: &FIVE_MINUTES },
    ShowSlot { day_id: "monday-24th", stage: "Stage Two", time: "5:00 PM to 6:00 PM", stage_id: "stage-two-monday", production: &THE_BAD_SIDE },
    ShowSlot { day_id: "monday-24th", stage: "Stage Three", time: "6:00 PM to 7:00 PM", stage_id: "stage-three-monday", production: &FERRIERS_SHOES },
    ShowSlot { day_id: "tuesday-25th", stage: "Stage One", time: "4:00 PM to 5:00 PM", stage_id: "stage-one-tuesday", production: &FIVE_MINUTES },
    ShowSlot { day_id: "tuesday-25th", stage: "Stage Two", time: "5:00 PM to 6:00 PM", stage_id: "stage-two-tuesday", production: &THE_BAD_SIDE },
    ShowSlot { day_id: "tuesday-25th", stage: "Stage Three", time: "6:00 PM to 7:00 PM", stage_id: "stage-three-tuesday", production: &FERRIERS_SHOES },
    ShowSlot { day_id: "wednesday-26th", stage: "Stage One", time: "4:00 PM to 5:00 PM", stage_id: "stage-one-wednesday", production: &FIVE_MINUTES },
    ShowSlot { day_id: "wednesday-26th", stage: "Stage Two", time: "5:00 PM to 6:00 PM", stage_id: "stage-two-wednesday", production: &THE_BAD_SIDE },
    ShowSlot { day_id: "wednesday-26th", stage: "Stage Three", time: "6:00 PM to 7:00 PM", stage_id: "stage-three-wednesday", production: &FERRIERS_SHOES },
    ShowSlot { day_id: "thursday-27th", stage: "Stage One", time: "4:00 PM to 5:00 PM", stage_id: "stage-one-thursday", production: &FIVE_MINUTES },
    // Thursday Stage Two hosts three shows; the time window picks the slot.
    ShowSlot { day_id: "thursday-27th", stage: "Stage Two", time: "4:00 PM to 5:00 PM", stage_id: "stage-two-thursday-our-space", production: &OUR_SPACE },
    ShowSlot { day_id: "thursday-27th", stage: "Stage Two", time: "5:00 PM to 6:00 PM", stage_id: "stage-two-thursday-pirated", production: &PIRATED },
    ShowSlot { day_id: "thursday-27th", stage: "Stage Two", time: "5:30 PM to 6:30 PM", stage_id: "stage-two-thursday-bad-side", production: &THE_BAD_SIDE },
];

/// Resolve the show slot for a roster row. A stage with a single show that
/// day resolves regardless of the time string; a stage hosting multiple
/// shows requires an exact time match and fails hard otherwise.
pub fn resolve_show_slot(day_id: &str, stage: &str, time: &str) -> Result<&'static ShowSlot> {
    let mut slots = SHOW_SLOTS
        .iter()
        .filter(|s| s.day_id == day_id && s.stage == stage);

    let first = slots.next();
    let second = slots.next();

    match (first, second) {
        (Some(only), None) => Ok(only),
        (Some(first), Some(_)) => SHOW_SLOTS
            .iter()
            .filter(|s| s.day_id == first.day_id && s.stage == first.stage)
            .find(|s| s.time == time)
            .ok_or_else(|| CatalogError::UnknownShowSlot {
                day_id: day_id.to_string(),
                stage: stage.to_string(),
                time: time.to_string(),
            }),
        (None, _) => Err(CatalogError::UnknownShowSlot {
            day_id: day_id.to_string(),
            stage: stage.to_string(),
            time: time.to_string(),
        }),
    }
}

/// Total stage-id derivation: schedule lookup with a silent fallback to the
/// default `stage-{number}-{day_part}` pattern when nothing matches.
pub fn derive_stage_id(day_id: &str, stage: &str, time: &str) -> String {
    match resolve_show_slot(day_id, stage, time) {
        Ok(slot) => slot.stage_id.to_string(),
        Err(_) => default_stage_id(day_id, stage),
    }
}

fn default_stage_id(day_id: &str, stage: &str) -> String {
    let stage_number = stage.strip_prefix("Stage ").unwrap_or(stage).to_lowercase();
    let day_part = day_id.split('-').next().unwrap_or(day_id);
    format!("stage-{}-{}", stage_number, day_part)
}
