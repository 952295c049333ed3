use serde::{Deserialize, Serialize};

/// Canonical record for one showcase participant.
///
/// `id` is derived from the name by lossy slug normalization and is not
/// guaranteed unique across distinct names that normalize identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performer {
    pub id: String,
    pub name: String,
    /// Display-normalized commitment, or the literal "(None)".
    pub commitment: String,
    /// True when the performer is on the award eligibility roster.
    pub award_eligible: bool,
    pub performances: Vec<PerformanceSlot>,
}

/// One (day, stage, time-window) appearance of a performer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSlot {
    /// Spreadsheet date string, e.g. "Monday, 3 November 2025".
    pub date: String,
    /// Program day id, e.g. "monday-24th".
    pub day_id: String,
    /// Time window as printed in the program, e.g. "4:00 PM to 5:00 PM".
    pub time: String,
    /// Stage label, e.g. "Stage Two".
    pub stage: String,
    /// Show-instance id, e.g. "stage-two-thursday-pirated".
    pub stage_id: String,
}

/// Program metadata for one showcase day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub id: String,
    pub label: String,
    pub year: i32,
    /// Thursday closes with a thank-you section.
    pub has_thank_you: bool,
}
