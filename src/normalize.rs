//! Identity and eligibility normalization.
//!
//! Every function here is total over strings: unmapped dates fall back to a
//! slug of the literal, unrecognized commitments pass through or display as
//! "(None)". Nothing raises.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::program::DATE_TO_DAY;

/// Performers eligible for commitment/award display, as harvested from the
/// enrollment spreadsheet. Matched by normalized full string or by
/// (first token, last token) to tolerate middle-name and slash variants.
pub const AWARD_ELIGIBLE_PERFORMERS: &[&str] = &[
    "Kayleigh Hutchinson", "Skylar Shard", "Tahlia Petrie", "Liam Westbury", "Ella Singe",
    "George Macumber", "Lilly Nadin", "Keira Heath", "Eadie Glatz", "George Clohesy",
    "Milla Web", "Brock Kostos", "Charlotte McAuliffe", "Grace Johnstone", "Sienna Davey",
    "Ella Manypeney", "Phillipa Kohlman", "Dominic Petterlin", "Madeline Petterlin", "Arlie Allen",
    "Letty Sendy", "Otto Luedecke", "Taleitha Perrow", "Emily Ede", "Greta Sbaglia",
    "Ruby Sait", "Alyssa Delmenico", "Malis Worrell", "Reyansh Thaker", "Cora Critch",
    "Kennedy Murphey", "Lydia Deepan", "Millie Jensen", "Corazon Mangantulao", "Poppy Stanaway",
    "Marcelle Varma", "Eve Martin", "Georgina Sbaglia", "Charlotte Perryman", "Ruby Robson",
    "Matilda Robertson", "Sara Douglas", "Leo Epps", "Lilly Foster", "Charlotte Bysouth",
    "Peyton Bish", "Scarlett Besley", "Athena Jones", "Henry Connolly", "Arlo Sergi",
    "Jack Carter", "Darby Scott-Anderson", "Maggie Deacon", "Paris Carr", "Alira / Steve Hill",
    "Ivy Burdeu", "Amelia O'Rielly", "Arabella McGowen", "Ellen Frigerio", "Macy Macumber",
    "Neve Duthie", "Charlie Wills", "Elsie Rice", "Olivia Osborne", "Nellie Ratcliffe",
    "Ewan Dellar", "Jackson Petty-Willis", "Abbygail Kay", "Amy Clarkson", "Clementine Gray",
    "Maggie Amarant", "Hazel Ziffer", "Audrey Savage", "Finn Cunningham", "Bailey Norton",
    "Victoria Tomkins", "Alice Stockx", "Tamati McLarty", "Paige DeJong", "Tahlia Giffard",
    "Darcy Gibson", "Finn Beattie", "Olivia Wells", "Innes Downie", "Isabella Wiegard",
];

/// The closed set of commitment strings eligible for award display.
pub const VALID_AWARD_COMMITMENTS: &[&str] = &[
    "2 years of drama",
    "4 years of drama",
    "5 years of drama",
    "6 years of drama",
    "7 years of drama",
    "8 years of drama",
    "10 years of drama",
    "First Year Pin November",
    "First Year Pin Nov", // Alternative spelling
    "First Year Pin June",
];

/// Commitment shown when a performer has nothing display-worthy.
pub const NO_COMMITMENT: &str = "(None)";

static BARE_YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s+years?$").unwrap());
static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lowercase a string and collapse every run of non-alphanumeric
/// characters into a single hyphen.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Derive the record id for a performer name. Lossy: distinct names that
/// normalize identically produce the same id.
pub fn normalize_id(name: &str) -> String {
    slugify(name)
}

/// Map a spreadsheet date string to its program day id. Unknown dates fall
/// back to the slug of the literal string.
pub fn map_date_to_day_id(date: &str) -> String {
    DATE_TO_DAY
        .iter()
        .find(|(known, _)| *known == date)
        .map(|(_, day_id)| (*day_id).to_string())
        .unwrap_or_else(|| slugify(date))
}

fn strip_non_alnum(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn name_tokens(name: &str) -> (String, String) {
    let mut tokens = name
        .split(|c: char| c.is_whitespace() || c == '/')
        .filter(|t| !t.is_empty());
    let first = tokens.next().unwrap_or("").to_lowercase();
    let last = tokens.last().map(|t| t.to_lowercase()).unwrap_or_else(|| first.clone());
    (first, last)
}

/// Whether a name is on the award eligibility roster. Case-insensitive,
/// diacritic-sensitive. Matches on the fully-stripped name or on the
/// (first token, last token) pair, so "Alira Hill" matches the roster's
/// "Alira / Steve Hill".
pub fn is_eligible(name: &str) -> bool {
    let stripped = strip_non_alnum(name);
    let (first, last) = name_tokens(name);

    AWARD_ELIGIBLE_PERFORMERS.iter().any(|roster_name| {
        if strip_non_alnum(roster_name) == stripped {
            return true;
        }
        let (roster_first, roster_last) = name_tokens(roster_name);
        first == roster_first && last == roster_last
    })
}

/// Normalize free-text commitment variants into their canonical spelling:
/// "6 years" becomes "6 years of drama", "First Year Pin Nov" becomes
/// "First Year Pin November". Anything else passes through unchanged.
pub fn normalize_commitment(raw: &str) -> String {
    let trimmed = raw.trim();
    if BARE_YEARS.is_match(trimmed) {
        return format!("{} of drama", trimmed);
    }
    if raw.contains("First Year Pin Nov") && !raw.contains("November") {
        return raw.replacen("Nov", "November", 1);
    }
    raw.to_string()
}

/// Whether a raw commitment denotes a First Year Pin, in any spelling.
pub fn is_first_year_pin(raw: &str) -> bool {
    raw.to_lowercase().contains("first year pin")
}

/// Compute the commitment shown on a performer's card.
///
/// Eligible performers with a recognized commitment show the normalized
/// vocabulary string. First Year Pins show verbatim regardless of roster
/// membership. Everything else shows "(None)".
pub fn resolve_display_commitment(name: &str, raw: &str) -> String {
    let normalized = normalize_commitment(raw);
    if is_eligible(name) && VALID_AWARD_COMMITMENTS.contains(&normalized.as_str()) {
        return normalized;
    }
    if is_first_year_pin(raw) {
        return raw.to_string();
    }
    NO_COMMITMENT.to_string()
}
