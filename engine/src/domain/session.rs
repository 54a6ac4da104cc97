//! Session aggregate: location, walk budget, candidates, category filter.
//!
//! The aggregate enforces one invariant: the category filter is always a
//! subset of the categories present in the current candidate list, and every
//! candidate reload resets the filter to the full new category set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::discovery::DiscoveryOutcome;
use super::geo::WALKING_SPEED_METERS_PER_MINUTE;
use super::{Candidate, Location};

/// Fixed walking-time budgets the user can pick from.
///
/// Radii derive from the system-wide 80 m/min walking speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WalkBudget {
    /// A five-minute walk (400 m).
    Five,
    /// A ten-minute walk (800 m).
    #[default]
    Ten,
    /// A fifteen-minute walk (1200 m).
    Fifteen,
}

impl WalkBudget {
    /// Walking time in minutes.
    pub fn minutes(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
        }
    }

    /// Search radius in metres at the system walking speed.
    pub fn radius_meters(self) -> u32 {
        (f64::from(self.minutes()) * WALKING_SPEED_METERS_PER_MINUTE) as u32
    }

    /// Stable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Five => "five",
            Self::Ten => "ten",
            Self::Fifteen => "fifteen",
        }
    }
}

impl std::fmt::Display for WalkBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown walk budget string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown walk budget: {input}")]
pub struct ParseWalkBudgetError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::str::FromStr for WalkBudget {
    type Err = ParseWalkBudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "five" => Ok(Self::Five),
            "ten" => Ok(Self::Ten),
            "fifteen" => Ok(Self::Fifteen),
            _ => Err(ParseWalkBudgetError {
                input: s.to_owned(),
            }),
        }
    }
}

/// The persisted session subset that survives a process restart.
///
/// Candidate lists and cache entries are re-derived through discovery and
/// never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Last settled winner, if any.
    pub winner: Option<Candidate>,
    /// Walk budget preference.
    pub walk_budget: WalkBudget,
    /// Whether the map was zoomed onto a settled winner.
    pub zoomed: bool,
    /// Current location.
    pub location: Location,
    /// Selected category labels at save time.
    pub category_filter: Vec<String>,
}

/// In-memory session aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct LunchSession {
    location: Location,
    walk_budget: WalkBudget,
    candidates: Vec<Candidate>,
    categories: Vec<String>,
    category_filter: BTreeSet<String>,
    zoomed: bool,
}

impl LunchSession {
    /// Start a session at a location with empty candidate state.
    pub fn new(location: Location, walk_budget: WalkBudget) -> Self {
        Self {
            location,
            walk_budget,
            candidates: Vec::new(),
            categories: Vec::new(),
            category_filter: BTreeSet::new(),
            zoomed: false,
        }
    }

    /// Current location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Current walk budget.
    pub fn walk_budget(&self) -> WalkBudget {
        self.walk_budget
    }

    /// Full candidate list for the active location and budget.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Sorted distinct categories across the candidate list.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Currently selected category labels, sorted.
    pub fn category_filter(&self) -> Vec<String> {
        self.category_filter.iter().cloned().collect()
    }

    /// Whether the map is zoomed onto a settled winner.
    pub fn zoomed(&self) -> bool {
        self.zoomed
    }

    /// Replace the location wholesale.
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Replace the walk budget.
    pub fn set_walk_budget(&mut self, walk_budget: WalkBudget) {
        self.walk_budget = walk_budget;
    }

    /// Mark or clear the zoomed flag.
    pub fn set_zoomed(&mut self, zoomed: bool) {
        self.zoomed = zoomed;
    }

    /// Apply a discovery reload: replace candidates and reset the filter to
    /// the full new category set.
    pub fn apply_reload(&mut self, outcome: DiscoveryOutcome) {
        self.candidates = outcome.candidates;
        self.category_filter = outcome.categories.iter().cloned().collect();
        self.categories = outcome.categories;
    }

    /// Toggle one category in the filter.
    ///
    /// Labels not present in the current category set are ignored so the
    /// filter stays a subset of the candidate categories.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.iter().any(|label| label == category) {
            return;
        }
        if !self.category_filter.remove(category) {
            self.category_filter.insert(category.to_owned());
        }
    }

    /// Select every category.
    pub fn select_all_categories(&mut self) {
        self.category_filter = self.categories.iter().cloned().collect();
    }

    /// Deselect every category.
    pub fn deselect_all_categories(&mut self) {
        self.category_filter.clear();
    }

    /// Candidates whose category is currently selected, in the stable order
    /// of the source candidate list.
    pub fn filtered_candidates(&self) -> Vec<Candidate> {
        self.candidates
            .iter()
            .filter(|candidate| self.category_filter.contains(&candidate.category))
            .cloned()
            .collect()
    }

    /// Build the persisted snapshot, pairing session state with the engine's
    /// settled winner.
    pub fn snapshot(&self, winner: Option<Candidate>) -> SessionSnapshot {
        SessionSnapshot {
            winner,
            walk_budget: self.walk_budget,
            zoomed: self.zoomed,
            location: self.location.clone(),
            category_filter: self.category_filter(),
        }
    }

    /// Apply a restored snapshot.
    ///
    /// The restored filter is provisional: candidates are empty until the
    /// next reload, which resets the filter to the full category set.
    pub fn apply_snapshot(&mut self, snapshot: &SessionSnapshot) {
        self.location = snapshot.location.clone();
        self.walk_budget = snapshot.walk_budget;
        self.zoomed = snapshot.zoomed;
        self.category_filter = snapshot.category_filter.iter().cloned().collect();
    }
}
