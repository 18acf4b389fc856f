//! Advisory re-validation of a generated schedule.
//!
//! Checks a match list against the scheduling invariants and returns a
//! violation per offending instance. Violations are data, not errors: callers
//! decide whether a non-empty list blocks export or is merely reported.
//!
//! Stateless and idempotent: validating the same input twice yields the same
//! list, in the same order.

use crate::domain::model::{ScheduledMatch, Team};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Maximum distinct teams allowed in one weekend (2 matches x 2 teams).
pub const MAX_TEAMS_PER_WEEKEND: usize = 4;

/// Categories of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A pair's home/away fixture counts are not exactly one each.
    PairingImbalance,
    /// A derby was scheduled before every team had played inter-town.
    EarlyDerby,
    /// A weekend involves more than four distinct teams.
    WeekendOverload,
}

/// A single detected violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Violation category.
    pub kind: ViolationKind,
    /// Human-readable description with enough context to locate the issue.
    pub message: String,
}

impl Violation {
    fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a match list against the roster it was generated from.
///
/// Checks, in order:
/// 1. Every unordered pair appearing in the list has each side at home
///    exactly once.
/// 2. Every team appears in an inter-town match strictly before the first
///    derby weekend (skipped when no derby exists).
/// 3. No weekend accumulates more than four distinct teams.
///
/// Returns an empty vector for a valid schedule.
pub fn validate_schedule(matches: &[ScheduledMatch], teams: &[Team]) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_pairings(matches, &mut violations);
    check_derby_deferral(matches, teams, &mut violations);
    check_weekend_load(matches, &mut violations);
    violations
}

fn check_pairings(matches: &[ScheduledMatch], out: &mut Vec<Violation>) {
    // Keyed by (lexicographically smaller, larger); counts how often each
    // side hosted. BTreeMap keeps the report order deterministic.
    let mut counts: BTreeMap<(String, String), (u32, u32)> = BTreeMap::new();

    for m in matches {
        if m.home_team <= m.away_team {
            let entry = counts
                .entry((m.home_team.clone(), m.away_team.clone()))
                .or_insert((0, 0));
            entry.0 += 1;
        } else {
            let entry = counts
                .entry((m.away_team.clone(), m.home_team.clone()))
                .or_insert((0, 0));
            entry.1 += 1;
        }
    }

    for ((first, second), (first_home, second_home)) in &counts {
        if *first_home != 1 || *second_home != 1 {
            out.push(Violation::new(
                ViolationKind::PairingImbalance,
                format!(
                    "Pair {first} / {second} has invalid home counts: \
                     {first} hosted {first_home} time(s), {second} hosted {second_home} time(s)"
                ),
            ));
        }
    }
}

fn check_derby_deferral(matches: &[ScheduledMatch], teams: &[Team], out: &mut Vec<Violation>) {
    let town_of: HashMap<&str, &str> = teams
        .iter()
        .map(|t| (t.name.as_str(), t.town.as_str()))
        .collect();
    let is_derby = |m: &ScheduledMatch| {
        match (
            town_of.get(m.home_team.as_str()),
            town_of.get(m.away_team.as_str()),
        ) {
            (Some(home), Some(away)) => home == away,
            _ => false,
        }
    };

    let Some(first_derby_weekend) = matches.iter().filter(|m| is_derby(m)).map(|m| m.weekend).min()
    else {
        return;
    };

    let mut broke_ice: HashSet<&str> = HashSet::new();
    for m in matches {
        if m.weekend < first_derby_weekend && !is_derby(m) {
            broke_ice.insert(m.home_team.as_str());
            broke_ice.insert(m.away_team.as_str());
        }
    }

    let missing: Vec<&str> = teams
        .iter()
        .map(|t| t.name.as_str())
        .filter(|name| !broke_ice.contains(name))
        .collect();

    if !missing.is_empty() {
        out.push(Violation::new(
            ViolationKind::EarlyDerby,
            format!(
                "Derby matches start on weekend {first_derby_weekend} before these teams \
                 played inter-town: {}",
                missing.join(", ")
            ),
        ));
    }
}

fn check_weekend_load(matches: &[ScheduledMatch], out: &mut Vec<Violation>) {
    // One violation per match that pushes its weekend past the limit, in
    // match-list order, mirroring how the schedule would be consumed.
    let mut weekend_teams: HashMap<u32, HashSet<&str>> = HashMap::new();

    for m in matches {
        let set = weekend_teams.entry(m.weekend).or_default();
        set.insert(m.home_team.as_str());
        set.insert(m.away_team.as_str());
        if set.len() > MAX_TEAMS_PER_WEEKEND {
            out.push(Violation::new(
                ViolationKind::WeekendOverload,
                format!(
                    "Weekend {} involves {} teams (max {MAX_TEAMS_PER_WEEKEND})",
                    m.weekend,
                    set.len()
                ),
            ));
        }
    }
}
