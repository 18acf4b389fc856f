//! Double round-robin fixture generation.
//!
//! Builds a 90-match schedule from a validated 10-team roster in ordered
//! stages: pair enumeration, per-category shuffle, second-leg mirroring,
//! queue combination, greedy weekend packing, and leg labeling.
//!
//! Derby pairings (two teams from the same town) are queued behind all
//! inter-town pairings of the same leg, so every team has faced another town
//! before the first derby is reached.

use crate::domain::model::{FixtureSet, ScheduledMatch, Team};
use crate::utils::error::{FixtureError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

pub const ROSTER_SIZE: usize = 10;

/// Upper bound on matches per weekend; also caps distinct teams at 4.
pub const MATCHES_PER_WEEKEND: usize = 2;

/// An unordered pair with a fixed home/away orientation, referring to teams by
/// roster index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pairing {
    home: usize,
    away: usize,
    derby: bool,
}

impl Pairing {
    fn mirrored(self) -> Self {
        Self {
            home: self.away,
            away: self.home,
            derby: self.derby,
        }
    }
}

/// Checks the roster shape the generator requires: exactly 10 teams, every
/// town fielding at least 2 (a single-team town could never play its derby).
pub fn validate_roster(teams: &[Team]) -> Result<()> {
    if teams.len() != ROSTER_SIZE {
        return Err(FixtureError::RosterShapeError { found: teams.len() });
    }

    let mut town_sizes: HashMap<&str, usize> = HashMap::new();
    for team in teams {
        *town_sizes.entry(team.town.as_str()).or_default() += 1;
    }

    // Report the first offending town in roster order for a stable message.
    for team in teams {
        let count = town_sizes[team.town.as_str()];
        if count < 2 {
            return Err(FixtureError::TownCompositionError {
                town: team.town.clone(),
                count,
            });
        }
    }

    Ok(())
}

/// Owns a validated roster and produces schedules from it. Pure: the only
/// input beyond the roster is the injected random source.
pub struct FixtureGenerator {
    teams: Vec<Team>,
}

impl FixtureGenerator {
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        validate_roster(&teams)?;
        Ok(Self { teams })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Generates a complete schedule using the given random source for the
    /// within-category shuffles.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> FixtureSet {
        let queue = self.build_queue(rng);
        let weekends = pack_weekends(queue);
        self.label_and_flatten(weekends)
    }

    /// Deterministic generation: a fixed seed and roster always produce the
    /// same match list.
    pub fn generate_seeded(&self, seed: u64) -> FixtureSet {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Stages A-D: enumerate pairs, shuffle each category, mirror the second
    /// leg from the shuffled first-leg order, and concatenate into the
    /// scheduling priority queue.
    fn build_queue<R: Rng>(&self, rng: &mut R) -> Vec<Pairing> {
        let mut inter_town = Vec::new();
        let mut derbies = Vec::new();

        for home in 0..self.teams.len() {
            for away in (home + 1)..self.teams.len() {
                let derby = self.teams[home].town == self.teams[away].town;
                let pairing = Pairing { home, away, derby };
                if derby {
                    derbies.push(pairing);
                } else {
                    inter_town.push(pairing);
                }
            }
        }

        inter_town.shuffle(rng);
        derbies.shuffle(rng);

        combine_queue(inter_town, derbies)
    }

    /// Stage F: flatten weekends in order and label each match with its leg.
    /// The label is positional: the first half of the weekends (rounded up)
    /// is leg 1, the rest leg 2.
    fn label_and_flatten(&self, weekends: Vec<Vec<Pairing>>) -> FixtureSet {
        let total = weekends.len();
        let leg1_cutoff = total.div_ceil(2);

        let mut matches = Vec::with_capacity(total * MATCHES_PER_WEEKEND);
        for (index, weekend) in weekends.iter().enumerate() {
            let weekend_num = (index + 1) as u32;
            let leg = if index < leg1_cutoff { 1 } else { 2 };
            for pairing in weekend {
                let home = &self.teams[pairing.home];
                let away = &self.teams[pairing.away];
                matches.push(ScheduledMatch {
                    weekend: weekend_num,
                    leg,
                    home_team: home.name.clone(),
                    away_team: away.name.clone(),
                    stadium: home.stadium.clone(),
                    town: home.town.clone(),
                });
            }
        }

        FixtureSet {
            teams: self.teams.clone(),
            matches,
            weekend_count: total as u32,
        }
    }
}

/// Leg-1 inter-town matches first, then leg-1 derbies, then the mirrored
/// second leg in the same category order.
fn combine_queue(inter_town: Vec<Pairing>, derbies: Vec<Pairing>) -> Vec<Pairing> {
    let mut queue = Vec::with_capacity(2 * (inter_town.len() + derbies.len()));
    queue.extend(inter_town.iter().copied());
    queue.extend(derbies.iter().copied());
    queue.extend(inter_town.iter().map(|p| p.mirrored()));
    queue.extend(derbies.iter().map(|p| p.mirrored()));
    queue
}

/// Stage E: greedy first-fit packing. Each round scans the remaining queue
/// front to back, taking up to two matches whose teams are still free that
/// weekend. The front-most match is always eligible, so every round consumes
/// at least one match and the loop terminates with the queue fully drained.
///
/// Not an optimal matching solver: a rare ordering can leave a weekend with a
/// single match that an exhaustive packer would have paired.
fn pack_weekends(mut queue: Vec<Pairing>) -> Vec<Vec<Pairing>> {
    let mut weekends = Vec::new();

    while !queue.is_empty() {
        let mut busy = [false; ROSTER_SIZE];
        let mut picked = Vec::with_capacity(MATCHES_PER_WEEKEND);
        let mut rest = Vec::with_capacity(queue.len());

        for pairing in queue {
            if picked.len() < MATCHES_PER_WEEKEND && !busy[pairing.home] && !busy[pairing.away] {
                busy[pairing.home] = true;
                busy[pairing.away] = true;
                picked.push(pairing);
            } else {
                rest.push(pairing);
            }
        }

        queue = rest;
        weekends.push(picked);
    }

    weekends
}
