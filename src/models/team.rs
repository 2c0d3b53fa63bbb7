//! Team record: standings plus the remaining head-to-head schedule row.

use serde::{Deserialize, Serialize};

/// Position of a team inside its division (stable, 0-based).
pub type TeamIndex = usize;

/// A team in the division.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Games left to play, including games against teams outside the division.
    pub remaining: u32,
    /// Remaining games against each division team, indexed by `TeamIndex`.
    pub against: Vec<u32>,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        wins: u32,
        losses: u32,
        remaining: u32,
        against: Vec<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            wins,
            losses,
            remaining,
            against,
        }
    }

    /// Wins this team finishes with if it wins every remaining game.
    ///
    /// Saturates at `u32::MAX`; [`Division::new`](crate::models::Division::new) rejects
    /// teams where that would happen.
    pub fn max_possible_wins(&self) -> u32 {
        self.wins.saturating_add(self.remaining)
    }

    /// Sum of the remaining games scheduled against division rivals, `None` on overflow.
    pub fn scheduled_in_division(&self) -> Option<u32> {
        self.against
            .iter()
            .try_fold(0u32, |total, &games| total.checked_add(games))
    }
}
