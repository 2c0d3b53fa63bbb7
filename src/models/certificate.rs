//! Certificate of elimination.

use crate::models::division::Division;
use serde::{Deserialize, Serialize};

/// How the certificate was found.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateKind {
    /// One team already has more wins than the tested team can reach.
    Trivial,
    /// Source side of the minimum cut in the elimination network.
    MinCut,
}

/// Teams that together prove a team is eliminated.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Team names in division order. Never contains the eliminated team.
    pub teams: Vec<String>,
    pub kind: CertificateKind,
}

impl Certificate {
    pub fn new(teams: Vec<String>, kind: CertificateKind) -> Self {
        Self { teams, kind }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(String::as_str)
    }

    /// Check the pigeonhole bound for `team`:
    /// `|R| * max_possible_wins(team) < sum wins(R) + sum against(R, R)`.
    ///
    /// Returns false for an empty set, a set containing `team`, or unknown names.
    pub fn proves_elimination(&self, division: &Division, team: &str) -> bool {
        if self.is_empty() || self.contains(team) {
            return false;
        }
        let ceiling = match division.max_possible_wins(team) {
            Ok(m) => u64::from(m),
            Err(_) => return false,
        };
        let mut indices = Vec::with_capacity(self.teams.len());
        for name in &self.teams {
            match division.index_of(name) {
                Ok(i) => indices.push(i),
                Err(_) => return false,
            }
        }
        let wins: u64 = indices
            .iter()
            .map(|&i| u64::from(division.team(i).wins))
            .sum();
        let mut games = 0u64;
        for (k, &i) in indices.iter().enumerate() {
            for &j in &indices[k + 1..] {
                games += u64::from(division.team(i).against[j]);
            }
        }
        ceiling * (indices.len() as u64) < wins + games
    }
}

impl std::fmt::Display for Certificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for name in &self.teams {
            write!(f, "{} ", name)?;
        }
        write!(f, "}}")
    }
}
