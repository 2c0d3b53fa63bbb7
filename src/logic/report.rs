//! Elimination status of every team in a division.

use crate::logic::elimination::{certificate_of_elimination, tested_index, EliminationError};
use crate::models::{Certificate, Division};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standings line plus the elimination verdict for one team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStatus {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub remaining: u32,
    pub max_possible_wins: u32,
    pub eliminated: bool,
    /// Present exactly when `eliminated`.
    pub certificate: Option<Certificate>,
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.certificate {
            Some(certificate) => write!(
                f,
                "{} is eliminated by the subset R = {}",
                self.name, certificate
            ),
            None => write!(f, "{} is not eliminated", self.name),
        }
    }
}

/// Verdicts for all teams, in division order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EliminationReport {
    pub computed_at: DateTime<Utc>,
    pub standings: Vec<TeamStatus>,
}

impl EliminationReport {
    pub fn eliminated(&self) -> impl Iterator<Item = &TeamStatus> + '_ {
        self.standings.iter().filter(|s| s.eliminated)
    }

    pub fn status(&self, name: &str) -> Option<&TeamStatus> {
        self.standings.iter().find(|s| s.name == name)
    }
}

impl std::fmt::Display for EliminationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for status in &self.standings {
            writeln!(f, "{}", status)?;
        }
        Ok(())
    }
}

/// Status of a single team.
pub fn team_status(division: &Division, name: &str) -> Result<TeamStatus, EliminationError> {
    let team = division.team(tested_index(division, name)?);
    let certificate = certificate_of_elimination(division, name)?;
    Ok(TeamStatus {
        name: team.name.clone(),
        wins: team.wins,
        losses: team.losses,
        remaining: team.remaining,
        max_possible_wins: team.max_possible_wins(),
        eliminated: certificate.is_some(),
        certificate,
    })
}

/// Run the elimination check for every team.
pub fn elimination_report(division: &Division) -> Result<EliminationReport, EliminationError> {
    let standings = division
        .teams()
        .map(|name| team_status(division, name))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!(
        "elimination report: {} of {} teams eliminated",
        standings.iter().filter(|s| s.eliminated).count(),
        standings.len()
    );
    Ok(EliminationReport {
        computed_at: Utc::now(),
        standings,
    })
}
