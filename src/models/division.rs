//! Division: immutable snapshot of the standings and the remaining schedule.

use crate::models::team::{Team, TeamIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Errors raised while building or querying a division.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DivisionError {
    /// No team with this name in the division.
    UnknownTeam(String),
    /// A division needs at least one team.
    EmptyDivision,
    /// Team names must not be blank.
    EmptyTeamName,
    /// Two teams share a name.
    DuplicateTeamName(String),
    /// A schedule row does not have one entry per division team.
    WrongScheduleLength {
        team: String,
        expected: usize,
        found: usize,
    },
    /// A team has games scheduled against itself.
    SelfScheduled(String),
    /// `against[a][b] != against[b][a]`.
    AsymmetricSchedule { first: String, second: String },
    /// Wins plus remaining games, or the scheduled games, do not fit in a `u32`.
    CountOverflow(String),
    /// Division games exceed the team's remaining games.
    RemainingTooSmall {
        team: String,
        remaining: u32,
        scheduled: u32,
    },
}

impl std::fmt::Display for DivisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivisionError::UnknownTeam(name) => write!(f, "Unknown team: {}", name),
            DivisionError::EmptyDivision => write!(f, "A division needs at least one team"),
            DivisionError::EmptyTeamName => write!(f, "Team names must not be empty"),
            DivisionError::DuplicateTeamName(name) => {
                write!(f, "Team {} appears more than once", name)
            }
            DivisionError::WrongScheduleLength {
                team,
                expected,
                found,
            } => write!(
                f,
                "Schedule row for {} has {} entries, expected {}",
                team, found, expected
            ),
            DivisionError::SelfScheduled(name) => {
                write!(f, "{} has games scheduled against itself", name)
            }
            DivisionError::AsymmetricSchedule { first, second } => write!(
                f,
                "Remaining games between {} and {} differ depending on direction",
                first, second
            ),
            DivisionError::CountOverflow(name) => {
                write!(f, "Game counts for {} are too large", name)
            }
            DivisionError::RemainingTooSmall {
                team,
                remaining,
                scheduled,
            } => write!(
                f,
                "{} has {} remaining games but {} scheduled in the division",
                team, remaining, scheduled
            ),
        }
    }
}

impl std::error::Error for DivisionError {}

/// All teams of a division, in input order, with a name lookup.
///
/// Built once through [`Division::new`], which checks the schedule invariants; read-only
/// afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Team>", into = "Vec<Team>")]
pub struct Division {
    teams: Vec<Team>,
    index: HashMap<String, TeamIndex>,
}

impl Division {
    /// Validate the teams and build the division.
    pub fn new(teams: Vec<Team>) -> Result<Self, DivisionError> {
        if teams.is_empty() {
            return Err(DivisionError::EmptyDivision);
        }
        let n = teams.len();
        let mut index = HashMap::with_capacity(n);
        for (i, team) in teams.iter().enumerate() {
            if team.name.trim().is_empty() {
                return Err(DivisionError::EmptyTeamName);
            }
            if index.insert(team.name.clone(), i).is_some() {
                return Err(DivisionError::DuplicateTeamName(team.name.clone()));
            }
            if team.against.len() != n {
                return Err(DivisionError::WrongScheduleLength {
                    team: team.name.clone(),
                    expected: n,
                    found: team.against.len(),
                });
            }
        }
        for (i, team) in teams.iter().enumerate() {
            if team.against[i] != 0 {
                return Err(DivisionError::SelfScheduled(team.name.clone()));
            }
            for (j, other) in teams.iter().enumerate().skip(i + 1) {
                if team.against[j] != other.against[i] {
                    return Err(DivisionError::AsymmetricSchedule {
                        first: team.name.clone(),
                        second: other.name.clone(),
                    });
                }
            }
            if team.wins.checked_add(team.remaining).is_none() {
                return Err(DivisionError::CountOverflow(team.name.clone()));
            }
            let scheduled = team
                .scheduled_in_division()
                .ok_or_else(|| DivisionError::CountOverflow(team.name.clone()))?;
            if scheduled > team.remaining {
                return Err(DivisionError::RemainingTooSmall {
                    team: team.name.clone(),
                    remaining: team.remaining,
                    scheduled,
                });
            }
        }
        Ok(Self { teams, index })
    }

    pub fn number_of_teams(&self) -> usize {
        self.teams.len()
    }

    /// Team names in division order.
    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(|t| t.name.as_str())
    }

    pub fn team_records(&self) -> &[Team] {
        &self.teams
    }

    pub fn index_of(&self, name: &str) -> Result<TeamIndex, DivisionError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| DivisionError::UnknownTeam(name.to_string()))
    }

    /// Team at `index`. Panics if out of range, like slice indexing.
    pub fn team(&self, index: TeamIndex) -> &Team {
        &self.teams[index]
    }

    pub fn get(&self, name: &str) -> Result<&Team, DivisionError> {
        self.index_of(name).map(|i| &self.teams[i])
    }

    pub fn wins(&self, name: &str) -> Result<u32, DivisionError> {
        self.get(name).map(|t| t.wins)
    }

    pub fn losses(&self, name: &str) -> Result<u32, DivisionError> {
        self.get(name).map(|t| t.losses)
    }

    pub fn remaining(&self, name: &str) -> Result<u32, DivisionError> {
        self.get(name).map(|t| t.remaining)
    }

    /// Remaining games between two teams.
    pub fn against(&self, team1: &str, team2: &str) -> Result<u32, DivisionError> {
        let i = self.index_of(team1)?;
        let j = self.index_of(team2)?;
        Ok(self.teams[i].against[j])
    }

    pub fn max_possible_wins(&self, name: &str) -> Result<u32, DivisionError> {
        self.get(name).map(Team::max_possible_wins)
    }
}

impl TryFrom<Vec<Team>> for Division {
    type Error = DivisionError;

    fn try_from(teams: Vec<Team>) -> Result<Self, Self::Error> {
        Division::new(teams)
    }
}

impl From<Division> for Vec<Team> {
    fn from(division: Division) -> Self {
        division.teams
    }
}
