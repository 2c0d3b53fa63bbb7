//! Elimination checks: trivial ceiling comparison first, then the max-flow test.

use crate::logic::max_flow::max_flow;
use crate::logic::network::build_network;
use crate::models::{Certificate, CertificateKind, Division, FlowError, TeamIndex};

/// Errors from an elimination query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EliminationError {
    /// The team is not in the division.
    UnknownTeam(String),
    /// The solver rejected the elimination network. Indicates a construction bug.
    InvalidGraph(FlowError),
}

impl std::fmt::Display for EliminationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EliminationError::UnknownTeam(name) => write!(f, "Unknown team: {}", name),
            EliminationError::InvalidGraph(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EliminationError {}

impl From<FlowError> for EliminationError {
    fn from(e: FlowError) -> Self {
        EliminationError::InvalidGraph(e)
    }
}

/// Resolve `team` to its index, reporting unknown names as [`EliminationError::UnknownTeam`].
pub(crate) fn tested_index(
    division: &Division,
    team: &str,
) -> Result<TeamIndex, EliminationError> {
    division
        .index_of(team)
        .map_err(|_| EliminationError::UnknownTeam(team.to_string()))
}

/// Is `team` mathematically out of first place?
pub fn is_eliminated(division: &Division, team: &str) -> Result<bool, EliminationError> {
    Ok(certificate_of_elimination(division, team)?.is_some())
}

/// Teams proving that `team` is eliminated, or `None` if it can still finish first.
pub fn certificate_of_elimination(
    division: &Division,
    team: &str,
) -> Result<Option<Certificate>, EliminationError> {
    let tested = tested_index(division, team)?;
    if let Some(leader) = trivial_elimination(division, tested) {
        let leader_name = division.team(leader).name.clone();
        log::debug!("{} trivially eliminated by {}", team, leader_name);
        return Ok(Some(Certificate::new(
            vec![leader_name],
            CertificateKind::Trivial,
        )));
    }
    min_cut_elimination(division, tested)
}

/// First team (by division order) with more wins than `tested` can reach.
pub fn trivial_elimination(division: &Division, tested: TeamIndex) -> Option<TeamIndex> {
    let ceiling = division.team(tested).max_possible_wins();
    division
        .team_records()
        .iter()
        .enumerate()
        .find(|(i, t)| *i != tested && t.wins > ceiling)
        .map(|(i, _)| i)
}

/// Max-flow test. Must only run once the trivial check has passed.
fn min_cut_elimination(
    division: &Division,
    tested: TeamIndex,
) -> Result<Option<Certificate>, EliminationError> {
    let mut built = build_network(division, tested)?;
    let flow = max_flow(&mut built.network, built.source, built.sink)?;
    let name = &division.team(tested).name;
    log::debug!(
        "{}: max flow {} of {} remaining games",
        name,
        flow.value,
        built.total_games
    );
    if flow.value >= built.total_games {
        return Ok(None);
    }

    let mut members: Vec<TeamIndex> = (0..built.network.vertex_count())
        .filter(|&v| flow.in_cut(v))
        .filter_map(|v| built.team_of(v))
        .collect();
    members.sort_unstable();
    if members.is_empty() {
        return Err(FlowError::InvalidGraph(format!(
            "{} eliminated but the cut holds no team",
            name
        ))
        .into());
    }
    let certificate = Certificate::new(
        members
            .into_iter()
            .map(|i| division.team(i).name.clone())
            .collect(),
        CertificateKind::MinCut,
    );
    log::debug!("{} eliminated by {}", name, certificate);
    debug_assert!(certificate.proves_elimination(division, name));
    Ok(Some(certificate))
}
