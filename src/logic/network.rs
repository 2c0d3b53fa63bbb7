//! Elimination network for one tested team.
//!
//! Source feeds one vertex per pair of other teams that still meet, each pair passes its
//! games on to its two teams, and every team drains into the sink up to the number of wins
//! it may still collect without passing the tested team's ceiling.

use crate::models::{Division, FlowError, FlowNetwork, TeamIndex, VertexId};

/// What a vertex of the elimination network stands for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VertexKind {
    Source,
    Sink,
    /// Remaining games between two other teams (division indices, first < second).
    Pair(TeamIndex, TeamIndex),
    /// Another team (division index).
    Team(TeamIndex),
}

/// A freshly built network plus the tags needed to read a cut back as teams.
#[derive(Clone, Debug)]
pub struct EliminationNetwork {
    pub network: FlowNetwork,
    /// Tag per vertex, indexed by `VertexId`.
    pub kinds: Vec<VertexKind>,
    pub source: VertexId,
    pub sink: VertexId,
    pub tested: TeamIndex,
    /// Games left among the other teams; the flow value needed to keep the tested team alive.
    pub total_games: i64,
}

impl EliminationNetwork {
    /// Division team behind `vertex`, if it is a team vertex.
    pub fn team_of(&self, vertex: VertexId) -> Option<TeamIndex> {
        match self.kinds.get(vertex) {
            Some(VertexKind::Team(i)) => Some(*i),
            _ => None,
        }
    }
}

/// Build the network for `tested`.
///
/// Only pairs with games left get a vertex. Pair-to-team edges get `total_games + 1`,
/// which no flow can saturate. Fails if some other team already has more wins than
/// `tested` can reach: that case belongs to the trivial check and would need a negative
/// sink capacity here.
pub fn build_network(
    division: &Division,
    tested: TeamIndex,
) -> Result<EliminationNetwork, FlowError> {
    let n = division.number_of_teams();
    if tested >= n {
        return Err(FlowError::InvalidGraph(format!(
            "tested team {} outside division of {}",
            tested, n
        )));
    }
    let teams = division.team_records();
    let ceiling = i64::from(teams[tested].max_possible_wins());

    let others: Vec<TeamIndex> = (0..n).filter(|&i| i != tested).collect();
    let mut pairs = Vec::new();
    let mut total_games = 0i64;
    for (k, &i) in others.iter().enumerate() {
        for &j in &others[k + 1..] {
            let games = teams[i].against[j];
            if games > 0 {
                pairs.push((i, j, i64::from(games)));
                total_games += i64::from(games);
            }
        }
    }
    let unbounded = total_games + 1;

    let mut network = FlowNetwork::new(0);
    let mut kinds = Vec::with_capacity(2 + others.len() + pairs.len());
    let source = network.add_vertex();
    kinds.push(VertexKind::Source);

    let mut team_vertex: Vec<Option<VertexId>> = vec![None; n];
    for &i in &others {
        team_vertex[i] = Some(network.add_vertex());
        kinds.push(VertexKind::Team(i));
    }
    let sink = network.add_vertex();
    kinds.push(VertexKind::Sink);

    for &(i, j, games) in &pairs {
        let pair = network.add_vertex();
        kinds.push(VertexKind::Pair(i, j));
        network.add_edge(source, pair, games)?;
        for team in [i, j] {
            let v = team_vertex[team].ok_or_else(|| {
                FlowError::InvalidGraph(format!("no vertex for team {}", team))
            })?;
            network.add_edge(pair, v, unbounded)?;
        }
    }

    for &i in &others {
        let headroom = ceiling - i64::from(teams[i].wins);
        if headroom < 0 {
            return Err(FlowError::InvalidGraph(format!(
                "{} already has {} wins, more than {} can reach ({})",
                teams[i].name, teams[i].wins, teams[tested].name, ceiling
            )));
        }
        let v = team_vertex[i]
            .ok_or_else(|| FlowError::InvalidGraph(format!("no vertex for team {}", i)))?;
        network.add_edge(v, sink, headroom)?;
    }

    Ok(EliminationNetwork {
        network,
        kinds,
        source,
        sink,
        tested,
        total_games,
    })
}
