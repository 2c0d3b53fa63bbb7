//! Maximum flow / minimum cut (Edmonds-Karp: breadth-first shortest augmenting paths).

use crate::models::{EdgeId, FlowError, FlowNetwork, VertexId};
use std::collections::VecDeque;

/// Result of a max-flow run. Per-edge flows are left in the network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaxFlow {
    pub value: i64,
    /// `in_cut[v]`: vertex `v` is reachable from the source in the final residual graph.
    pub in_cut: Vec<bool>,
}

impl MaxFlow {
    /// Whether `vertex` lies on the source side of the minimum cut.
    pub fn in_cut(&self, vertex: VertexId) -> bool {
        self.in_cut.get(vertex).copied().unwrap_or(false)
    }
}

/// Compute a maximum flow from `source` to `sink`.
///
/// Existing flow on the edges is discarded first. Fails with [`FlowError::InvalidGraph`]
/// when a capacity is negative, the terminals coincide or lie outside the network.
pub fn max_flow(
    network: &mut FlowNetwork,
    source: VertexId,
    sink: VertexId,
) -> Result<MaxFlow, FlowError> {
    validate(network, source, sink)?;
    network.reset_flow();

    let mut value = 0i64;
    let mut augmentations = 0usize;
    loop {
        let (marked, edge_to) = residual_search(network, source);
        if !marked[sink] {
            log::trace!(
                "max flow {} after {} augmenting paths ({} vertices, {} edges)",
                value,
                augmentations,
                network.vertex_count(),
                network.edges().len()
            );
            return Ok(MaxFlow {
                value,
                in_cut: marked,
            });
        }

        let path = trace_path(network, &edge_to, source, sink)?;
        let bottleneck = path
            .iter()
            .map(|&(edge, from)| network.edge(edge).residual_capacity_from(from))
            .min()
            .unwrap_or(0);
        if bottleneck <= 0 {
            return Err(FlowError::InvalidGraph(
                "augmenting path without residual capacity".to_string(),
            ));
        }
        for &(edge, from) in &path {
            network.edge_mut(edge).add_residual_flow_from(from, bottleneck);
        }
        value += bottleneck;
        augmentations += 1;
    }
}

fn validate(network: &FlowNetwork, source: VertexId, sink: VertexId) -> Result<(), FlowError> {
    let n = network.vertex_count();
    if source >= n || sink >= n {
        return Err(FlowError::InvalidGraph(format!(
            "terminals {} -> {} outside {} vertices",
            source, sink, n
        )));
    }
    if source == sink {
        return Err(FlowError::InvalidGraph(format!(
            "source and sink are both vertex {}",
            source
        )));
    }
    if let Some(edge) = network.edges().iter().find(|e| e.capacity < 0) {
        return Err(FlowError::InvalidGraph(format!(
            "edge {} -> {} has negative capacity {}",
            edge.from, edge.to, edge.capacity
        )));
    }
    Ok(())
}

/// Breadth-first search over edges with positive residual capacity.
fn residual_search(network: &FlowNetwork, source: VertexId) -> (Vec<bool>, Vec<Option<EdgeId>>) {
    let n = network.vertex_count();
    let mut marked = vec![false; n];
    let mut edge_to = vec![None; n];
    let mut queue = VecDeque::new();
    marked[source] = true;
    queue.push_back(source);
    while let Some(v) = queue.pop_front() {
        for &e in network.incident(v) {
            let edge = network.edge(e);
            let w = edge.other(v);
            if !marked[w] && edge.residual_capacity_from(v) > 0 {
                marked[w] = true;
                edge_to[w] = Some(e);
                queue.push_back(w);
            }
        }
    }
    (marked, edge_to)
}

/// Walk `edge_to` back from the sink. Each step is `(edge, vertex the flow leaves)`.
fn trace_path(
    network: &FlowNetwork,
    edge_to: &[Option<EdgeId>],
    source: VertexId,
    sink: VertexId,
) -> Result<Vec<(EdgeId, VertexId)>, FlowError> {
    let mut path = Vec::new();
    let mut v = sink;
    while v != source {
        let Some(e) = edge_to[v] else {
            return Err(FlowError::InvalidGraph(format!(
                "vertex {} reached without a parent edge",
                v
            )));
        };
        let from = network.edge(e).other(v);
        path.push((e, from));
        v = from;
    }
    Ok(path)
}
