//! Directed capacitated graph used by the max-flow solver.
//!
//! Vertices are plain indices `0..vertex_count`; edges live in one `Vec` and every vertex
//! keeps the indices of the edges touching it (both directions), so the residual graph can
//! be walked without a second edge list.

use serde::{Deserialize, Serialize};

/// Index of a vertex in a [`FlowNetwork`].
pub type VertexId = usize;

/// Index of an edge in a [`FlowNetwork`].
pub type EdgeId = usize;

/// Malformed network handed to the solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FlowError {
    InvalidGraph(String),
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::InvalidGraph(reason) => write!(f, "Invalid flow network: {}", reason),
        }
    }
}

impl std::error::Error for FlowError {}

/// A directed edge with integer capacity and the flow currently routed through it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub capacity: i64,
    pub flow: i64,
}

impl FlowEdge {
    /// Endpoint opposite to `vertex`.
    pub fn other(&self, vertex: VertexId) -> VertexId {
        if vertex == self.from {
            self.to
        } else {
            self.from
        }
    }

    /// Residual capacity when walking the edge away from `vertex`: unused capacity
    /// forwards, cancellable flow backwards.
    pub fn residual_capacity_from(&self, vertex: VertexId) -> i64 {
        if vertex == self.from {
            self.capacity - self.flow
        } else {
            self.flow
        }
    }

    /// Push `delta` units along the edge starting at `vertex`.
    pub fn add_residual_flow_from(&mut self, vertex: VertexId, delta: i64) {
        if vertex == self.from {
            self.flow += delta;
        } else {
            self.flow -= delta;
        }
    }
}

/// Arena flow network.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FlowNetwork {
    edges: Vec<FlowEdge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl FlowNetwork {
    /// Network with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Add a fresh vertex and return its id.
    pub fn add_vertex(&mut self) -> VertexId {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Add an edge with zero flow. Capacities are checked by the solver, endpoints here.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        capacity: i64,
    ) -> Result<EdgeId, FlowError> {
        let n = self.vertex_count();
        if from >= n || to >= n {
            return Err(FlowError::InvalidGraph(format!(
                "edge {} -> {} outside {} vertices",
                from, to, n
            )));
        }
        let id = self.edges.len();
        self.edges.push(FlowEdge {
            from,
            to,
            capacity,
            flow: 0,
        });
        self.adjacency[from].push(id);
        if to != from {
            self.adjacency[to].push(id);
        }
        Ok(id)
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> &FlowEdge {
        &self.edges[id]
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> &mut FlowEdge {
        &mut self.edges[id]
    }

    /// Edges incident to `vertex`, outgoing and incoming.
    pub fn incident(&self, vertex: VertexId) -> &[EdgeId] {
        &self.adjacency[vertex]
    }

    /// Net flow leaving `vertex`.
    pub fn net_outflow(&self, vertex: VertexId) -> i64 {
        self.adjacency[vertex]
            .iter()
            .map(|&e| {
                let edge = &self.edges[e];
                if edge.from == vertex && edge.to == vertex {
                    0
                } else if edge.from == vertex {
                    edge.flow
                } else {
                    -edge.flow
                }
            })
            .sum()
    }

    /// Set every edge's flow back to zero.
    pub fn reset_flow(&mut self) {
        for edge in &mut self.edges {
            edge.flow = 0;
        }
    }
}
