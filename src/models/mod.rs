//! Data structures: teams, the division snapshot, flow networks and certificates.

mod certificate;
mod division;
mod network;
mod team;

pub use certificate::{Certificate, CertificateKind};
pub use division::{Division, DivisionError};
pub use network::{EdgeId, FlowEdge, FlowError, FlowNetwork, VertexId};
pub use team::{Team, TeamIndex};
