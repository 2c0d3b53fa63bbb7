//! Division elimination: which teams can no longer finish first, and why.

pub mod logic;
pub mod models;

pub use logic::{
    build_network, certificate_of_elimination, elimination_report, is_eliminated, max_flow,
    parse_schedule, read_schedule, team_status, trivial_elimination, EliminationError,
    EliminationNetwork, EliminationReport, MaxFlow, ScheduleError, TeamStatus, VertexKind,
};
pub use models::{
    Certificate, CertificateKind, Division, DivisionError, EdgeId, FlowEdge, FlowError,
    FlowNetwork, Team, TeamIndex, VertexId,
};
