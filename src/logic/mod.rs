//! Elimination logic: flow network, max-flow solver, checks, schedule reader, reports.

mod elimination;
mod max_flow;
mod network;
mod report;
mod schedule;

pub use elimination::{
    certificate_of_elimination, is_eliminated, trivial_elimination, EliminationError,
};
pub use max_flow::{max_flow, MaxFlow};
pub use network::{build_network, EliminationNetwork, VertexKind};
pub use report::{elimination_report, team_status, EliminationReport, TeamStatus};
pub use schedule::{parse_schedule, read_schedule, ScheduleError};
