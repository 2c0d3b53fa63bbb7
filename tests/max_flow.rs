//! Integration tests for the max-flow / min-cut solver.

use division_elimination::{max_flow, FlowError, FlowNetwork};

/// Six-vertex textbook network with max flow 23.
fn textbook() -> FlowNetwork {
    let mut net = FlowNetwork::new(6);
    for (from, to, cap) in [
        (0, 1, 16),
        (0, 2, 13),
        (1, 2, 10),
        (2, 1, 4),
        (1, 3, 12),
        (3, 2, 9),
        (2, 4, 14),
        (4, 3, 7),
        (3, 5, 20),
        (4, 5, 4),
    ] {
        net.add_edge(from, to, cap).unwrap();
    }
    net
}

#[test]
fn textbook_network_value_and_cut() {
    let mut net = textbook();
    let result = max_flow(&mut net, 0, 5).unwrap();
    assert_eq!(result.value, 23);
    assert_eq!(result.in_cut, vec![true, true, true, false, true, false]);

    // cut edges leaving the source side are saturated
    let cut_capacity: i64 = net
        .edges()
        .iter()
        .filter(|e| result.in_cut(e.from) && !result.in_cut(e.to))
        .inspect(|e| assert_eq!(e.flow, e.capacity))
        .map(|e| e.capacity)
        .sum();
    assert_eq!(cut_capacity, 23);
}

#[test]
fn flow_respects_capacity_and_conservation() {
    let mut net = textbook();
    let result = max_flow(&mut net, 0, 5).unwrap();
    for edge in net.edges() {
        assert!(edge.flow >= 0 && edge.flow <= edge.capacity, "{:?}", edge);
    }
    for v in 1..5 {
        assert_eq!(net.net_outflow(v), 0, "vertex {}", v);
    }
    assert_eq!(net.net_outflow(0), result.value);
    assert_eq!(net.net_outflow(5), -result.value);
}

#[test]
fn rerun_starts_from_zero_flow() {
    let mut net = textbook();
    let first = max_flow(&mut net, 0, 5).unwrap();
    let second = max_flow(&mut net, 0, 5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn disconnected_sink_gives_zero_flow() {
    let mut net = FlowNetwork::new(4);
    net.add_edge(0, 1, 5).unwrap();
    net.add_edge(2, 3, 5).unwrap();
    let result = max_flow(&mut net, 0, 3).unwrap();
    assert_eq!(result.value, 0);
    assert_eq!(result.in_cut, vec![true, true, false, false]);
}

#[test]
fn crossing_edge_does_not_block_second_path() {
    let mut net = FlowNetwork::new(4);
    net.add_edge(0, 1, 1).unwrap();
    net.add_edge(0, 2, 1).unwrap();
    net.add_edge(1, 2, 1).unwrap();
    net.add_edge(1, 3, 1).unwrap();
    net.add_edge(2, 3, 1).unwrap();
    assert_eq!(max_flow(&mut net, 0, 3).unwrap().value, 2);
}

#[test]
fn negative_capacity_is_invalid() {
    let mut net = FlowNetwork::new(2);
    net.add_edge(0, 1, -1).unwrap();
    assert!(matches!(
        max_flow(&mut net, 0, 1),
        Err(FlowError::InvalidGraph(_))
    ));
}

#[test]
fn source_equal_to_sink_is_invalid() {
    let mut net = FlowNetwork::new(2);
    net.add_edge(0, 1, 3).unwrap();
    assert!(matches!(
        max_flow(&mut net, 1, 1),
        Err(FlowError::InvalidGraph(_))
    ));
}

#[test]
fn out_of_range_vertices_are_invalid() {
    let mut net = FlowNetwork::new(2);
    assert!(matches!(
        net.add_edge(0, 2, 1),
        Err(FlowError::InvalidGraph(_))
    ));
    assert!(matches!(
        max_flow(&mut net, 0, 7),
        Err(FlowError::InvalidGraph(_))
    ));
}
