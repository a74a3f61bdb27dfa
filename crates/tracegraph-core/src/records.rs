//! Utilities for records output format
//!
//! Line prefixes:
//! - `H`: header with run metadata
//! - `S`: one traversal or settle step
//! - `P`: one step of a shortest path
//! - `X`: outcome line for a path search

use crate::format::{format_cost, format_weight};
use crate::graph::types::{NodeId, ShortestPathResult, TraceEdge};

/// Render a node id field, using `-` for the virtual source
fn origin_field(from: Option<NodeId>) -> String {
    from.map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format a step line: `<prefix> <index> <from> -> <to> type=<kind> weight=<w>`
pub fn format_step_record(prefix: char, index: usize, step: &TraceEdge) -> String {
    format!(
        "{} {} {} -> {} type={} weight={}",
        prefix,
        index,
        origin_field(step.from),
        step.to,
        step.kind,
        format_weight(step.weight)
    )
}

/// Records for a traversal trace, header first
pub fn traversal_records(algorithm: &str, start: NodeId, trace: &[TraceEdge]) -> Vec<String> {
    let mut lines = Vec::with_capacity(trace.len() + 1);
    lines.push(format!(
        "H tracegraph=1 algorithm={} start={} steps={}",
        algorithm,
        start,
        trace.len()
    ));
    lines.extend(
        trace
            .iter()
            .enumerate()
            .map(|(i, step)| format_step_record('S', i, step)),
    );
    lines
}

/// Records for a shortest-path search: header, settle steps, path steps, outcome
pub fn shortest_path_records(algorithm: &str, result: &ShortestPathResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.visited_edges.len() + result.shortest_path.len() + 2);
    lines.push(format!(
        "H tracegraph=1 algorithm={} start={} end={} steps={} path={}",
        algorithm,
        result.start,
        result.end,
        result.visited_edges.len(),
        result.shortest_path.len()
    ));
    lines.extend(
        result
            .visited_edges
            .iter()
            .enumerate()
            .map(|(i, step)| format_step_record('S', i, step)),
    );
    lines.extend(
        result
            .shortest_path
            .iter()
            .enumerate()
            .map(|(i, step)| format_step_record('P', i, step)),
    );
    lines.push(match result.cost {
        Some(cost) if result.found() => format!(
            "X found=true hops={} cost={}",
            result.path_length(),
            format_cost(cost)
        ),
        _ => "X found=false".to_string(),
    });
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::SeedMarker;

    #[test]
    fn test_format_step_record_seed() {
        let seed = SeedMarker::new(NodeId(1)).into_trace();
        assert_eq!(
            format_step_record('S', 0, &seed),
            "S 0 - -> 1 type=directed weight=-"
        );
    }

    #[test]
    fn test_traversal_records_header() {
        let trace = vec![
            SeedMarker::new(NodeId(1)).into_trace(),
            TraceEdge::step(NodeId(1), NodeId(2)),
        ];
        let lines = traversal_records("bfs", NodeId(1), &trace);
        assert_eq!(lines[0], "H tracegraph=1 algorithm=bfs start=1 steps=2");
        assert_eq!(lines[2], "S 1 1 -> 2 type=directed weight=-");
    }

    #[test]
    fn test_shortest_path_records_not_found() {
        let result = ShortestPathResult {
            start: NodeId(1),
            end: NodeId(2),
            shortest_path: vec![],
            visited_edges: vec![SeedMarker::new(NodeId(1)).into_trace()],
            cost: None,
        };
        let lines = shortest_path_records("dijkstra", &result);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.last().unwrap(), "X found=false");
    }
}
