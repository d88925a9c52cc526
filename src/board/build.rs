use std::collections::HashMap;

use tracing::{debug, warn};

use crate::layout::{LayoutOptions, position};

use super::graph::{Edge, GraphDiagnostics, PositionedNode, ReferralGraph};
use super::handle::normalize;
use super::record::SubmissionRecord;

/// Turns a flat batch of submissions into the positioned referral graph.
///
/// Two passes in input order: position every usable record and index it by
/// normalized handle, then resolve each record's referrer handle against that
/// index. A record without an id is dropped outright; a referrer handle that
/// matches nothing in the batch is the expected steady state, not an error.
/// Nothing here throws for a malformed record and nothing is kept between
/// calls, so rebuilding from the same batch gives the same graph.
pub fn build_graph(records: Vec<SubmissionRecord>, options: &LayoutOptions) -> ReferralGraph {
    let mut nodes = Vec::with_capacity(records.len());
    let mut by_handle: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut diagnostics = GraphDiagnostics::default();

    for record in records {
        if record.id.as_deref().is_none_or(str::is_empty) {
            diagnostics.dropped_missing_id += 1;
            warn!(handle = %record.handle, "dropping record without an id");
            continue;
        }

        let seed = match record.position_seed {
            Some(seed) => seed,
            None => {
                diagnostics.missing_seed_fallbacks += 1;
                let id = record.id.as_deref().unwrap_or_default();
                warn!(id, "record has no stored position seed; deriving a fallback");
                options.seed_fallback.seed_for(id)
            }
        };

        let (x, y) = position(seed, options.canvas_width, options.canvas_height);
        let handle = normalize(Some(&record.handle));
        // Handles are unique upstream; if a duplicate slips through, the
        // later record wins the index slot, matching the write side.
        if !handle.is_empty() {
            by_handle.insert(handle, nodes.len());
        }
        nodes.push(PositionedNode { record, x, y });
    }

    let mut edges = Vec::new();
    let mut fanout: HashMap<String, u32> = HashMap::new();

    for (index, node) in nodes.iter().enumerate() {
        let referrer = normalize(node.record.referrer_handle.as_deref());
        if referrer.is_empty() {
            continue;
        }

        match by_handle.get(&referrer) {
            Some(&from) => {
                edges.push(Edge { from, to: index });
                *fanout.entry(nodes[from].id().to_string()).or_insert(0) += 1;
            }
            None => {
                diagnostics.unresolved_referrers += 1;
                debug!(
                    id = node.id(),
                    referrer = %referrer,
                    "referrer not present in this batch"
                );
            }
        }
    }

    ReferralGraph {
        nodes,
        edges,
        fanout,
        diagnostics,
    }
}
