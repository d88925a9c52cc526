use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Value, json};

use super::record::SubmissionRecord;
use super::tier::{Tier, TierThresholds};

/// A submission with its layout coordinates. Built once per batch and never
/// mutated afterward; the renderer reads it as-is.
#[derive(Clone, Debug, Serialize)]
pub struct PositionedNode {
    #[serde(flatten)]
    pub record: SubmissionRecord,
    pub x: f64,
    pub y: f64,
}

impl PositionedNode {
    /// The builder never admits a node without an id, so this is total in
    /// practice; the empty string only covers the type.
    pub fn id(&self) -> &str {
        self.record.id.as_deref().unwrap_or_default()
    }
}

/// Directed referral edge: `from` referred `to`. Indices into the graph's
/// node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

/// Counters for every degrade-by-omission path in a build. Malformed records
/// never surface as errors, so this is how dirty batches stay observable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphDiagnostics {
    pub dropped_missing_id: usize,
    pub missing_seed_fallbacks: usize,
    pub unresolved_referrers: usize,
}

/// Output of one batch build: positioned nodes, resolved referral edges, and
/// the fan-out tally keyed by node id. Rebuilt in full on every invocation.
#[derive(Clone, Debug)]
pub struct ReferralGraph {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
    pub fanout: HashMap<String, u32>,
    pub diagnostics: GraphDiagnostics,
}

impl ReferralGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn fanout_of(&self, id: &str) -> u32 {
        self.fanout.get(id).copied().unwrap_or(0)
    }

    pub fn tier_of(&self, id: &str, thresholds: &TierThresholds) -> Tier {
        thresholds.classify(self.fanout_of(id))
    }

    pub fn endpoints(&self, edge: Edge) -> (&PositionedNode, &PositionedNode) {
        (&self.nodes[edge.from], &self.nodes[edge.to])
    }

    /// JSON shape handed to the rendering collaborator: every node with its
    /// passthrough fields, coordinates, fan-out, and tier; edges as node-id
    /// pairs; the raw fan-out tally alongside.
    pub fn render_payload(&self, thresholds: &TierThresholds) -> serde_json::Result<Value> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let mut value = serde_json::to_value(node)?;
            if let Value::Object(map) = &mut value {
                let fanout = self.fanout_of(node.id());
                map.insert("fanout".to_string(), Value::from(fanout));
                map.insert(
                    "tier".to_string(),
                    Value::from(self.tier_of(node.id(), thresholds).label()),
                );
            }
            nodes.push(value);
        }

        let edges = self
            .edges
            .iter()
            .map(|&edge| {
                let (from, to) = self.endpoints(edge);
                json!({ "from": from.id(), "to": to.id() })
            })
            .collect::<Vec<_>>();

        Ok(json!({
            "nodes": nodes,
            "edges": edges,
            "fanout": self.fanout,
        }))
    }
}
