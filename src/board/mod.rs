mod build;
mod graph;
mod handle;
mod record;
mod tier;

pub use build::build_graph;
pub use graph::{Edge, GraphDiagnostics, PositionedNode, ReferralGraph};
pub use handle::normalize;
pub use record::{SubmissionRecord, load_batch, parse_batch};
pub use tier::{Tier, TierThresholds};
