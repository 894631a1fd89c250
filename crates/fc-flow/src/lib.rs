//! Maximum flow and minimum cut for flowcut graphs.
//!
//! The solver is Ford-Fulkerson with breadth-first augmenting paths
//! (Edmonds-Karp). Each augmentation pushes the path's bottleneck residual;
//! the loop ends when the sink is no longer reachable in the residual graph,
//! and that drained residual state is what the minimum cut is read from.

pub mod augment;
pub mod cut;
pub mod error;
pub mod search;
pub mod traits;

pub use augment::{FlowConfig, FlowSolution, max_flow, max_flow_with};
pub use cut::{minimum_cut, minimum_cut_with};
pub use error::{FlowError, FlowResult};
pub use search::{AugmentingPath, Direction, PathStep, augmenting_path, residual_reachable};
pub use traits::MaxFlowExt;
