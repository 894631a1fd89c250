//! fc-graph: directed flow-graph model for flowcut.
//!
//! Provides:
//! - Arena-backed Node / Edge / Graph with name lookup
//! - Declarative graph builder with validation
//! - Structural consistency checks
//!
//! # Example
//!
//! ```
//! use fc_graph::GraphBuilder;
//!
//! let graph = GraphBuilder::<()>::new()
//!     .nodes(["s", "a", "t"])
//!     .edge("s", "a", 3.0)
//!     .edge("a", "t", 2.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.neighbours("s").unwrap()[0].name, "a");
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node, NodeLabel};
