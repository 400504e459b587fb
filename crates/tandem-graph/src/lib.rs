#![forbid(unsafe_code)]

//! Mutable directed graphs over arbitrary hashable vertex values.
//!
//! A [`Graph`] is always paired with its transverse (reverse-edge) graph. Both are kept in
//! lock-step: adding `a -> b` to one adds `b -> a` to the other, and removing a vertex drops its
//! edges in both directions on both sides.
//!
//! Cycle detection and topological ordering share a single depth-first traversal whose result is
//! cached until the next structural change.
//!
//! ```
//! use tandem_graph::Graph;
//!
//! let mut g: Graph<&str> = Graph::new();
//! g.add_edge("shirt", "tie");
//! g.add_edge("tie", "jacket");
//! g.add_edge("trousers", "shoes");
//!
//! assert!(!g.has_cycle());
//! let order = g.topological_order().unwrap();
//! let pos = |v: &str| order.iter().position(|x| *x == v).unwrap();
//! assert!(pos("shirt") < pos("tie") && pos("tie") < pos("jacket"));
//!
//! assert_eq!(g.transverse().successors(&"jacket"), Some(vec!["tie"]));
//! ```

pub mod error;
mod graph;
pub mod options;
pub mod view;

pub use error::{Error, Result};
pub use graph::Graph;
pub use options::GraphOptions;
pub use view::{EdgeSetView, VertexSetView};
