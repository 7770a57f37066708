//! Checkbox tree model for Horizon Checktree.
//!
//! This module holds the state behind a hierarchical checkbox tree widget.
//! The renderer owns no state of its own: it draws from a [`TreeModel`],
//! forwards user actions to the model's operations and keeps the model each
//! operation returns.
//!
//! - Every node has a tri-state check value, an expansion flag and a
//!   disabled flag
//! - Checking a parent cascades to its descendants and percolates up to its
//!   ancestors
//! - Radio groups keep exactly one child checked
//! - Filtering hides nodes without losing them
//!
//! # Core Types
//!
//! - `NodeConfig`: One node of the nested input list
//! - `TreeOptions`: Behavior switches (`checkModel`, cascading, initial lists)
//! - `TreeModel`: The flattened, immutable model
//! - `NodeRecord`: The normalized state of one node
//! - `TreeDebug`: Text dump of a model for logs and tests
//!
//! # Example
//!
//! ```
//! use horizon_checktree::model::{CheckModel, NodeConfig, TreeModel, TreeOptions};
//!
//! let nodes = vec![NodeConfig::parent(
//!     "colors",
//!     "Colors",
//!     vec![NodeConfig::leaf("red", "Red"), NodeConfig::leaf("blue", "Blue")],
//! )];
//! let options = TreeOptions::default().with_check_model(CheckModel::All);
//!
//! let model = TreeModel::new(&nodes, options).unwrap();
//! let model = model.toggle_checked("red").toggle_checked("blue");
//! assert_eq!(
//!     model.get_checked(),
//!     vec!["colors", "red", "blue"]
//! );
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐  new   ┌─────────────┐  draw  ┌─────────────┐
//! │  NodeConfig  │───────>│  TreeModel  │───────>│  Renderer   │
//! │ TreeOptions  │        │  (records)  │<───────│             │
//! └──────────────┘        └─────────────┘ toggle └─────────────┘
//!                                │
//!                                └── returns a new TreeModel
//! ```
//!
//! Records are shared between model versions through `Arc`; an operation
//! copies only the records it changes.

mod config;
mod debug;
mod filter;
mod node;
mod options;
mod toggle;
mod tree_model;

pub use config::NodeConfig;
pub use debug::TreeDebug;
pub use node::{NodeKind, NodeProp, NodeRecord};
pub use options::{CheckModel, TreeOptions};
pub use tree_model::TreeModel;

pub use horizon_checktree_core::{CheckState, NodeValue};
