//! Horizon Checktree - state model for hierarchical checkbox trees.
//!
//! This is the main crate that re-exports the core types and provides the
//! tree model itself.
//!
//! # Example
//!
//! ```
//! use horizon_checktree::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let nodes = NodeConfig::list_from_json(
//!         r#"[{"value": "mars", "label": "Mars", "children": [
//!             {"value": "phobos", "label": "Phobos", "checked": true},
//!             {"value": "deimos", "label": "Deimos"}
//!         ]}]"#,
//!     )?;
//!
//!     let model = TreeModel::new(&nodes, TreeOptions::default())?;
//!     assert_eq!(model.get_node("mars").unwrap().check_state(), CheckState::PartiallyChecked);
//!
//!     let model = model.toggle_checked("deimos");
//!     assert_eq!(model.get_node("mars").unwrap().check_state(), CheckState::Checked);
//!     Ok(())
//! }
//! ```

pub use horizon_checktree_core::*;

pub mod model;
pub mod prelude;
