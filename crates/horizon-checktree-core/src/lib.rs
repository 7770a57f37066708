//! Core types for Horizon Checktree.
//!
//! This crate provides the foundational pieces shared by the checkbox tree
//! model and anything that renders it:
//!
//! - **Check states**: the tri-state [`CheckState`] (unchecked, checked, partial)
//! - **Node keys**: [`NodeValue`], the string-or-integer key of every node
//! - **Errors**: the construction-time error taxonomy in [`Error`]
//! - **Logging**: `tracing` targets, span names and tree formatting options
//!
//! # Example
//!
//! ```
//! use horizon_checktree_core::{CheckState, NodeValue};
//!
//! let key = NodeValue::from("0-1");
//! assert_eq!(key.to_string(), "0-1");
//!
//! let state = CheckState::PartiallyChecked;
//! assert!(state.is_checked());
//! assert_eq!(state.toggle(true), CheckState::Checked);
//! ```

mod check_state;
mod error;
pub mod logging;
mod value;

pub use check_state::CheckState;
pub use error::{Error, RadioGroupProblem, Result};
pub use logging::{PerfSpan, TreeFormatOptions, TreeStyle};
pub use value::NodeValue;
