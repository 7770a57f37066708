//! Prelude module for Horizon Checktree.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_checktree::prelude::*;
//! ```
//!
//! This provides access to:
//! - Model construction (`NodeConfig`, `TreeOptions`, `TreeModel`)
//! - Node state (`NodeRecord`, `CheckState`, `NodeValue`)
//! - Error handling (`Error`, `Result`)

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    CheckModel, NodeConfig, NodeKind, NodeProp, NodeRecord, TreeDebug, TreeModel, TreeOptions,
};

// ============================================================================
// Core Types
// ============================================================================

pub use crate::{CheckState, NodeValue};

// ============================================================================
// Errors
// ============================================================================

pub use crate::{Error, RadioGroupProblem, Result};
