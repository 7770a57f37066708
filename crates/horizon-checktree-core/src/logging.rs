//! Logging and debugging facilities for Horizon Checktree.
//!
//! This module provides:
//! - Target and span names for filtering `tracing` output by subsystem
//! - Formatting options for text dumps of a tree
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Horizon Checktree uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! tracing_subscriber::fmt()
//!     .with_env_filter(EnvFilter::new("horizon_checktree::toggle=trace"))
//!     .init();
//! ```

/// Span names used throughout Horizon Checktree for tracing.
pub mod span_names {
    /// Building a model from a node list.
    pub const BUILD: &str = "horizon_checktree::build";
    /// Applying or clearing a filter.
    pub const FILTER: &str = "horizon_checktree::filter";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Model construction and option updates.
    pub const MODEL: &str = "horizon_checktree::model";
    /// Check, expand and disable toggles.
    pub const TOGGLE: &str = "horizon_checktree::toggle";
    /// Filter engine.
    pub const FILTER: &str = "horizon_checktree::filter";
    /// Performance spans.
    pub const PERF: &str = "horizon_checktree::perf";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node values next to labels.
    pub show_values: bool,
    /// Whether to show disabled/expanded/hidden flags.
    pub show_flags: bool,
    /// Whether to include nodes hidden by a filter.
    pub show_hidden: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_values: true,
            show_flags: false,
            show_hidden: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_flags: true,
            show_hidden: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_values: false,
            show_flags: false,
            ..Default::default()
        }
    }

    /// Build the prefix string for a node line.
    ///
    /// `ancestors_last` holds, for every ancestor below the root level,
    /// whether it was the last child of its parent.
    pub fn build_prefix(&self, ancestors_last: &[bool], is_last: bool, depth: usize) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, corner, last) = match self.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();

        if self.style == TreeStyle::Compact {
            for _ in 0..(depth - 1) * self.indent_size {
                prefix.push(' ');
            }
        } else {
            for &ancestor_last in ancestors_last {
                prefix.push_str(if ancestor_last { " " } else { branch });
                for _ in 0..self.indent_size {
                    prefix.push(' ');
                }
            }
        }

        prefix.push_str(if is_last { last } else { corner });
        prefix.push(' ');
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_checktree::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with consistent
/// target naming.
#[macro_export]
macro_rules! checktree_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_checktree", $($arg)*)
    };
}

#[macro_export]
macro_rules! checktree_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_checktree", $($arg)*)
    };
}
