//! Closed enumerations used by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable product dimension.
///
/// Axes are not stored in the catalog; they are detected heuristically from
/// attribute names and slugs (see [`crate::config::AxisConfig`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    Size,
    Color,
}

impl AxisKind {
    /// All axes in selector display order.
    pub const ALL: [AxisKind; 2] = [AxisKind::Size, AxisKind::Color];

    pub fn as_str(self) -> &'static str {
        match self {
            AxisKind::Size => "size",
            AxisKind::Color => "color",
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
