//! Chart projection for hierarchical renderers.
//!
//! # Responsibility
//! - Turn a parent-complete record set into parallel id/label/parent/value
//!   sequences.
//! - Shape the renderer trace (kind, depth clamp, total-is-sum hint).
//!
//! # Invariants
//! - One entry per input record, in input order.
//! - Weight policy is global to the view: if any record has a weight, absent
//!   weights become `0`; if none has, every value is `1`.
//! - Values are never aggregated upward here; the renderer sums branches.

use crate::model::record::Record;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Branch value mode hint: a parent's value is the total of its children.
pub const BRANCH_VALUES_TOTAL: &str = "total";

const HOVER_WITH_WEIGHT: &str = "<b>%{label}</b><br>Weight: %{value:.1} %<extra></extra>";
const HOVER_WITHOUT_WEIGHT: &str = "<b>%{label}</b><br>Weight: not provided<extra></extra>";

/// Supported chart shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Radial layout.
    #[default]
    Sunburst,
    /// Rectangular layout.
    Treemap,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunburst => "sunburst",
            Self::Treemap => "treemap",
        }
    }
}

impl Display for ChartKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown chart kind text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChartKindError(pub String);

impl Display for ParseChartKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported chart kind `{}`; expected sunburst|treemap",
            self.0
        )
    }
}

impl Error for ParseChartKindError {}

impl FromStr for ChartKind {
    type Err = ParseChartKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sunburst" => Ok(Self::Sunburst),
            "treemap" => Ok(Self::Treemap),
            other => Err(ParseChartKindError(other.to_string())),
        }
    }
}

/// Maximum rendered depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthLimit {
    /// Renderer decides.
    #[default]
    Auto,
    /// Clamp to this many levels. Always >= 1.
    Levels(u32),
}

impl DepthLimit {
    /// Returns the clamp value, `None` for `Auto`.
    pub fn max_depth(self) -> Option<u32> {
        match self {
            Self::Auto => None,
            Self::Levels(levels) => Some(levels),
        }
    }
}

impl Display for DepthLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Levels(levels) => write!(f, "{levels}"),
        }
    }
}

/// Depth limit text is neither `auto` nor a positive integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDepthLimitError(pub String);

impl Display for ParseDepthLimitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid depth limit `{}`; expected auto or a positive integer",
            self.0
        )
    }
}

impl Error for ParseDepthLimitError {}

impl FromStr for DepthLimit {
    type Err = ParseDepthLimitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        match trimmed.parse::<u32>() {
            Ok(levels) if levels > 0 => Ok(Self::Levels(levels)),
            _ => Err(ParseDepthLimitError(trimmed.to_string())),
        }
    }
}

/// Flat parent/child payload for one view.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ViewProjection {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
    /// Whether any record in the view carried a weight.
    pub has_weight: bool,
}

impl ViewProjection {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Projects a parent-complete record set into renderer sequences.
pub fn project(closed: &[&Record]) -> ViewProjection {
    let has_weight = closed.iter().any(|record| record.has_weight());
    let value_of = |record: &Record| match (has_weight, record.weight) {
        (false, _) => 1.0,
        (true, Some(weight)) => weight,
        (true, None) => 0.0,
    };

    ViewProjection {
        ids: closed.iter().map(|record| record.code.clone()).collect(),
        labels: closed.iter().map(|&record| display_label(record)).collect(),
        parents: closed.iter().map(|record| record.parent.clone()).collect(),
        values: closed.iter().map(|&record| value_of(record)).collect(),
        has_weight,
    }
}

/// Composite `code - label` text, or the bare code when the label is empty.
pub fn display_label(record: &Record) -> String {
    if record.label.is_empty() {
        record.code.clone()
    } else {
        format!("{} - {}", record.code, record.label)
    }
}

/// Treemap tiling hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreemapTiling {
    pub packing: &'static str,
}

/// Serializable trace for the chart collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTrace {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
    pub branchvalues: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxdepth: Option<u32>,
    pub hovertemplate: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiling: Option<TreemapTiling>,
}

impl ChartTrace {
    /// Builds a trace from a projection.
    pub fn new(kind: ChartKind, depth_limit: DepthLimit, projection: ViewProjection) -> Self {
        let hovertemplate = if projection.has_weight {
            HOVER_WITH_WEIGHT
        } else {
            HOVER_WITHOUT_WEIGHT
        };
        let tiling = match kind {
            ChartKind::Treemap => Some(TreemapTiling {
                packing: "squarify",
            }),
            ChartKind::Sunburst => None,
        };
        Self {
            kind,
            ids: projection.ids,
            labels: projection.labels,
            parents: projection.parents,
            values: projection.values,
            branchvalues: BRANCH_VALUES_TOTAL,
            maxdepth: depth_limit.max_depth(),
            hovertemplate,
            tiling,
        }
    }
}
