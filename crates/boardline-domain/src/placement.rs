//! Placement validation
//!
//! A pure predicate over a board's dimensions, a candidate box and the boxes
//! already on the board. [`Board`](crate::Board) runs it on every insertion,
//! but it has no state of its own and can be called directly.

use crate::component::{BoundingBox, InstanceId};
use std::fmt;

/// Width and height of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// How the bounds check measures a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsRule {
    /// `y + h - 1 <= height` and `x + h - 1 <= width`.
    ///
    /// The column extent is measured with the candidate's height, and both
    /// limits admit one cell past the edge. Wide parts can hang off the right
    /// side of the board; the renderer clips them.
    #[default]
    Literal,

    /// `x + w <= width` and `y + h <= height`: the whole box lies on the board.
    Exact,
}

impl BoundsRule {
    /// Get the rule name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundsRule::Literal => "literal",
            BoundsRule::Exact => "exact",
        }
    }

    /// Parse a rule from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "literal" => Some(BoundsRule::Literal),
            "exact" => Some(BoundsRule::Exact),
            _ => None,
        }
    }
}

/// Rules applied when a component is inserted into a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementRules {
    /// Bounds check variant
    pub bounds: BoundsRule,
}

impl PlacementRules {
    /// Rules that reproduce the historical bounds check
    pub fn literal() -> Self {
        Self {
            bounds: BoundsRule::Literal,
        }
    }

    /// Rules that keep every component fully on the board
    pub fn exact() -> Self {
        Self {
            bounds: BoundsRule::Exact,
        }
    }
}

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The candidate failed the bounds check
    OutOfBounds {
        /// Board the candidate was checked against
        board: Dimensions,
        /// Column extent as measured by the active rule
        right: u32,
        /// Row extent as measured by the active rule
        bottom: u32,
    },

    /// The candidate shares a cell with a component already on the board
    Overlap {
        /// First placed component found in the way
        existing_id: InstanceId,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::OutOfBounds { board, right, bottom } => write!(
                f,
                "out of bounds: reaches column {}, row {} on a {} board",
                right, bottom, board
            ),
            RejectionReason::Overlap { existing_id } => {
                write!(f, "overlaps component {}", existing_id)
            }
        }
    }
}

/// Outcome of the placement predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The candidate may be appended
    Accept,
    /// The candidate must be dropped
    Reject(RejectionReason),
}

impl Verdict {
    /// Whether the candidate was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Check a candidate box against the board edges and the placed boxes
///
/// Bounds are checked first; overlap is only checked for candidates that are
/// in bounds. The first overlapping box in iteration order is reported.
pub fn validate_placement<I>(
    rules: &PlacementRules,
    board: Dimensions,
    candidate: &BoundingBox,
    existing: I,
) -> Verdict
where
    I: IntoIterator<Item = (InstanceId, BoundingBox)>,
{
    if let Some(reason) = check_bounds(rules.bounds, board, candidate) {
        return Verdict::Reject(reason);
    }

    for (existing_id, placed) in existing {
        if candidate.overlaps(&placed) {
            return Verdict::Reject(RejectionReason::Overlap { existing_id });
        }
    }

    Verdict::Accept
}

fn check_bounds(rule: BoundsRule, board: Dimensions, candidate: &BoundingBox) -> Option<RejectionReason> {
    let x = u64::from(candidate.x);
    let y = u64::from(candidate.y);
    let w = u64::from(candidate.width);
    let h = u64::from(candidate.height);

    let width = u64::from(board.width);
    let height = u64::from(board.height);

    // extents are the last cell covered, as each rule measures it
    let (right, bottom, fits) = match rule {
        BoundsRule::Literal => {
            let (right, bottom) = ((x + h).saturating_sub(1), (y + h).saturating_sub(1));
            (right, bottom, bottom <= height && right <= width)
        }
        BoundsRule::Exact => {
            let (right, bottom) = ((x + w).saturating_sub(1), (y + h).saturating_sub(1));
            (right, bottom, bottom < height && right < width)
        }
    };

    if fits {
        return None;
    }

    Some(RejectionReason::OutOfBounds {
        board,
        right: clamp_u32(right),
        bottom: clamp_u32(bottom),
    })
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
