//! Component module - a placed instance of a catalog kind

use crate::kind::ComponentKind;
use std::fmt;

/// Identifier of a component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u32);

impl InstanceId {
    /// Create an instance id from a raw value
    pub fn from_value(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardId(u32);

impl BoardId {
    /// Create a board id from a raw value
    pub fn from_value(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues instance ids in creation order
///
/// The counter is owned by whoever builds components and passed along
/// explicitly. The first id issued is 1.
#[derive(Debug, Clone, Default)]
pub struct InstanceCounter {
    last: u32,
}

impl InstanceCounter {
    /// Create a counter that has issued nothing yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id
    pub fn next_id(&mut self) -> InstanceId {
        self.last += 1;
        InstanceId(self.last)
    }
}

/// Top-left cell of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl Position {
    /// Create a position
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned box covering `[x, x + width - 1] × [y, y + height - 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Width in cells (at least 1)
    pub width: u32,
    /// Height in cells (at least 1)
    pub height: u32,
}

impl BoundingBox {
    /// Last column covered
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width - 1)
    }

    /// Last row covered
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height - 1)
    }

    /// Check if the box covers a cell
    pub fn covers(&self, col: u32, row: u32) -> bool {
        (self.x..=self.right()).contains(&col) && (self.y..=self.bottom()).contains(&row)
    }

    /// Check if two boxes share at least one cell
    ///
    /// Boxes overlap iff their column ranges intersect and their row ranges
    /// intersect.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let columns = self.x <= other.right() && other.x <= self.right();
        let rows = self.y <= other.bottom() && other.y <= self.bottom();
        columns && rows
    }
}

/// A component instance
///
/// Width and height are not stored; they always come from the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Instance identifier
    pub id: InstanceId,

    /// Catalog kind
    pub kind: ComponentKind,

    /// Top-left cell
    pub position: Position,

    /// Board this component is meant for (resolved by the assembly)
    pub board_id: BoardId,
}

impl Component {
    /// Create a new component
    pub fn new(id: InstanceId, kind: ComponentKind, position: Position, board_id: BoardId) -> Self {
        Self {
            id,
            kind,
            position,
            board_id,
        }
    }

    /// Create a component, taking its id from a counter
    pub fn issue(
        counter: &mut InstanceCounter,
        kind: ComponentKind,
        position: Position,
        board_id: BoardId,
    ) -> Self {
        Self::new(counter.next_id(), kind, position, board_id)
    }

    /// Width in cells
    pub fn width(&self) -> u32 {
        self.kind.width()
    }

    /// Height in cells
    pub fn height(&self) -> u32 {
        self.kind.height()
    }

    /// Bounding box of the component
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.position.x,
            y: self.position.y,
            width: self.width(),
            height: self.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x: u32, y: u32, width: u32, height: u32) -> BoundingBox {
        BoundingBox { x, y, width, height }
    }

    #[test]
    fn test_counter_starts_at_one() {
        let mut counter = InstanceCounter::new();
        assert_eq!(counter.next_id().value(), 1);
        assert_eq!(counter.next_id().value(), 2);
    }

    #[test]
    fn test_dimensions_follow_kind() {
        let mut counter = InstanceCounter::new();
        let chip = Component::issue(
            &mut counter,
            ComponentKind::LogicChip,
            Position::new(5, 4),
            BoardId::from_value(1),
        );

        assert_eq!(chip.width(), 5);
        assert_eq!(chip.height(), 2);
        assert_eq!(chip.bounding_box(), bbox(5, 4, 5, 2));
        assert_eq!(chip.bounding_box().right(), 9);
        assert_eq!(chip.bounding_box().bottom(), 5);
    }

    #[test]
    fn test_covers_is_inclusive() {
        let b = bbox(2, 3, 2, 2);
        assert!(b.covers(2, 3));
        assert!(b.covers(3, 4));
        assert!(!b.covers(4, 4));
        assert!(!b.covers(3, 5));
        assert!(!b.covers(1, 3));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = bbox(6, 1, 4, 4);
        // same columns, disjoint rows
        assert!(!a.overlaps(&bbox(8, 7, 4, 4)));
        // same rows, disjoint columns
        assert!(!a.overlaps(&bbox(10, 1, 1, 1)));
        // shares the corner cell (9, 4)
        assert!(a.overlaps(&bbox(9, 4, 2, 2)));
        assert!(a.overlaps(&bbox(7, 0, 4, 4)));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(7, 0).to_string(), "(7, 0)");
    }
}
