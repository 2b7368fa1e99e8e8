//! Board module - a fixed-size surface that accumulates components

use crate::component::{BoardId, Component, InstanceId};
use crate::placement::{validate_placement, Dimensions, PlacementRules, RejectionReason, Verdict};
use crate::render::Grid;
use std::fmt;

/// A circuit board
///
/// Components are kept in insertion order. The only mutation is
/// [`Board::insert`], which appends a component after it passes the placement
/// check; nothing is ever removed or moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    id: BoardId,
    dimensions: Dimensions,
    rules: PlacementRules,
    components: Vec<Component>,
}

/// A component that was refused by a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The dropped component
    pub component: Component,

    /// Board that refused it
    pub board_id: BoardId,

    /// Why it was refused
    pub reason: RejectionReason,
}

impl fmt::Display for Rejection {
    /// The id printed here is the kind's type code, not the instance id
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Didn't fit: Component ID: {}, (x, y) = ({}, {}), Board ID: {}",
            self.component.kind.glyph(), self.component.position.x, self.component.position.y, self.board_id
        )
    }
}

/// Result of an insertion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum PlacementOutcome {
    /// The component is now the last element of the board's sequence
    Placed(InstanceId),

    /// The board is unchanged
    Rejected(Rejection),
}

impl PlacementOutcome {
    /// Whether the component was placed
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed(_))
    }
}

impl Board {
    /// Create a board using the literal bounds rule
    ///
    /// # Errors
    /// Returns error if either dimension is zero
    pub fn new(id: BoardId, width: u32, height: u32) -> Result<Self, String> {
        Self::with_rules(id, width, height, PlacementRules::default())
    }

    /// Create a board with explicit placement rules
    ///
    /// # Errors
    /// Returns error if either dimension is zero
    pub fn with_rules(id: BoardId, width: u32, height: u32, rules: PlacementRules) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("Board {} must have a non-zero size, got {}x{}", id, width, height));
        }

        Ok(Self {
            id,
            dimensions: Dimensions { width, height },
            rules,
            components: Vec::new(),
        })
    }

    /// Board identifier
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// Width in cells
    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    /// Height in cells
    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    /// Width and height
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Rules applied on insertion
    pub fn rules(&self) -> PlacementRules {
        self.rules
    }

    /// Placed components in insertion order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of placed components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether nothing has been placed yet
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Run the placement check without inserting
    pub fn check(&self, candidate: &Component) -> Verdict {
        validate_placement(
            &self.rules,
            self.dimensions,
            &candidate.bounding_box(),
            self.components.iter().map(|c| (c.id, c.bounding_box())),
        )
    }

    /// Insert a component if it is in bounds and overlaps nothing
    ///
    /// On rejection the component is handed back inside the outcome and the
    /// board is left as it was.
    pub fn insert(&mut self, component: Component) -> PlacementOutcome {
        match self.check(&component) {
            Verdict::Accept => {
                let id = component.id;
                self.components.push(component);
                PlacementOutcome::Placed(id)
            }
            Verdict::Reject(reason) => PlacementOutcome::Rejected(Rejection {
                component,
                board_id: self.id,
                reason,
            }),
        }
    }

    /// Number of cells covered by at least one component
    ///
    /// Parts hanging past the edge only count the cells on the board.
    pub fn occupied_cells(&self) -> usize {
        Grid::rasterize(self).occupied()
    }
}
