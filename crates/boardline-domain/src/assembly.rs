//! Assembly module - boards plus the ordered dispatch of components onto them

use crate::board::{Board, PlacementOutcome, Rejection};
use crate::component::{BoardId, Component, InstanceCounter, Position};
use crate::kind::ComponentKind;
use crate::placement::PlacementRules;
use std::fmt;

/// Size of a board to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSpec {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
}

/// A component to build and send to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Catalog kind
    pub kind: ComponentKind,
    /// Top-left cell
    pub position: Position,
    /// Declared target board
    pub board_id: BoardId,
}

impl ComponentSpec {
    /// Create a component spec
    pub fn new(kind: ComponentKind, x: u32, y: u32, board_id: u32) -> Self {
        Self {
            kind,
            position: Position::new(x, y),
            board_id: BoardId::from_value(board_id),
        }
    }
}

/// Ordered board and component specs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    /// Boards, ids assigned by position starting at 0
    pub boards: Vec<BoardSpec>,
    /// Components in dispatch order
    pub components: Vec<ComponentSpec>,
}

impl Layout {
    /// The stock two-board run
    pub fn builtin() -> Self {
        use ComponentKind::*;

        Self {
            boards: vec![
                BoardSpec { width: 15, height: 15 },
                BoardSpec { width: 10, height: 10 },
            ],
            components: vec![
                ComponentSpec::new(Resistor, 3, 3, 0),
                ComponentSpec::new(LogicChip, 5, 4, 1),
                ComponentSpec::new(LedLight, 4, 11, 0),
                ComponentSpec::new(LedLight, 12, 5, 0),
                ComponentSpec::new(FluxCapacitor, 8, 7, 0),
                ComponentSpec::new(FluxCapacitor, 6, 1, 0),
                ComponentSpec::new(FluxCapacitor, 7, 0, 0),
                ComponentSpec::new(LogicChip, 5, 13, 0),
            ],
        }
    }
}

/// What happened to one dispatched component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Appended to its board
    Placed {
        /// The placed component
        component: Component,
    },

    /// Refused by its board
    Rejected(Rejection),

    /// Declared a board that does not exist
    UnknownBoard {
        /// The dropped component
        component: Component,
    },
}

impl DispatchOutcome {
    /// The component this outcome is about
    pub fn component(&self) -> &Component {
        match self {
            DispatchOutcome::Placed { component } => component,
            DispatchOutcome::Rejected(rejection) => &rejection.component,
            DispatchOutcome::UnknownBoard { component } => component,
        }
    }

    /// Whether the component ended up on a board
    pub fn is_placed(&self) -> bool {
        matches!(self, DispatchOutcome::Placed { .. })
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Placed { component } => write!(
                f,
                "Placed: Component ID: {}, (x, y) = ({}, {}), Board ID: {}",
                component.id, component.position.x, component.position.y, component.board_id
            ),
            DispatchOutcome::Rejected(rejection) => write!(f, "{}", rejection),
            DispatchOutcome::UnknownBoard { component } => {
                write!(f, "Error: No such board! ID: {}", component.board_id)
            }
        }
    }
}

/// Outcomes of a whole run, in dispatch order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssemblyReport {
    /// One entry per dispatched component
    pub outcomes: Vec<DispatchOutcome>,
}

impl AssemblyReport {
    /// Number of placed components
    pub fn placed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_placed()).count()
    }

    /// Number of components refused by their board
    pub fn rejected(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DispatchOutcome::Rejected(_)))
            .count()
    }

    /// Number of components sent to a missing board
    pub fn unknown_boards(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DispatchOutcome::UnknownBoard { .. }))
            .count()
    }

    /// Outcomes that did not place a component
    pub fn failures(&self) -> impl Iterator<Item = &DispatchOutcome> {
        self.outcomes.iter().filter(|o| !o.is_placed())
    }
}

/// A set of boards that components are dispatched onto
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    boards: Vec<Board>,
    rules: PlacementRules,
    counter: InstanceCounter,
}

impl Assembly {
    /// Create an empty assembly whose boards use the given rules
    pub fn new(rules: PlacementRules) -> Self {
        Self {
            boards: Vec::new(),
            rules,
            counter: InstanceCounter::new(),
        }
    }

    /// Create an assembly with the boards of a layout
    ///
    /// # Errors
    /// Returns error if a board spec has a zero dimension
    pub fn with_boards(specs: &[BoardSpec], rules: PlacementRules) -> Result<Self, String> {
        let mut assembly = Self::new(rules);
        for spec in specs {
            assembly.add_board(spec.width, spec.height)?;
        }
        Ok(assembly)
    }

    /// Add a board; its id is the number of boards added before it
    ///
    /// # Errors
    /// Returns error if either dimension is zero
    pub fn add_board(&mut self, width: u32, height: u32) -> Result<BoardId, String> {
        let raw = u32::try_from(self.boards.len()).map_err(|_| "Too many boards".to_string())?;
        let id = BoardId::from_value(raw);
        self.boards.push(Board::with_rules(id, width, height, self.rules)?);
        Ok(id)
    }

    /// Boards in creation order
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Look up a board
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id() == id)
    }

    fn board_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id() == id)
    }

    /// Build a component from a spec, issuing the next instance id
    pub fn fabricate(&mut self, spec: &ComponentSpec) -> Component {
        Component::issue(&mut self.counter, spec.kind, spec.position, spec.board_id)
    }

    /// Send a component to the board it declares
    pub fn dispatch(&mut self, component: Component) -> DispatchOutcome {
        let Some(board) = self.board_mut(component.board_id) else {
            return DispatchOutcome::UnknownBoard { component };
        };

        let snapshot = component.clone();
        match board.insert(component) {
            PlacementOutcome::Placed(_) => DispatchOutcome::Placed { component: snapshot },
            PlacementOutcome::Rejected(rejection) => DispatchOutcome::Rejected(rejection),
        }
    }

    /// Build every component of the specs, then dispatch them in order
    pub fn run(&mut self, specs: &[ComponentSpec]) -> AssemblyReport {
        let components: Vec<Component> = specs.iter().map(|spec| self.fabricate(spec)).collect();

        let outcomes = components
            .into_iter()
            .map(|component| self.dispatch(component))
            .collect();

        AssemblyReport { outcomes }
    }
}
