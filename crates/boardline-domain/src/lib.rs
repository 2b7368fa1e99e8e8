//! Boardline Domain Layer
//!
//! Core model of the circuit board assembly simulator. It has no external
//! dependencies and holds every rule the rest of the workspace relies on.
//!
//! ## Key Concepts
//!
//! - **Component kind**: one of a closed set of parts, each with a fixed footprint and glyph
//! - **Component**: an instance of a kind at a position, addressed to a board
//! - **Board**: a fixed-size surface that only ever grows by validated insertion
//! - **Placement check**: bounds plus pairwise overlap, a pure function
//! - **Rendering**: rasterize a board into glyphs and lay it out as text
//!
//! ## Example
//!
//! ```
//! use boardline_domain::{Assembly, Layout, PlacementRules};
//!
//! let layout = Layout::builtin();
//! let mut assembly = Assembly::with_boards(&layout.boards, PlacementRules::default()).unwrap();
//! let report = assembly.run(&layout.components);
//!
//! assert_eq!(report.rejected(), 1);
//! println!("{}", boardline_domain::render::render(&assembly.boards()[1]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembly;
pub mod board;
pub mod component;
pub mod kind;
pub mod placement;
pub mod render;

// Re-exports for convenience
pub use assembly::{Assembly, AssemblyReport, BoardSpec, ComponentSpec, DispatchOutcome, Layout};
pub use board::{Board, PlacementOutcome, Rejection};
pub use component::{BoardId, BoundingBox, Component, InstanceCounter, InstanceId, Position};
pub use kind::{ComponentKind, Shape};
pub use placement::{validate_placement, BoundsRule, Dimensions, PlacementRules, RejectionReason, Verdict};
pub use render::Grid;
