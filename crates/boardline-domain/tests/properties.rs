//! Property tests for insertion and rendering

use boardline_domain::render::{render, Grid, EMPTY_GLYPH};
use boardline_domain::{
    Board, BoardId, Component, ComponentKind, Dimensions, InstanceCounter, PlacementOutcome, Position,
};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ComponentKind> {
    prop::sample::select(ComponentKind::ALL.to_vec())
}

fn part_strategy() -> impl Strategy<Value = (ComponentKind, u32, u32)> {
    (kind_strategy(), 0u32..20, 0u32..20)
}

fn build(counter: &mut InstanceCounter, (kind, x, y): (ComponentKind, u32, u32)) -> Component {
    Component::issue(counter, kind, Position::new(x, y), BoardId::from_value(0))
}

proptest! {
    /// Property: an insertion either appends the component or changes nothing
    #[test]
    fn test_insert_is_atomic(parts in prop::collection::vec(part_strategy(), 1..30)) {
        let mut counter = InstanceCounter::new();
        let mut board = Board::new(BoardId::from_value(0), 15, 15).unwrap();

        for part in parts {
            let component = build(&mut counter, part);
            let before = board.components().to_vec();

            match board.insert(component.clone()) {
                PlacementOutcome::Placed(id) => {
                    prop_assert_eq!(id, component.id);
                    prop_assert_eq!(board.len(), before.len() + 1);
                    prop_assert_eq!(&board.components()[..before.len()], &before[..]);
                    prop_assert_eq!(board.components().last(), Some(&component));
                }
                PlacementOutcome::Rejected(rejection) => {
                    prop_assert_eq!(board.components(), &before[..]);
                    prop_assert_eq!(rejection.component, component);
                }
            }
        }
    }

    /// Property: no two placed components share a cell
    #[test]
    fn test_placed_components_never_overlap(parts in prop::collection::vec(part_strategy(), 1..30)) {
        let mut counter = InstanceCounter::new();
        let mut board = Board::new(BoardId::from_value(0), 15, 15).unwrap();
        for part in parts {
            let _ = board.insert(build(&mut counter, part));
        }

        let placed = board.components();
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                prop_assert!(!a.bounding_box().overlaps(&b.bounding_box()));
            }
        }
    }

    /// Property: of two parts on a roomy board, the first always lands and the
    /// second is refused exactly when the boxes intersect
    #[test]
    fn test_overlap_symmetry(first in part_strategy(), second in part_strategy()) {
        let mut counter = InstanceCounter::new();
        let a = build(&mut counter, first);
        let b = build(&mut counter, second);
        let intersect = a.bounding_box().overlaps(&b.bounding_box());
        prop_assert_eq!(intersect, b.bounding_box().overlaps(&a.bounding_box()));

        for (one, two) in [(&a, &b), (&b, &a)] {
            let mut board = Board::new(BoardId::from_value(0), 50, 50).unwrap();
            prop_assert!(board.insert(one.clone()).is_placed());
            prop_assert_eq!(board.insert(two.clone()).is_placed(), !intersect);
        }
    }

    /// Property: rendering twice gives the same text
    #[test]
    fn test_render_idempotent(parts in prop::collection::vec(part_strategy(), 0..15)) {
        let mut counter = InstanceCounter::new();
        let mut board = Board::new(BoardId::from_value(4), 15, 12).unwrap();
        for part in parts {
            let _ = board.insert(build(&mut counter, part));
        }

        let snapshot = board.clone();
        prop_assert_eq!(render(&board), render(&board));
        prop_assert_eq!(board, snapshot);
    }

    /// Property: each cell shows the last component covering it, including
    /// where painted components overlap
    #[test]
    fn test_cell_glyph_matches_last_cover(parts in prop::collection::vec(part_strategy(), 0..15)) {
        let mut counter = InstanceCounter::new();
        let components: Vec<Component> = parts.into_iter().map(|part| build(&mut counter, part)).collect();

        let grid = Grid::paint(Dimensions { width: 15, height: 15 }, &components);
        for row in 0..15u32 {
            for col in 0..15u32 {
                let expected = components
                    .iter()
                    .filter(|c| c.bounding_box().covers(col, row))
                    .last()
                    .map_or(EMPTY_GLYPH, |c| c.kind.glyph());
                prop_assert_eq!(grid.glyph(col as usize, row as usize), Some(expected));
            }
        }
    }

    /// Property: a board's raster equals painting its components directly
    #[test]
    fn test_rasterize_matches_paint(parts in prop::collection::vec(part_strategy(), 0..15)) {
        let mut counter = InstanceCounter::new();
        let mut board = Board::new(BoardId::from_value(0), 15, 15).unwrap();
        for part in parts {
            let _ = board.insert(build(&mut counter, part));
        }

        prop_assert_eq!(Grid::rasterize(&board), Grid::paint(board.dimensions(), board.components()));
    }
}
