//! Runs a layout: builds the boards, dispatches every component in order.

use crate::error::{CliError, Result};
use boardline_domain::{Assembly, AssemblyReport, DispatchOutcome, Layout, PlacementRules};
use tracing::{debug, info};

/// Build the boards of a layout and dispatch its components.
///
/// Every component is built before the first one is dispatched, so instance
/// ids follow the order of the layout. Rejections and unknown boards end up in
/// the report; only a malformed board list is an error.
pub fn assemble(layout: &Layout, rules: PlacementRules) -> Result<(Assembly, AssemblyReport)> {
    let mut assembly = Assembly::with_boards(&layout.boards, rules).map_err(CliError::Layout)?;

    info!(
        "Assembling {} component(s) onto {} board(s) with {} bounds",
        layout.components.len(),
        layout.boards.len(),
        rules.bounds.as_str()
    );

    let report = assembly.run(&layout.components);
    for outcome in &report.outcomes {
        log_outcome(outcome);
    }

    info!(
        "Assembly finished: {} placed, {} rejected, {} unknown board(s)",
        report.placed(),
        report.rejected(),
        report.unknown_boards()
    );

    Ok((assembly, report))
}

fn log_outcome(outcome: &DispatchOutcome) {
    match outcome {
        DispatchOutcome::Placed { component } => {
            debug!(
                "Placed {} {} at {} on board {}",
                component.kind, component.id, component.position, component.board_id
            );
        }
        DispatchOutcome::Rejected(rejection) => {
            info!(
                "Rejected {} {} at {} on board {}: {}",
                rejection.component.kind,
                rejection.component.id,
                rejection.component.position,
                rejection.board_id,
                rejection.reason
            );
        }
        DispatchOutcome::UnknownBoard { component } => {
            info!(
                "Skipped {} {}: board {} does not exist",
                component.kind, component.id, component.board_id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardline_domain::{BoardSpec, ComponentKind, ComponentSpec};

    #[test]
    fn test_assemble_builtin() {
        let (assembly, report) = assemble(&Layout::builtin(), PlacementRules::default()).unwrap();
        assert_eq!(assembly.boards().len(), 2);
        assert_eq!(report.placed(), 7);
        assert_eq!(report.rejected(), 1);
    }

    #[test]
    fn test_assemble_matches_assembly_run() {
        let layout = Layout::builtin();
        let (_, report) = assemble(&layout, PlacementRules::default()).unwrap();

        let mut direct = Assembly::with_boards(&layout.boards, PlacementRules::default()).unwrap();
        assert_eq!(report, direct.run(&layout.components));

        let ids: Vec<u32> = report.outcomes.iter().map(|o| o.component().id.value()).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_assemble_reports_unknown_board() {
        let layout = Layout {
            boards: vec![BoardSpec { width: 4, height: 4 }],
            components: vec![ComponentSpec::new(ComponentKind::Resistor, 0, 0, 1)],
        };
        let (assembly, report) = assemble(&layout, PlacementRules::default()).unwrap();
        assert_eq!(report.unknown_boards(), 1);
        assert!(assembly.boards()[0].is_empty());
    }

    #[test]
    fn test_assemble_rejects_zero_sized_board() {
        let layout = Layout {
            boards: vec![BoardSpec { width: 0, height: 4 }],
            components: vec![],
        };
        assert!(matches!(
            assemble(&layout, PlacementRules::default()),
            Err(CliError::Layout(_))
        ));
    }
}
