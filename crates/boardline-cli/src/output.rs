//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use boardline_domain::render::{self, Grid};
use boardline_domain::{Assembly, AssemblyReport, Board, ComponentKind, DispatchOutcome, PlacementRules};
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    banner: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, banner: bool) -> Self {
        Self {
            format,
            color_enabled,
            banner,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the result of a run: failures first, then every board.
    pub fn format_run(&self, assembly: &Assembly, report: &AssemblyReport, rules: PlacementRules) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_run_json(assembly, report, rules),
            OutputFormat::Text => Ok(self.format_run_text(assembly, report)),
            OutputFormat::Quiet => Ok(self.format_failures(report)),
        }
    }

    fn format_run_text(&self, assembly: &Assembly, report: &AssemblyReport) -> String {
        let mut sections = Vec::new();

        if self.banner {
            sections.push(self.banner_text());
        }

        let failures = self.format_failures(report);
        if !failures.is_empty() {
            sections.push(format!("{}\n", failures));
        }

        for board in assembly.boards() {
            // trailing empty line keeps a blank line between boards
            sections.push(format!("{}\n", self.format_board(board)));
        }

        sections.join("\n")
    }

    /// Format one board as a titled grid.
    pub fn format_board(&self, board: &Board) -> String {
        let mut lines = render::render_lines(board);
        if let Some(title) = lines.first_mut() {
            *title = self.colorize(title, "yellow");
        }
        lines.join("\n")
    }

    /// Format every failure of a run, one per line.
    pub fn format_failures(&self, report: &AssemblyReport) -> String {
        report
            .failures()
            .map(|outcome| self.failure(outcome))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a single failure line.
    pub fn failure(&self, outcome: &DispatchOutcome) -> String {
        self.colorize(&outcome.to_string(), "red")
    }

    fn format_run_json(&self, assembly: &Assembly, report: &AssemblyReport, rules: PlacementRules) -> Result<String> {
        let boards: Vec<serde_json::Value> = assembly
            .boards()
            .iter()
            .map(|board| {
                let grid = Grid::rasterize(board);
                let rows: Vec<String> = grid.rows().map(|row| row.iter().collect()).collect();
                let components: Vec<serde_json::Value> = board
                    .components()
                    .iter()
                    .map(|c| {
                        json!({
                            "id": c.id.value(),
                            "kind": c.kind.as_str(),
                            "x": c.position.x,
                            "y": c.position.y,
                            "width": c.width(),
                            "height": c.height(),
                        })
                    })
                    .collect();

                json!({
                    "id": board.id().value(),
                    "width": board.width(),
                    "height": board.height(),
                    "occupied": board.occupied_cells(),
                    "components": components,
                    "rows": rows,
                })
            })
            .collect();

        let document = json!({
            "bounds": rules.bounds.as_str(),
            "boards": boards,
            "failures": self.failures_json(report),
            "summary": summary_json(report),
        });

        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn failures_json(&self, report: &AssemblyReport) -> Vec<serde_json::Value> {
        report
            .failures()
            .map(|outcome| {
                let c = outcome.component();
                let reason = match outcome {
                    DispatchOutcome::Rejected(rejection) => rejection.reason.to_string(),
                    _ => "unknown board".to_string(),
                };
                json!({
                    "id": c.id.value(),
                    "kind": c.kind.as_str(),
                    "x": c.position.x,
                    "y": c.position.y,
                    "board": c.board_id.value(),
                    "reason": reason,
                    "message": outcome.to_string(),
                })
            })
            .collect()
    }

    /// Format the per-component outcome listing of a run.
    pub fn format_check(&self, report: &AssemblyReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let outcomes: Vec<serde_json::Value> = report
                    .outcomes
                    .iter()
                    .map(|outcome| {
                        let c = outcome.component();
                        json!({
                            "id": c.id.value(),
                            "kind": c.kind.as_str(),
                            "x": c.position.x,
                            "y": c.position.y,
                            "board": c.board_id.value(),
                            "outcome": outcome_label(outcome),
                        })
                    })
                    .collect();
                let document = json!({ "outcomes": outcomes, "summary": summary_json(report) });
                Ok(serde_json::to_string_pretty(&document)?)
            }
            OutputFormat::Text => Ok(format!("{}\n{}", self.check_table(report), self.summary(report))),
            OutputFormat::Quiet => Ok(self.summary(report)),
        }
    }

    fn check_table(&self, report: &AssemblyReport) -> String {
        if report.outcomes.is_empty() {
            return self.colorize("No components in layout.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Kind", "Position", "Board", "Outcome"]);

        for outcome in &report.outcomes {
            let c = outcome.component();
            builder.push_record([
                c.id.to_string(),
                c.kind.to_string(),
                c.position.to_string(),
                c.board_id.to_string(),
                outcome_label(outcome),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the placed / rejected / unknown counts.
    pub fn summary(&self, report: &AssemblyReport) -> String {
        let text = format!(
            "{} placed, {} rejected, {} unknown board(s)",
            report.placed(),
            report.rejected(),
            report.unknown_boards()
        );
        if report.failures().next().is_none() {
            self.colorize(&text, "green")
        } else {
            self.colorize(&text, "yellow")
        }
    }

    /// Format the component catalog.
    pub fn format_catalog(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let kinds: Vec<serde_json::Value> = ComponentKind::ALL
                    .iter()
                    .map(|k| {
                        json!({
                            "kind": k.as_str(),
                            "width": k.width(),
                            "height": k.height(),
                            "glyph": k.glyph().to_string(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&kinds)?)
            }
            OutputFormat::Quiet => Ok(ComponentKind::ALL
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Text => {
                let mut builder = Builder::default();
                builder.push_record(["Kind", "Width", "Height", "Glyph"]);
                for kind in ComponentKind::ALL {
                    builder.push_record([
                        kind.as_str().to_string(),
                        kind.width().to_string(),
                        kind.height().to_string(),
                        kind.glyph().to_string(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Title banner printed before a text run.
    pub fn banner_text(&self) -> String {
        let rule = "#".repeat(34);
        let text = format!("{}\n# Circuit Board Assembly Machine #\n{}\n", rule, rule);
        self.colorize(&text, "yellow")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn outcome_label(outcome: &DispatchOutcome) -> String {
    match outcome {
        DispatchOutcome::Placed { .. } => "placed".to_string(),
        DispatchOutcome::Rejected(rejection) => format!("rejected: {}", rejection.reason),
        DispatchOutcome::UnknownBoard { .. } => "no such board".to_string(),
    }
}

fn summary_json(report: &AssemblyReport) -> serde_json::Value {
    json!({
        "placed": report.placed(),
        "rejected": report.rejected(),
        "unknown_boards": report.unknown_boards(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::assemble;
    use boardline_domain::Layout;

    fn builtin() -> (Assembly, AssemblyReport) {
        assemble(&Layout::builtin(), PlacementRules::default()).unwrap()
    }

    #[test]
    fn test_text_run_layout() {
        let (assembly, report) = builtin();
        let formatter = Formatter::new(OutputFormat::Text, false, false);
        let output = formatter.format_run(&assembly, &report, PlacementRules::default()).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Didn't fit: Component ID: 4, (x, y) = (7, 0), Board ID: 0");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "*** Circuit Board ID: 0 ***");
        // 15 rows, then a blank line before the next board
        assert_eq!(lines[2 + 3 + 15], "");
        assert_eq!(lines[2 + 3 + 15 + 1], "*** Circuit Board ID: 1 ***");
        assert!(output.ends_with("9   . . . . . . . . . .\n"));
    }

    #[test]
    fn test_banner() {
        let (assembly, report) = builtin();
        let formatter = Formatter::new(OutputFormat::Text, false, true);
        let output = formatter.format_run(&assembly, &report, PlacementRules::default()).unwrap();
        assert!(output.starts_with("##################################\n# Circuit Board Assembly Machine #\n"));
    }

    #[test]
    fn test_quiet_run_only_failures() {
        let (assembly, report) = builtin();
        let formatter = Formatter::new(OutputFormat::Quiet, false, true);
        let output = formatter.format_run(&assembly, &report, PlacementRules::default()).unwrap();
        assert_eq!(output, "Didn't fit: Component ID: 4, (x, y) = (7, 0), Board ID: 0");
    }

    #[test]
    fn test_json_run() {
        let (assembly, report) = builtin();
        let formatter = Formatter::new(OutputFormat::Json, false, true);
        let output = formatter.format_run(&assembly, &report, PlacementRules::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["bounds"], "literal");
        assert_eq!(value["boards"].as_array().unwrap().len(), 2);
        assert_eq!(value["boards"][1]["rows"][4], ".....22222");
        assert_eq!(value["boards"][1]["occupied"], 10);
        assert_eq!(value["failures"][0]["id"], 7);
        assert_eq!(
            value["failures"][0]["message"],
            "Didn't fit: Component ID: 4, (x, y) = (7, 0), Board ID: 0"
        );
        assert_eq!(value["summary"]["placed"], 7);
    }

    #[test]
    fn test_check_table() {
        let (_, report) = builtin();
        let formatter = Formatter::new(OutputFormat::Text, false, true);
        let output = formatter.format_check(&report).unwrap();
        assert!(output.contains("Outcome"));
        assert!(output.contains("rejected: overlaps component 6"));
        assert!(output.ends_with("7 placed, 1 rejected, 0 unknown board(s)"));
    }

    #[test]
    fn test_catalog_table() {
        let formatter = Formatter::new(OutputFormat::Text, false, true);
        let output = formatter.format_catalog().unwrap();
        assert!(output.contains("flux-capacitor"));
        assert!(output.contains("Glyph"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false, true);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
