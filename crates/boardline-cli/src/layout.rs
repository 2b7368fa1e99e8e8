//! Layout files.
//!
//! A layout lists boards and components in order:
//!
//! ```toml
//! [[boards]]
//! width = 15
//! height = 15
//!
//! [[components]]
//! kind = "flux-capacitor"
//! x = 8
//! y = 7
//! board = 0
//! ```
//!
//! Board ids are the position of the board in the file, starting at 0.

use crate::error::{CliError, Result};
use boardline_domain::{BoardSpec, ComponentKind, ComponentSpec, Layout};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Largest board a layout may declare, in cells.
pub const MAX_BOARD_CELLS: u64 = 1_000_000;

/// Layout as written on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    /// Boards in id order
    #[serde(default)]
    pub boards: Vec<BoardEntry>,

    /// Components in dispatch order
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// A `[[boards]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardEntry {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
}

/// A `[[components]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    /// Kind name, e.g. `logic-chip`
    pub kind: String,
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
    /// Declared board id
    pub board: u32,
}

impl LayoutFile {
    /// Parse layout TOML.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Check the entries and convert them to a domain layout.
    pub fn into_layout(self) -> Result<Layout> {
        if self.boards.is_empty() {
            return Err(CliError::Layout("Layout must declare at least one board".into()));
        }

        let mut boards = Vec::with_capacity(self.boards.len());
        for (index, entry) in self.boards.into_iter().enumerate() {
            if entry.width == 0 || entry.height == 0 {
                return Err(CliError::Layout(format!(
                    "Board {} must have a non-zero size, got {}x{}",
                    index, entry.width, entry.height
                )));
            }
            let cells = u64::from(entry.width) * u64::from(entry.height);
            if cells > MAX_BOARD_CELLS {
                return Err(CliError::Layout(format!(
                    "Board {} is too large: {}x{} is {} cells, the limit is {}",
                    index, entry.width, entry.height, cells, MAX_BOARD_CELLS
                )));
            }
            boards.push(BoardSpec {
                width: entry.width,
                height: entry.height,
            });
        }

        // board references are not checked here; unknown ones are reported during the run
        let mut components = Vec::with_capacity(self.components.len());
        for (index, entry) in self.components.into_iter().enumerate() {
            let kind: ComponentKind = entry
                .kind
                .parse()
                .map_err(|e| CliError::Layout(format!("Component {}: {}", index + 1, e)))?;
            components.push(ComponentSpec::new(kind, entry.x, entry.y, entry.board));
        }

        Ok(Layout { boards, components })
    }
}

/// Load a layout file.
pub fn load_layout(path: &Path) -> Result<Layout> {
    let contents = fs::read_to_string(path)?;
    LayoutFile::parse(&contents)?.into_layout()
}

/// Load a layout file, or the built-in layout when no path is given.
pub fn resolve_layout(path: Option<&Path>) -> Result<Layout> {
    match path {
        Some(path) => {
            tracing::debug!("Loading layout from {}", path.display());
            load_layout(path)
        }
        None => Ok(Layout::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
        [[boards]]
        width = 12
        height = 8

        [[components]]
        kind = "LEDLight"
        x = 1
        y = 2
        board = 0

        [[components]]
        kind = "logic_chip"
        x = 3
        y = 4
        board = 5
    "#;

    #[test]
    fn test_parse_layout() {
        let layout = LayoutFile::parse(SAMPLE).unwrap().into_layout().unwrap();
        assert_eq!(layout.boards, vec![BoardSpec { width: 12, height: 8 }]);
        assert_eq!(
            layout.components,
            vec![
                ComponentSpec::new(ComponentKind::LedLight, 1, 2, 0),
                ComponentSpec::new(ComponentKind::LogicChip, 3, 4, 5),
            ]
        );
    }

    #[test]
    fn test_layout_without_boards() {
        let result = LayoutFile::parse("").unwrap().into_layout();
        assert!(matches!(result, Err(CliError::Layout(_))));
    }

    #[test]
    fn test_zero_sized_board() {
        let result = LayoutFile::parse("[[boards]]\nwidth = 0\nheight = 4\n")
            .unwrap()
            .into_layout();
        match result {
            Err(CliError::Layout(msg)) => assert!(msg.contains("Board 0")),
            other => panic!("Expected layout error, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_board() {
        let result = LayoutFile::parse("[[boards]]\nwidth = 4\nheight = 4\n\n[[boards]]\nwidth = 4000000000\nheight = 4000000000\n")
            .unwrap()
            .into_layout();
        match result {
            Err(CliError::Layout(msg)) => {
                assert!(msg.contains("Board 1"));
                assert!(msg.contains("too large"));
            }
            other => panic!("Expected layout error, got {:?}", other),
        }
    }

    #[test]
    fn test_board_at_the_size_limit() {
        let layout = LayoutFile::parse("[[boards]]\nwidth = 1000\nheight = 1000\n")
            .unwrap()
            .into_layout()
            .unwrap();
        assert_eq!(layout.boards, vec![BoardSpec { width: 1000, height: 1000 }]);
    }

    #[test]
    fn test_unknown_kind() {
        let contents = "[[boards]]\nwidth = 4\nheight = 4\n\n[[components]]\nkind = \"capacitor\"\nx = 0\ny = 0\nboard = 0\n";
        match LayoutFile::parse(contents).unwrap().into_layout() {
            Err(CliError::Layout(msg)) => {
                assert!(msg.contains("Component 1"));
                assert!(msg.contains("capacitor"));
            }
            other => panic!("Expected layout error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_coordinate_is_a_parse_error() {
        let contents = "[[boards]]\nwidth = 4\nheight = 4\n\n[[components]]\nkind = \"resistor\"\nx = -1\ny = 0\nboard = 0\n";
        assert!(matches!(LayoutFile::parse(contents), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_resolve_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("layout.toml");
        fs::write(&path, SAMPLE).unwrap();

        assert_eq!(resolve_layout(Some(path.as_path())).unwrap().boards.len(), 1);
        assert_eq!(resolve_layout(None).unwrap(), Layout::builtin());
        assert!(matches!(
            resolve_layout(Some(dir.path().join("missing.toml").as_path())),
            Err(CliError::Io(_))
        ));
    }
}
