//! Check command implementation.

use crate::driver::assemble;
use crate::error::Result;
use crate::output::Formatter;
use boardline_domain::{Layout, PlacementRules};

/// Execute the check command.
pub fn execute_check(layout: &Layout, rules: PlacementRules, formatter: &Formatter) -> Result<()> {
    let (_, report) = assemble(layout, rules)?;
    println!("{}", formatter.format_check(&report)?);
    Ok(())
}
