//! Run command implementation.

use crate::driver::assemble;
use crate::error::Result;
use crate::output::Formatter;
use boardline_domain::{Layout, PlacementRules};

/// Execute the run command.
pub fn execute_run(layout: &Layout, rules: PlacementRules, formatter: &Formatter) -> Result<()> {
    let (assembly, report) = assemble(layout, rules)?;

    let output = formatter.format_run(&assembly, &report, rules)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
