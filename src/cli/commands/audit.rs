//! Audit Command
//!
//! Report scaffold drift against the outline without writing anything.
//! Findings never change the exit status.

use crate::cli::CommandContext;
use crate::cli::ui::Output;
use crate::generator::Generator;
use crate::types::Result;

pub fn run(ctx: &CommandContext, format: &str) -> Result<()> {
    let report = Generator::new(ctx.config.clone()).audit()?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let output = Output::new();
    for finding in &report.findings {
        output.warning(&finding.to_string());
    }

    if report.is_clean() {
        output.success(&format!(
            "{} matches the outline",
            ctx.config.scaffold.root.display()
        ));
    } else {
        output.info(&format!("{} finding(s)", report.len()));
    }

    Ok(())
}
