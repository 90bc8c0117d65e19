//! Generate Command
//!
//! Materialize the scaffold tree from the outline and rewrite the aggregator.

use crate::cli::CommandContext;
use crate::cli::ui::Output;
use crate::generator::Generator;
use crate::types::Result;

pub fn run(ctx: &CommandContext) -> Result<()> {
    let output = Output::new();
    let summary = Generator::new(ctx.config.clone()).run(&ctx.invocation)?;

    for finding in &summary.audit.findings {
        output.warning(&finding.to_string());
    }

    output.info(&format!(
        "{} sections from {} outline entries ({} new placeholders)",
        summary.nodes,
        summary.outline_entries,
        summary.materialize.created.len()
    ));
    output.success(&format!("wrote {}", summary.aggregator_path.display()));

    Ok(())
}
