//! Manifest Command
//!
//! Scan the releases directory and write `releases.json`.

use crate::cli::CommandContext;
use crate::cli::ui::Output;
use crate::manifest::ManifestScanner;
use crate::types::Result;

pub fn run(ctx: &CommandContext) -> Result<()> {
    let output = Output::new();
    let config = &ctx.config.manifest;

    output.info(&format!("Scanning releases in: {}", config.releases_dir.display()));

    let Some(manifest) = ManifestScanner::new(config).generate()? else {
        output.warning("No releases found!");
        return Ok(());
    };

    output.success(&format!("Generated manifest: {}", config.output.display()));
    println!("  Total releases: {}", manifest.total_releases);
    if let Some(latest) = &manifest.latest_version {
        println!("  Latest version: {}", latest);
    }

    output.section("Releases found");
    for release in &manifest.releases {
        output.item(&release.summary());
    }

    Ok(())
}
