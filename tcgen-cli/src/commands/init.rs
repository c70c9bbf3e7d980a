//! Init command handler
//!
//! Writes a starter manifest to get a provider going.

use anyhow::{Context, Result, bail};
use colored::*;
use std::fs;
use std::path::Path;

const STARTER_MANIFEST: &str = r#"# Provider whose services get acceptance-test builds
provider_name = "azurerm"
environment = "public"

# Absolute ID of the VCS root configured on the TeamCity server
vcs_root_id = "TF_AzureRM_Repository"

# Set to true to generate every nightly trigger inactive
disable_all_triggers = false

[defaults]
nightly_tests_enabled = true
start_hour = 0
parallelism = 20
days_of_week = "*"
days_of_month = "*"
# Minutes
timeout = 720

# One table per package under ./internal/services
[services.resource]
display_name = "Resources"

[services.network]
display_name = "Network"
parallelism = 10
start_hour = 2
"#;

/// Write the starter manifest to `path`
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_starter_manifest(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists, use --force to overwrite it",
            path.display()
        );
    }

    fs::write(path, STARTER_MANIFEST)
        .with_context(|| format!("Failed to write manifest to {:?}", path))?;

    println!("{}", "✓ Manifest created!".green().bold());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Set the provider name and VCS root ID in {}", path.display());
    println!("  2. Add a [services.<package>] table per service");
    println!(
        "  3. Run {} to write the Kotlin DSL",
        "tcgen generate -o .teamcity/settings.kts".cyan()
    );

    Ok(())
}
