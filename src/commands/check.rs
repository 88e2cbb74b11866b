//! Plan file validation
//! Usage: loomviz check <plan.json> [--json]

use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde_json::Value;

use crate::schema::{validate_plan, Plan};

/// Read and JSON-parse a plan file. Parse failures are I/O-level errors,
/// distinct from schema violations.
pub(crate) fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Plan file is not valid JSON: {}", path.display()))
}

/// Load and validate a plan file, printing violations on failure.
pub(crate) fn load_plan(path: &Path) -> Result<Plan> {
    let document = load_document(path)?;
    match validate_plan(&document) {
        Ok(plan) => Ok(plan),
        Err(violations) => {
            for violation in &violations {
                eprintln!("  {} {violation}", "✗".red().bold());
            }
            bail!(
                "{} failed validation with {} error(s)",
                path.display(),
                violations.len()
            );
        }
    }
}

/// Validate a plan file and report the result.
pub fn execute(plan_path: String, json: bool) -> Result<()> {
    let path = Path::new(&plan_path);
    let document = load_document(path)?;

    match validate_plan(&document) {
        Ok(plan) => {
            if json {
                let summary = serde_json::json!({
                    "valid": true,
                    "id": plan.id,
                    "total_tasks": plan.total_tasks,
                    "total_waves": plan.total_waves,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{} {} is a valid plan ({} tasks, {} waves)",
                    "✓".green().bold(),
                    path.display(),
                    plan.total_tasks,
                    plan.total_waves
                );
            }
            Ok(())
        }
        Err(violations) => {
            if json {
                let summary = serde_json::json!({
                    "valid": false,
                    "violations": violations,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} {} failed validation:", "✗".red().bold(), path.display());
                for violation in &violations {
                    println!("  - {violation}");
                }
            }
            bail!("plan failed validation with {} error(s)", violations.len());
        }
    }
}
