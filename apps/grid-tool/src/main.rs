//! CLI for region-addressed regex find/replace over JSON tables.
//!
//! Provides commands for:
//! - Applying task lists and writing the modified table
//! - Previewing task lists as cell diffs
//! - Whole-table replacement, target resolution and paging

mod cli;

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use regex_grid_core::config::GridConfig;
use regex_grid_core::generator::parse_generated_tasks;
use regex_grid_core::{
    apply_tasks_with_report, preview_tasks, replace_all, resolve_target, Table, Task,
};
use serde_json::{json, Value as JsonValue};

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GridConfig::default(),
    };

    let output = run(cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<GridConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn load_table(path: &Path) -> anyhow::Result<Table> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table {}", path.display()))?;
    let table: Table = serde_json::from_str(&text)
        .with_context(|| format!("Invalid table snapshot {}", path.display()))?;
    tracing::debug!(
        "Loaded table {} ({} rows x {} columns)",
        path.display(),
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

fn load_tasks(path: &Path) -> anyhow::Result<Vec<Task>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tasks {}", path.display()))?;
    parse_generated_tasks(&text).with_context(|| format!("Invalid task list {}", path.display()))
}

fn save_table(table: &Table, path: &Path) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(table)?;
    fs::write(path, text).with_context(|| format!("Failed to write table {}", path.display()))?;
    tracing::info!("Wrote modified table to {}", path.display());
    Ok(())
}

/// Executes one command and returns its JSON report.
fn run(command: Commands, config: &GridConfig) -> anyhow::Result<JsonValue> {
    match command {
        Commands::Apply {
            table,
            tasks,
            output,
            limit,
        } => {
            let mut grid = load_table(&table)?;
            let tasks = load_tasks(&tasks)?;
            let report = apply_tasks_with_report(&mut grid, &tasks)?;

            if let Some(path) = output {
                save_table(&grid, &path)?;
            }

            let limit = limit.unwrap_or(config.apply_preview_limit);
            Ok(json!({
                "total_changes": report.changes.len(),
                "changes": report.changes.iter().take(limit).collect::<Vec<_>>(),
                "skipped": report.skipped,
            }))
        }

        Commands::Preview {
            table,
            tasks,
            limit,
        } => {
            let grid = load_table(&table)?;
            let tasks = load_tasks(&tasks)?;
            let diffs = preview_tasks(&grid, &tasks)?;

            let limit = limit.unwrap_or(config.diff_preview_limit);
            Ok(json!({
                "total_diffs": diffs.len(),
                "diffs": diffs.iter().take(limit).collect::<Vec<_>>(),
            }))
        }

        Commands::ReplaceAll {
            table,
            pattern,
            replacement,
            output,
        } => {
            let mut grid = load_table(&table)?;
            let changes = replace_all(&mut grid, &pattern, &replacement)
                .with_context(|| format!("Replacement of '{}' failed", pattern))?;

            if let Some(path) = output {
                save_table(&grid, &path)?;
            }

            Ok(json!({
                "total_changes": changes.len(),
                "changes": changes,
            }))
        }

        Commands::Resolve { table, target } => {
            let grid = load_table(&table)?;
            let cells = resolve_target(&grid, &target)?;
            let labels: Vec<String> = cells.iter().map(ToString::to_string).collect();
            Ok(json!({ "target": target, "cells": labels }))
        }

        Commands::Page {
            table,
            page,
            page_size,
        } => {
            let grid = load_table(&table)?;
            let page = grid.page(page, page_size.unwrap_or(config.page_size))?;
            Ok(serde_json::to_value(page)?)
        }
    }
}
