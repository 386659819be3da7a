//! Developer harness for the lab engine.
//!
//! Computes shape metrics for ad-hoc cell lists and replays scripted
//! sessions through the real engine, printing every envelope the host would
//! receive. Useful for poking at grading behavior without a browser.

use std::fs;

use clap::{Parser, Subcommand};

use lab::engine::LabCore;
use lab::exercise::Exercises;
use lab::flow::Event;
use lab::grid::{Cell, Shape};
use lab::metrics;
use tutor::Outbound;
use tutor::channel::Notifier;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid cell `{0}`; expected `col,row`")]
    InvalidCell(String),
    #[error("failed to read script {path}: {source}")]
    ScriptRead { path: String, source: std::io::Error },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "lab-cli", about = "Shape Lab metrics and session harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute area and perimeter for a list of cells.
    Metrics {
        /// Cells as `col,row` pairs, e.g. `1,1 2,1 2,2`.
        #[arg(required = true)]
        cells: Vec<String>,
    },
    /// Replay a JSON event script through a fresh session.
    Replay {
        /// Path to a JSON array of session events.
        path: String,
    },
    /// Print the standard exercise set.
    Exercises,
}

/// Notifier that prints outbound envelopes to stdout as JSON lines.
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&mut self, envelope: &Outbound) {
        match serde_json::to_string(envelope) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::warn!(error = %err, "failed to serialize envelope"),
        }
    }
}

fn parse_cell(raw: &str) -> Result<Cell, CliError> {
    let Some((col, row)) = raw.split_once(',') else {
        return Err(CliError::InvalidCell(raw.to_owned()));
    };
    let col = col.trim().parse().map_err(|_| CliError::InvalidCell(raw.to_owned()))?;
    let row = row.trim().parse().map_err(|_| CliError::InvalidCell(raw.to_owned()))?;
    Ok(Cell::new(col, row))
}

fn parse_shape(cells: &[String]) -> Result<Shape, CliError> {
    cells.iter().map(|raw| parse_cell(raw)).collect()
}

fn run_metrics(cells: &[String]) -> Result<(), CliError> {
    let shape = parse_shape(cells)?;
    let report = serde_json::json!({
        "cells": shape.len(),
        "area": metrics::area(&shape),
        "perimeter": metrics::perimeter(&shape),
    });
    println!("{report:#}");
    Ok(())
}

fn run_replay(path: &str) -> Result<(), CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CliError::ScriptRead { path: path.to_owned(), source })?;
    let events: Vec<Event> = serde_json::from_str(&raw)?;

    let mut core = LabCore::new(Box::new(StdoutNotifier));
    core.start();
    for event in events {
        if let Some(verdict) = core.apply(event) {
            println!("{}", serde_json::json!({ "graded": verdict }));
        }
    }
    println!("{:#}", serde_json::json!({ "final": core.state(), "readout": core.readout() }));
    Ok(())
}

fn run_exercises() -> Result<(), CliError> {
    let value = serde_json::to_value(Exercises::standard())?;
    println!("{value:#}");
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Metrics { cells } => run_metrics(&cells),
        Command::Replay { path } => run_replay(&path),
        Command::Exercises => run_exercises(),
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
