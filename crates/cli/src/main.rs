use anyhow::Result;
use clap::{Parser, Subcommand};
use oneway::api::{SizeReport, MAX_BLOCKS, MIN_BLOCKS};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "oneway-cli")]
#[command(about = "Exact probability of a corner-to-corner path through randomly one-way streets")]
struct Cmd {
    /// Block count to run (repeatable); defaults to every supported size
    #[arg(long = "blocks", value_parser = clap::value_parser!(u8).range((MIN_BLOCKS as i64)..=(MAX_BLOCKS as i64)))]
    blocks: Vec<u8>,

    /// Split each enumeration across the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Print one JSON document instead of text lines
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Print crate version and code revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Some(Action::Report) => report(),
        None => run(&blocks_to_run(&cmd.blocks), cmd.parallel, cmd.json),
    }
}

fn code_rev() -> &'static str {
    option_env!("GIT_COMMIT").unwrap_or("unknown")
}

/// Requested sizes in ascending order without repeats; all sizes if none given.
fn blocks_to_run(requested: &[u8]) -> Vec<usize> {
    if requested.is_empty() {
        return (MIN_BLOCKS..=MAX_BLOCKS).collect();
    }
    let mut blocks: Vec<usize> = requested.iter().map(|&b| b as usize).collect();
    blocks.sort_unstable();
    blocks.dedup();
    blocks
}

fn run(blocks: &[usize], parallel: bool, json: bool) -> Result<()> {
    tracing::debug!(?blocks, parallel, json, "run");
    let mut reports = Vec::with_capacity(blocks.len());
    for &b in blocks {
        let start = Instant::now();
        let r = SizeReport::compute(b, parallel);
        tracing::info!(
            blocks = r.blocks,
            edges = r.edges,
            total = r.total,
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "enumerated"
        );
        if !json {
            println!("{}", r.sentence());
        }
        reports.push(r);
    }
    if json {
        println!("{}", render_json(&reports)?);
    }
    Ok(())
}

fn render_json(reports: &[SizeReport]) -> Result<String> {
    let obj = serde_json::json!({
        "code_rev": code_rev(),
        "results": reports,
    });
    Ok(serde_json::to_string_pretty(&obj)?)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": code_rev(),
        "version": oneway::VERSION,
        "blocks": [MIN_BLOCKS, MAX_BLOCKS],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oneway::api::ReachCount;
    use serde_json::Value;

    #[test]
    fn no_flags_runs_every_size() {
        let cmd = Cmd::try_parse_from(["oneway-cli"]).unwrap();
        assert!(cmd.action.is_none());
        assert!(!cmd.parallel && !cmd.json);
        assert_eq!(blocks_to_run(&cmd.blocks), vec![1, 2, 3]);
    }

    #[test]
    fn repeated_blocks_are_sorted_and_deduplicated() {
        let cmd = Cmd::try_parse_from([
            "oneway-cli", "--blocks", "3", "--blocks", "1", "--blocks", "3",
        ])
        .unwrap();
        assert_eq!(blocks_to_run(&cmd.blocks), vec![1, 3]);
    }

    #[test]
    fn sizes_outside_the_supported_range_are_rejected() {
        assert!(Cmd::try_parse_from(["oneway-cli", "--blocks", "0"]).is_err());
        assert!(Cmd::try_parse_from(["oneway-cli", "--blocks", "4"]).is_err());
    }

    #[test]
    fn report_subcommand_parses() {
        let cmd = Cmd::try_parse_from(["oneway-cli", "report"]).unwrap();
        assert!(matches!(cmd.action, Some(Action::Report)));
    }

    #[test]
    fn json_carries_exact_fraction() {
        let r = SizeReport::from_count(
            1,
            ReachCount {
                successes: 7,
                total: 16,
            },
        );
        let v: Value = serde_json::from_str(&render_json(&[r]).unwrap()).unwrap();
        assert_eq!(v["results"][0]["probability"], "7/16");
        assert_eq!(v["results"][0]["numer"], 7);
        assert_eq!(v["results"][0]["denom"], 16);
        assert_eq!(v["results"][0]["edges"], 4);
    }
}
