// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::fs;
use std::io::Read;

use fuzzmark::{Fuzzy, FuzzyConfig, MatchInfo};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// One search hit as printed by `--json`.
#[derive(Serialize)]
struct JsonHit<'a> {
    idx: usize,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<&'a MatchInfo>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let fuzzy = load_fuzzy(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            query,
            file,
            limit,
            out_of_order,
            info_thresh,
            json,
        } => {
            let lines = read_lines(file.as_deref())?;
            let limit_terms = match out_of_order {
                None => 0,
                Some(None) => fuzzy.config().out_of_order_limit,
                Some(Some(n)) => n,
            };
            let mut opts = fuzzy.options(false).out_of_order(limit_terms);
            if let Some(thresh) = info_thresh {
                opts = opts.info_thresh(thresh);
            }
            let result = fuzzy
                .search_with(&lines, &query, &opts)
                .map_err(|e| format!("Search failed: {}", e))?;
            print_search(&lines, &result, limit, json)
        }
        Commands::Split { query } => {
            let parsed = fuzzy.parse(&query);
            for term in &parsed.terms {
                let kind = if term.is_exact() { "exact" } else { "word" };
                println!("{}  {}", display::themed(display::CYAN, &[], kind), term.text());
            }
            for neg in &parsed.negations {
                println!("{}  {}", display::themed(display::YELLOW, &[], "not"), neg);
            }
            Ok(())
        }
        Commands::Filter { query, file } => {
            let lines = read_lines(file.as_deref())?;
            let idxs = fuzzy
                .filter(&lines, &query, None)
                .map_err(|e| format!("Filter failed: {}", e))?;
            for idx in idxs.unwrap_or_default() {
                println!("{}", idx);
            }
            Ok(())
        }
    }
}

fn load_fuzzy(path: Option<&str>) -> Result<Fuzzy, String> {
    let config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config {}: {}", path, e))?;
            FuzzyConfig::from_json(&json).map_err(|e| format!("Invalid config {}: {}", path, e))?
        }
        None => FuzzyConfig::default(),
    };
    Fuzzy::new(config).map_err(|e| format!("Invalid config: {}", e))
}

fn read_lines(path: Option<&str>) -> Result<Vec<String>, String> {
    let content = match path {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            buf
        }
    };
    Ok(content.lines().map(str::to_string).collect())
}

fn print_search(
    lines: &[String],
    result: &fuzzmark::SearchResult,
    limit: usize,
    json: bool,
) -> Result<(), String> {
    if result.is_noop() {
        return Err("Query has nothing to search for".to_string());
    }

    let ranked = result.order.is_some();
    let hits: Vec<JsonHit> = if ranked {
        result
            .ranked()
            .take(limit)
            .map(|(idx, info)| JsonHit {
                idx,
                text: &lines[idx],
                info: Some(info),
            })
            .collect()
    } else {
        result
            .indices()
            .iter()
            .take(limit)
            .map(|&idx| JsonHit {
                idx,
                text: &lines[idx],
                info: None,
            })
            .collect()
    };

    if json {
        let out = serde_json::to_string_pretty(&hits)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    for hit in &hits {
        match hit.info {
            Some(info) => println!("{}", display::result_line(hit.idx, hit.text, info)),
            None => println!("{}", display::plain_line(hit.idx, hit.text)),
        }
    }
    println!("{}", display::footer(result.indices().len(), ranked));
    Ok(())
}
