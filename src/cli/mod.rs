// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzmark command-line interface.
//!
//! Three subcommands mirroring the library: `search` ranks and highlights,
//! `split` shows how a needle tokenizes, and `filter` prints the raw boolean
//! matches. Candidates are read one per line from a file or stdin.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fuzzmark",
    about = "Fuzzy search over lines of text",
    version
)]
pub struct Cli {
    /// JSON file with matcher configuration (camelCase keys)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank lines by how well they match a query
    Search {
        /// Search query
        query: String,

        /// File with one candidate per line (stdin if omitted)
        #[arg(short, long)]
        file: Option<String>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Try every term ordering for queries of up to N terms
        ///
        /// Without a value, the configured limit is used (5 by default).
        /// An explicit 0 keeps the search in order.
        #[arg(short, long, num_args = 0..=1)]
        out_of_order: Option<Option<usize>>,

        /// Skip ranking when more than N lines match
        #[arg(long)]
        info_thresh: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the terms and negations a query tokenizes into
    Split {
        /// Search query
        query: String,
    },

    /// Print indices of lines matching a query, in input order
    Filter {
        /// Search query
        query: String,

        /// File with one candidate per line (stdin if omitted)
        #[arg(short, long)]
        file: Option<String>,
    },
}
