//! Display functions for command results

use super::formatters::{group_digits, position_bar, split_match};
use crate::commands::{
    BenchmarkResult, JumpResult, LookupResult, NeighborsResult, SearchOutcome, SpaceSummary,
};
use crate::navigation::Entry;
use colored::Colorize;
use std::time::Duration;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Word with the first `query` match emphasized
fn highlighted(word: &str, query: &str) -> String {
    match split_match(word, query) {
        Some((before, matched, after)) => {
            let matched = matched.bright_yellow().bold().underline();
            format!("{before}{matched}{after}")
        }
        None => word.to_string(),
    }
}

fn print_entry_row(entry: &Entry, query: &str, current: bool) {
    let marker = if current { "▶" } else { " " };
    let word = highlighted(entry.word.text(), query);
    let index = group_digits(&entry.index);
    if current {
        let marker = marker.green().bold();
        println!(" {marker} {} {}", word.bold(), index.bright_black());
    } else {
        println!(" {marker} {word} {}", index.bright_black());
    }
}

/// Print a decoded or encoded word with its place in the space
pub fn print_lookup_result(result: &LookupResult) {
    print_header("LOOKUP");

    let word = result.word.text().bright_yellow().bold();
    println!("   Word:      {word}");
    println!("   Index:     {}", group_digits(&result.index));
    println!(
        "   Bucket:    {} symbols, position {}",
        result.length,
        group_digits(&result.position)
    );
    println!(
        "   Through:   [{}] {:.3e}",
        position_bar(result.fraction(), 30).green(),
        result.fraction()
    );

    if result.redacted {
        println!(
            "\n{}",
            "⚠ Redacted index: this word does not encode back to it".yellow()
        );
    }
}

/// Print a pivot with its lookback and lookahead
pub fn print_neighbors_result(result: &NeighborsResult) {
    print_header("NEIGHBORS");

    // Lookback is nearest first; show it in ascending order
    for entry in result.before.iter().rev() {
        print_entry_row(entry, "", false);
    }
    print_entry_row(&result.pivot, "", true);
    for entry in &result.after {
        print_entry_row(entry, "", false);
    }
}

/// Print where a literal jump landed
pub fn print_jump_result(result: &JumpResult) {
    print_header("JUMP");

    println!("   Query:     {}", result.query);
    let word = result.entry.word.text().bright_yellow().bold();
    if result.padded {
        println!("   Word:      {word} {}", "(padded)".bright_black());
    } else {
        println!("   Word:      {word}");
    }
    println!("   Index:     {}", group_digits(&result.entry.index));
}

/// Print the outcome of a single search
pub fn print_search_result(result: &SearchOutcome, verbose: bool) {
    print_header("SEARCH");

    println!(
        "   Query:     {} ({})",
        result.query.bright_yellow().bold(),
        result.direction
    );
    println!(
        "   From:      {} {}",
        result.start.word,
        group_digits(&result.start.index).bright_black()
    );
    println!();

    match &result.report.found {
        Some(entry) => {
            let phase = if result.report.from_window() {
                "nearby"
            } else {
                "random probe"
            };
            let phase = format!("({phase})");
            println!("{} {}", "✅ Found".green().bold(), phase.bright_black());
            print_entry_row(entry, &result.query, true);
        }
        None => println!("{}", "❌ No match".red().bold()),
    }

    if let Some(probe) = &result.report.probe
        && (verbose || result.report.found.is_none())
    {
        println!("\n📊 {}", "Random probe:".bright_cyan().bold());
        println!("   Trials:    {}/{}", probe.trials, result.budget);
        println!("   Hits:      {}", probe.hits);
        println!("   Accepted:  {}", probe.accepted);
    }

    if verbose {
        println!("   Time taken: {:.2}ms", millis(result.duration));
    }
}

/// Print per-length counts and offsets
pub fn print_space_summary(summary: &SpaceSummary) {
    print_header("SPACE");

    println!("   {:>3}  {:>66}  {:>66}", "len", "offset", "count");
    for row in &summary.buckets {
        println!(
            "   {:>3}  {:>66}  {:>66}",
            row.length,
            group_digits(&row.offset),
            group_digits(&row.count)
        );
    }
    println!(
        "\n   Total:  {} ({} bits)",
        group_digits(&summary.total).bright_yellow().bold(),
        summary.total.bits()
    );
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    print_header("BENCHMARK RESULTS");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Probes:           {}", result.probes);
    println!("   Budget:           {} trials each", result.budget);
    let rate = if result.probes == 0 {
        0.0
    } else {
        result.found as f64 / result.probes as f64 * 100.0
    };
    println!(
        "   Found:            {}",
        format!("{} ({rate:.1}%)", result.found)
            .bright_yellow()
            .bold()
    );
    println!("   Total hits:       {}", result.total_hits);
    println!(
        "   Fastest:          {}",
        format!("{:.2}ms", millis(result.min_latency)).green()
    );
    println!("   Average:          {:.2}ms", millis(result.average_latency));
    println!(
        "   Slowest:          {}",
        format!("{:.2}ms", millis(result.max_latency)).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Probes/second:    {:.1}", result.probes_per_second);
}
