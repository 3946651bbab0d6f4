//! Display functions for command results

use crate::commands::SearchReport;
use colored::Colorize;

/// Print a summary of a finished search
pub fn print_search_summary(report: &SearchReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SEARCH SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Word length:      {}", report.word_length);
    println!("   Words loaded:     {}", report.words_loaded);
    println!("   Nodes visited:    {}", report.nodes_visited);
    println!("   Longest chain:    {}", report.tree_depth);

    let found = report.paths.len();
    if found == 0 {
        println!("   Paths found:      {}", "0".red().bold());
    } else {
        println!(
            "   Paths found:      {}",
            found.to_string().bright_yellow().bold()
        );
    }
}
