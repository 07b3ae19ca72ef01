//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles, percent};
use crate::commands::{AnalysisResult, ComparisonRow, SolveResult};
use crate::experiment::ExperimentStats;
use crate::experiment::search::SearchRow;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({})",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.player
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            feedback_tiles(&step.guess, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.won {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else if result.exhausted {
        println!(
            "{}",
            format!(
                "❌ No candidates left after {} guesses",
                result.steps.len()
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_corpus {
        println!("\n{}", "⚠ not in the word list".yellow());
    }

    println!("\n📊 Against {} words:", result.total);
    println!(
        "   Score:  {}",
        format!("{:.4}", result.score).bright_yellow()
    );
    println!("   Rank:   {} of {}", result.rank, result.total);

    let max_weight = result
        .letters
        .iter()
        .map(|(_, w)| *w)
        .fold(0.0_f64, f64::max);
    println!("\n🔤 {}", "Letters:".bright_cyan().bold());
    for (letter, weight) in &result.letters {
        println!(
            "   {}  [{}] {weight:.4}",
            letter.to_uppercase(),
            create_progress_bar(*weight, max_weight, 20).green()
        );
    }

    if !result.best.is_empty() {
        println!("\n🏆 {}", "Best scoring words:".bright_cyan().bold());
        for (word, score) in &result.best {
            println!("   {}  {score:.4}", word.text().to_uppercase());
        }
    }
}

/// Print the statistics of one experiment
pub fn print_experiment_stats(title: &str, stats: &ExperimentStats) {
    println!("\n{}", "═".repeat(70));
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {}", stats.total_games);
    println!(
        "  Successfully solved: {} {}",
        stats.success_count,
        format!("({})", percent(stats.success_rate())).green()
    );
    if stats.failed() > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed(),
            format!("({} out of candidates)", stats.exhausted).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!("  Speed:               {:.3}", stats.speed());
    println!(
        "  Total time:          {:.2}s",
        stats.elapsed.as_secs_f64()
    );

    if stats.success_count > 0 {
        println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
        let max_count = stats.distribution.values().copied().max().unwrap_or(1);
        for (guesses, count) in &stats.distribution {
            let share = *count as f64 / stats.success_count as f64 * 100.0;
            let bar_len = (*count * 40 / max_count).max(usize::from(*count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {guesses:2} guesses: {bar} {count:5} ({share:5.1}%)");
        }
    }

    if !stats.failures.is_empty() {
        println!("\n😰 {}", "Unsolved".yellow().bold());
        let shown: Vec<String> = stats
            .failures
            .iter()
            .take(10)
            .map(|w| w.text().to_uppercase())
            .collect();
        let more = stats.failures.len().saturating_sub(shown.len());
        if more > 0 {
            println!("  {} … and {more} more", shown.join(" "));
        } else {
            println!("  {}", shown.join(" "));
        }
    }
}

/// Print a comparison table of several players
pub fn print_comparison(rows: &[ComparisonRow]) {
    println!(
        "\n{}",
        format!(
            "{:<8} {:<22} {:>9} {:>8} {:>9} {:>8}",
            "player", "initial", "success", "speed", "average", "time"
        )
        .bold()
    );
    println!("{}", "─".repeat(70));
    for row in rows {
        let success = percent(row.stats.success_rate());
        let success = if row.stats.failed() == 0 {
            success.green()
        } else {
            success.yellow()
        };
        println!(
            "{:<8} {:<22} {:>9} {:>8.3} {:>9.3} {:>7.2}s",
            row.spec.kind.to_string(),
            row.spec.initial_text(),
            success,
            row.stats.speed(),
            row.stats.average_guesses(),
            row.stats.elapsed.as_secs_f64()
        );
    }
}

/// Print the best rows of an opening search
pub fn print_search_summary(rows: &[SearchRow], shown: usize) {
    let mut ranked: Vec<&SearchRow> = rows.iter().collect();
    ranked.sort_by(|a, b| b.success.total_cmp(&a.success).then(a.speed.total_cmp(&b.speed)));

    println!("\n🔎 {}", "Best openings by success".bright_cyan().bold());
    for row in ranked.iter().take(shown) {
        let words: Vec<String> = row.words.iter().map(|w| w.text().to_uppercase()).collect();
        println!(
            "  {:<24} score {:.4}  success {}  speed {:.3}",
            words.join(" "),
            row.score,
            percent(row.success).green(),
            row.speed
        );
    }
}
