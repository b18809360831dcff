use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::scoring::Score;

/// When to color console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => bail!("expected 'auto', 'always' or 'never', got '{}'", other),
        }
    }

    pub fn use_colors(self) -> bool {
        match self {
            ColorMode::Auto => should_use_colors(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a labelled answer list: "{label}: [a, b, c]"
pub fn format_answers(label: &str, answers: &[String], use_colors: bool) -> String {
    let list = answers.join(", ");
    if use_colors {
        format!("{}: [{}]", label.bold(), list.cyan())
    } else {
        format!("{}: [{}]", label, list)
    }
}

/// Format the score line, e.g.
/// "Score: Correct Pairs: 1; Percent Correct: 0.333...; Points: 33 (out of 100)"
pub fn format_score_line(score: &Score, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{} Correct Pairs: {}; Percent Correct: {}; Points: {} (out of {})",
            "Score:".bold(),
            score.correct_pair_count().yellow(),
            score.percent_correct().yellow(),
            score.points().green().bold(),
            score.points_available()
        )
    } else {
        format!("Score: {} (out of {})", score, score.points_available())
    }
}

/// Full console report: both answer lists followed by the score line.
pub fn format_report(
    reference: &[String],
    candidate: &[String],
    score: &Score,
    use_colors: bool,
) -> String {
    [
        format_answers("Correct answers", reference, use_colors),
        format_answers("Provided answers", candidate, use_colors),
        format_score_line(score, use_colors),
    ]
    .join("\n")
}

/// Machine-readable form of one scoring run
#[derive(Debug, Serialize)]
pub struct ScoreReport<'a> {
    pub reference: &'a [String],
    pub candidate: &'a [String],
    pub correct_pairs: u64,
    pub total_pairs: u64,
    pub percent_correct: f64,
    pub points: u32,
    pub points_available: u32,
}

impl<'a> ScoreReport<'a> {
    pub fn new(reference: &'a [String], candidate: &'a [String], score: &Score) -> Self {
        Self {
            reference,
            candidate,
            correct_pairs: score.correct_pair_count(),
            total_pairs: score.total_pair_count(),
            percent_correct: score.percent_correct(),
            points: score.points(),
            points_available: score.points_available(),
        }
    }
}

pub fn format_json(reference: &[String], candidate: &[String], score: &Score) -> Result<String> {
    let report = ScoreReport::new(reference, candidate, score);
    Ok(serde_json::to_string_pretty(&report)?)
}
