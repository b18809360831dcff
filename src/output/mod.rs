pub mod formatter;

pub use formatter::{
    format_answers, format_json, format_report, format_score_line, should_use_colors, ColorMode,
    ScoreReport,
};
