use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner on stderr for one pipeline stage; hidden when stderr is not a terminal.
pub fn stage_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template("{spinner} {msg}")
            .expect("invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Mark the stage done, with an optional parenthesized outcome after the message.
pub fn finish_spinner(pb: &ProgressBar, success: bool, outcome: Option<&str>) {
    let mark = if success { "✓" } else { "✗" };
    let message = match outcome {
        Some(outcome) => format!("{mark} {} ({outcome})", pb.message()),
        None => format!("{mark} {}", pb.message()),
    };
    pb.finish_with_message(message);
}
