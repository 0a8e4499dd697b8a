use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a calendar feed downloads.
pub fn fetch_spinner(url: &str) -> ProgressBar {
    // Feed URLs carry a secret token in the query string; keep it off screen.
    let shown = url.split('?').next().unwrap_or(url);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/", "-"])
            .template("Fetching {msg} {spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(shown.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
