//! Terminal rendering for import results.

use cabin_sync_core::cabin::MatchedVia;
use cabin_sync_core::{ExternalReservation, SyncReport};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for ExternalReservation {
    fn render(&self) -> String {
        let dates = format!(
            "{} → {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        );

        // Cabins that only came from a fallback are worth a second look
        let cabin = match self.cabin_match {
            MatchedVia::Pattern => self.cabin.bold().to_string(),
            MatchedVia::Default => self.cabin.red().to_string(),
            _ => self.cabin.yellow().to_string(),
        };

        let price = if self.nightly_price > 0 {
            format!(" ${}/night", self.nightly_price)
        } else {
            String::new()
        };

        format!(
            "   {} {} {} ({} {}){}",
            "+".green(),
            cabin,
            dates.dimmed(),
            self.guest_name,
            pluralize("night", self.nights()),
            price.dimmed()
        )
    }
}

impl Render for SyncReport {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let summary = format!("Imported {} of {}", self.success_count, self.total);
        if self.is_complete_success() {
            lines.push(summary.green().to_string());
        } else {
            lines.push(summary.yellow().to_string());
        }

        for error in &self.errors {
            lines.push(format!("   {}", error.red()));
        }

        lines.join("\n")
    }
}

fn pluralize(word: &str, count: i64) -> String {
    if count == 1 {
        format!("1 {word}")
    } else {
        format!("{count} {word}s")
    }
}
