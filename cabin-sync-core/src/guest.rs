//! Guest details pulled out of event text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GUEST_NAME: &str = "Guest";

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)reserved\s+for\s+([^(\n]+)").unwrap());

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:phone|tel|teléfono)\s*:\s*([+\d()\- ]+)").unwrap());

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Default for GuestInfo {
    fn default() -> Self {
        GuestInfo {
            name: DEFAULT_GUEST_NAME.to_string(),
            phone: String::new(),
            email: String::new(),
        }
    }
}

/// Extract guest name, phone and email from an event's summary and description.
/// Fields that cannot be found keep their defaults.
pub fn extract(summary: Option<&str>, description: Option<&str>) -> GuestInfo {
    let text = [summary, description]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n");

    let mut info = GuestInfo::default();

    if let Some(name) = NAME
        .captures(&text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|n| !n.is_empty())
    {
        info.name = name.to_string();
    }

    if let Some(phone) = PHONE
        .captures(&text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|p| p.chars().any(|c| c.is_ascii_digit()))
    {
        info.phone = phone.to_string();
    }

    if let Some(email) = EMAIL.find(&text) {
        info.email = email.as_str().to_string();
    }

    info
}
