use serde::Deserialize;
use std::fmt;

/// Word typed at the city prompt to leave the interactive loop.
pub const EXIT_SENTINEL: &str = "exit";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub temperature_f: i32,
    pub condition: String,
    pub humidity_pct: u8,
}

/// A city name in canonical form: trimmed, single-spaced, title case per word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityName(String);

impl CityName {
    pub fn normalize(raw: &str) -> Self {
        let words: Vec<String> = raw.split_whitespace().map(title_case).collect();
        Self(words.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True when `raw` is the exit word, ignoring case and surrounding whitespace.
pub fn is_exit_sentinel(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            // Uppercasing may expand ('ß' -> "SS"); only the leading char stays upper.
            let mut upper = first.to_uppercase();
            let head = upper.next().unwrap_or(first);
            std::iter::once(head).chain(upper.chain(chars).flat_map(char::to_lowercase)).collect()
        }
        None => String::new(),
    }
}
