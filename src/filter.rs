use std::sync::OnceLock;

use regex::Regex;

use crate::config::BANNED_KEYWORDS;

/// Case-insensitive keyword match over submitted text.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    pattern: Option<Regex>,
}

impl ContentFilter {
    pub fn new<S: AsRef<str>>(words: &[S]) -> anyhow::Result<Self> {
        let alternatives: Vec<String> = words
            .iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(&w))
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        // Words are lowercased here and text in `flags`; no case folding beyond that
        let pattern = Regex::new(&alternatives.join("|"))
            .map_err(|e| anyhow::anyhow!("Failed to build content filter: {}", e))?;
        Ok(Self { pattern: Some(pattern) })
    }

    /// True if any banned word occurs anywhere in `text`.
    pub fn flags(&self, text: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(&text.to_lowercase()),
            None => false,
        }
    }
}

fn default_filter() -> &'static ContentFilter {
    static FILTER: OnceLock<ContentFilter> = OnceLock::new();
    FILTER.get_or_init(|| {
        ContentFilter::new(BANNED_KEYWORDS).expect("Banned keywords should compile")
    })
}

/// Checks `text` against the built-in keyword list.
pub fn flags(text: &str) -> bool {
    default_filter().flags(text)
}
