// Word cloud rendering boundary
// The pipeline only hands over a text blob and a layout; how the cloud is
// drawn belongs to the renderer implementation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::error::AppResult;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w[\w']+").expect("word pattern is a valid regex"));

/// Canvas settings passed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudLayout {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub max_words: usize,
}

impl Default for CloudLayout {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            background: "white".to_string(),
            max_words: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedWord {
    pub word: String,
    pub count: usize,
    /// Frequency relative to the most frequent word, in (0, 1]
    pub weight: f64,
}

/// Rendered artifact: the canvas plus the words to draw, heaviest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub words: Vec<WeightedWord>,
}

impl WordCloud {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub trait CloudRenderer {
    fn render(&self, text: &str, layout: &CloudLayout) -> AppResult<WordCloud>;
}

/// Weights words by how often they occur in the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyCloudRenderer;

impl FrequencyCloudRenderer {
    pub fn new() -> Self {
        Self
    }

    fn word_counts(text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for m in WORD_PATTERN.find_iter(text) {
            let mut word = m.as_str().to_lowercase();
            if word.ends_with("'s") {
                word.truncate(word.len() - 2);
            }
            if word.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
        counts
    }
}

impl CloudRenderer for FrequencyCloudRenderer {
    fn render(&self, text: &str, layout: &CloudLayout) -> AppResult<WordCloud> {
        let mut ranked: Vec<(String, usize)> = Self::word_counts(text).into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(layout.max_words);

        if ranked.is_empty() {
            warn!("no words to render, producing an empty cloud");
        }

        let top = ranked.first().map(|(_, count)| *count).unwrap_or(1) as f64;
        let words = ranked
            .into_iter()
            .map(|(word, count)| WeightedWord {
                word,
                count,
                weight: count as f64 / top,
            })
            .collect();

        Ok(WordCloud {
            width: layout.width,
            height: layout.height,
            background: layout.background.clone(),
            words,
        })
    }
}
