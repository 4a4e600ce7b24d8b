use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;

use crate::error::{AppError, AppResult};
use crate::render::CloudLayout;
use crate::services::CorpusFilter;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub filter: FilterConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub max_words: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let layout = CloudLayout::default();
        Self {
            width: layout.width,
            height: layout.height,
            background: layout.background,
            max_words: layout.max_words,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup; missing keys and
    /// unparsable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RenderConfig::default();
        Ok(Self {
            filter: FilterConfig {
                include: parse_list(lookup("CORPUS_INCLUDE")),
                exclude: parse_list(lookup("CORPUS_EXCLUDE")),
                attributes: parse_attributes(lookup("CORPUS_ATTRIBUTES"))?,
            },
            render: RenderConfig {
                width: lookup("CLOUD_WIDTH")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(defaults.width),
                height: lookup("CLOUD_HEIGHT")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(defaults.height),
                background: lookup("CLOUD_BACKGROUND")
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or(defaults.background),
                max_words: lookup("CLOUD_MAX_WORDS")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(defaults.max_words),
            },
        })
    }

    pub fn corpus_filter(&self) -> CorpusFilter {
        CorpusFilter {
            include: self.filter.include.clone(),
            exclude: self.filter.exclude.clone(),
            attributes: self.filter.attributes.clone(),
        }
    }

    pub fn cloud_layout(&self) -> CloudLayout {
        CloudLayout {
            width: self.render.width,
            height: self.render.height,
            background: self.render.background.clone(),
            max_words: self.render.max_words,
        }
    }
}

fn parse_list(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// `name=value` pairs separated by commas, e.g. `country=Italy,job=Cashier`.
fn parse_attributes(raw: Option<String>) -> AppResult<BTreeMap<String, String>> {
    let mut attributes = BTreeMap::new();
    for pair in parse_list(raw) {
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            AppError::ConfigurationError(format!(
                "CORPUS_ATTRIBUTES entry '{}' is not a name=value pair",
                pair
            ))
        })?;
        attributes.insert(name.trim().to_string(), value.trim().to_string());
    }
    Ok(attributes)
}
