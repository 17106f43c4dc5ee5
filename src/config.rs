use std::fs;
use std::path::Path;

use config as config_rs;
use serde::Deserialize;
use thiserror::Error;

use crate::options::{MaskOptions, VisibleRange};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
    #[error("invalid visible range: {0}")]
    InvalidRange(String),
    #[error("mask character must be exactly one character, got {0:?}")]
    InvalidMaskChar(String),
}

/// Values given on the command line. They beat both the file and the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub mask_char: Option<String>,
    pub show_first: Option<i64>,
    pub show_last: Option<i64>,
    pub ranges: Option<String>,
    pub preserve_format: bool,
}

const ENV_KEYS: [(&str, &str); 5] = [
    ("mask_char", "PHONE_MASK_MASK_CHAR"),
    ("show_first", "PHONE_MASK_SHOW_FIRST"),
    ("show_last", "PHONE_MASK_SHOW_LAST"),
    ("ranges", "PHONE_MASK_RANGES"),
    ("preserve_format", "PHONE_MASK_PRESERVE_FORMAT"),
];

/// Read mask options from an optional JSON or YAML file, then layer
/// environment variables and CLI flags on top.
pub fn load_options(path: Option<&str>, overrides: &CliOverrides) -> Result<MaskOptions, ConfigError> {
    let mut options = match path {
        Some(p) => read_options_file(p)?,
        None => MaskOptions::default(),
    };

    let mut builder = config_rs::Config::builder();

    for (key, var) in ENV_KEYS {
        if let Ok(value) = std::env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    // CLI flags take precedence
    if let Some(ch) = &overrides.mask_char {
        builder = builder.set_override("mask_char", ch.clone())?;
    }
    if let Some(n) = overrides.show_first {
        builder = builder.set_override("show_first", n)?;
    }
    if let Some(n) = overrides.show_last {
        builder = builder.set_override("show_last", n)?;
    }
    if let Some(r) = &overrides.ranges {
        builder = builder.set_override("ranges", r.clone())?;
    }
    if overrides.preserve_format {
        builder = builder.set_override("preserve_format", true)?;
    }

    let cfg = builder.build()?;

    if let Some(s) = lookup::<String>(&cfg, "mask_char")? {
        options.mask_char = Some(parse_mask_char(&s)?);
    }
    if let Some(n) = lookup::<i64>(&cfg, "show_first")? {
        options.show_first = Some(n);
    }
    if let Some(n) = lookup::<i64>(&cfg, "show_last")? {
        options.show_last = Some(n);
    }
    if let Some(s) = lookup::<String>(&cfg, "ranges")? {
        options.visible_ranges = Some(parse_ranges(&s)?);
    }
    if let Some(b) = lookup::<bool>(&cfg, "preserve_format")? {
        options.preserve_format = Some(b);
    }

    Ok(options)
}

fn read_options_file(path: &str) -> Result<MaskOptions, ConfigError> {
    let content = fs::read_to_string(path)?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let options = match ext.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        _ => serde_json::from_str(&content)?,
    };
    Ok(options)
}

fn lookup<'de, T: Deserialize<'de>>(cfg: &config_rs::Config, key: &str) -> Result<Option<T>, ConfigError> {
    match cfg.get::<T>(key) {
        Ok(v) => Ok(Some(v)),
        Err(config_rs::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn parse_mask_char(s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConfigError::InvalidMaskChar(s.to_string())),
    }
}

/// Parse `start-end` pairs separated by commas, e.g. `0-2,8-9`.
///
/// A bare index `5` is shorthand for `5-5`. An empty string yields an empty
/// list.
pub fn parse_ranges(s: &str) -> Result<Vec<VisibleRange>, ConfigError> {
    let mut ranges = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((a, b)) => (parse_index(a, part)?, parse_index(b, part)?),
            None => {
                let i = parse_index(part, part)?;
                (i, i)
            }
        };
        if start > end {
            return Err(ConfigError::InvalidRange(part.to_string()));
        }
        ranges.push(VisibleRange(start, end));
    }
    Ok(ranges)
}

fn parse_index(raw: &str, part: &str) -> Result<i64, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map(i64::from)
        .map_err(|_| ConfigError::InvalidRange(part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_parse() {
        assert_eq!(
            parse_ranges("0-2, 8-9").unwrap(),
            vec![VisibleRange(0, 2), VisibleRange(8, 9)]
        );
        assert_eq!(parse_ranges("5").unwrap(), vec![VisibleRange(5, 5)]);
        assert!(parse_ranges("").unwrap().is_empty());
    }

    #[test]
    fn ranges_reject_garbage() {
        assert!(matches!(parse_ranges("a-b"), Err(ConfigError::InvalidRange(_))));
        assert!(matches!(parse_ranges("4-2"), Err(ConfigError::InvalidRange(_))));
        assert!(matches!(parse_ranges("-1"), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn mask_char_single() {
        assert_eq!(parse_mask_char("#").unwrap(), '#');
        assert_eq!(parse_mask_char("•").unwrap(), '•');
        assert!(matches!(parse_mask_char(""), Err(ConfigError::InvalidMaskChar(_))));
        assert!(matches!(parse_mask_char("ab"), Err(ConfigError::InvalidMaskChar(_))));
    }
}
