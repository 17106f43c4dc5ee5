//! Mask options and their resolution into a fully populated form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Defaults exposed for callers building their own option sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultOptions {
    pub mask_char: char,
    pub show_last: i64,
}

pub const DEFAULT_OPTIONS: DefaultOptions = DefaultOptions {
    mask_char: '*',
    show_last: 4,
};

/// Inclusive `[start, end]` interval in digit-position space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange(pub i64, pub i64);

impl VisibleRange {
    pub fn contains(&self, index: i64) -> bool {
        index >= self.0 && index <= self.1
    }
}

impl From<(i64, i64)> for VisibleRange {
    fn from((start, end): (i64, i64)) -> Self {
        VisibleRange(start, end)
    }
}

type MaskFn = dyn Fn(char, usize, &str) -> char + Send + Sync;

/// Per-character transform that overrides every other masking rule.
///
/// Called with the character, its index and the full string being walked.
#[derive(Clone)]
pub struct CustomMask(Arc<MaskFn>);

impl CustomMask {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(char, usize, &str) -> char + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, ch: char, index: usize, full: &str) -> char {
        (self.0)(ch, index, full)
    }
}

impl fmt::Debug for CustomMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomMask(<fn>)")
    }
}

/// Caller-facing options. Every field is optional.
///
/// `show_start` and `show_end` are aliases for `show_first` and `show_last`;
/// the primary name wins when both are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaskOptions {
    pub mask_char: Option<char>,
    pub show_first: Option<i64>,
    pub show_start: Option<i64>,
    pub show_last: Option<i64>,
    pub show_end: Option<i64>,
    pub visible_ranges: Option<Vec<VisibleRange>>,
    pub preserve_format: Option<bool>,
    #[serde(skip)]
    pub custom_mask: Option<CustomMask>,
}

impl MaskOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mask_char(mut self, ch: char) -> Self {
        self.mask_char = Some(ch);
        self
    }

    pub fn show_first(mut self, n: i64) -> Self {
        self.show_first = Some(n);
        self
    }

    pub fn show_start(mut self, n: i64) -> Self {
        self.show_start = Some(n);
        self
    }

    pub fn show_last(mut self, n: i64) -> Self {
        self.show_last = Some(n);
        self
    }

    pub fn show_end(mut self, n: i64) -> Self {
        self.show_end = Some(n);
        self
    }

    pub fn visible_ranges<I, R>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<VisibleRange>,
    {
        self.visible_ranges = Some(ranges.into_iter().map(Into::into).collect());
        self
    }

    pub fn preserve_format(mut self, on: bool) -> Self {
        self.preserve_format = Some(on);
        self
    }

    pub fn custom_mask<F>(mut self, f: F) -> Self
    where
        F: Fn(char, usize, &str) -> char + Send + Sync + 'static,
    {
        self.custom_mask = Some(CustomMask::new(f));
        self
    }
}

/// Options after alias resolution and defaulting.
#[derive(Debug, Clone)]
pub struct NormalizedOptions {
    pub mask_char: char,
    pub show_first: i64,
    pub show_last: i64,
    pub visible_ranges: Option<Vec<VisibleRange>>,
    pub preserve_format: bool,
    pub custom_mask: Option<CustomMask>,
}

impl Default for NormalizedOptions {
    fn default() -> Self {
        resolve(None)
    }
}

pub fn resolve(options: Option<&MaskOptions>) -> NormalizedOptions {
    let Some(opts) = options else {
        return NormalizedOptions {
            mask_char: DEFAULT_OPTIONS.mask_char,
            show_first: 0,
            show_last: DEFAULT_OPTIONS.show_last,
            visible_ranges: None,
            preserve_format: false,
            custom_mask: None,
        };
    };

    NormalizedOptions {
        mask_char: opts.mask_char.unwrap_or(DEFAULT_OPTIONS.mask_char),
        show_first: opts.show_first.or(opts.show_start).unwrap_or(0),
        show_last: opts
            .show_last
            .or(opts.show_end)
            .unwrap_or(DEFAULT_OPTIONS.show_last),
        visible_ranges: opts.visible_ranges.clone(),
        preserve_format: opts.preserve_format.unwrap_or(false),
        custom_mask: opts.custom_mask.clone(),
    }
}
