//! Phone masking strategies

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::input::{normalize, PhoneInput};
use crate::options::{resolve, MaskOptions, NormalizedOptions};
use crate::visibility::is_visible;

static NON_DIAL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9+]").unwrap());

/// Keep only ASCII digits and `+`, in their original order.
pub fn strip_formatting(phone: &str) -> String {
    NON_DIAL_CHARS.replace_all(phone, "").into_owned()
}

/// Mask digits in place, leaving separators where they were.
pub fn mask_with_format(phone: &str, options: &NormalizedOptions) -> String {
    if let Some(custom) = &options.custom_mask {
        return phone
            .chars()
            .enumerate()
            .map(|(i, ch)| custom.apply(ch, i, phone))
            .collect();
    }

    let total_digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let mut digit_index = 0;
    let mut out = String::with_capacity(phone.len());

    for ch in phone.chars() {
        if ch.is_ascii_digit() {
            if is_visible(digit_index, total_digits, options) {
                out.push(ch);
            } else {
                out.push(options.mask_char);
            }
            digit_index += 1;
        } else {
            // separators (whitespace, - ( ) . +) and anything else non-digit
            out.push(ch);
        }
    }
    out
}

/// Strip separators, then mask.
///
/// Indices and the total length both count `+` characters, so a leading `+`
/// shifts every digit position by one.
pub fn mask_without_format(phone: &str, options: &NormalizedOptions) -> String {
    let stripped = strip_formatting(phone);

    if let Some(custom) = &options.custom_mask {
        return stripped
            .chars()
            .enumerate()
            .map(|(i, ch)| custom.apply(ch, i, &stripped))
            .collect();
    }

    let length = stripped.chars().count();
    stripped
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if ch == '+' || is_visible(i, length, options) {
                ch
            } else {
                options.mask_char
            }
        })
        .collect()
}

/// Mask a phone value for display.
///
/// Returns `""` for missing or blank input. When the caller supplied neither
/// visible ranges nor a custom mask and the visible windows already cover
/// every digit, the normalized input is returned unchanged.
pub fn mask_phone(input: impl Into<PhoneInput>, options: Option<&MaskOptions>) -> String {
    let phone = normalize(&input.into());
    if phone.is_empty() {
        return phone;
    }

    let resolved = resolve(options);
    mask_normalized(&phone, &resolved)
}

/// Mask an already-normalized phone string with resolved options.
pub fn mask_normalized(phone: &str, options: &NormalizedOptions) -> String {
    if is_bypassed(phone, options) {
        trace!(len = phone.len(), "visible window covers the number, returning as-is");
        return phone.to_string();
    }

    if options.preserve_format {
        trace!("masking with format preserved");
        mask_with_format(phone, options)
    } else {
        trace!("masking digits only");
        mask_without_format(phone, options)
    }
}

/// True when masking would reveal everything anyway.
pub fn is_bypassed(phone: &str, options: &NormalizedOptions) -> bool {
    if options.custom_mask.is_some() || options.visible_ranges.is_some() {
        return false;
    }
    let stripped_len = strip_formatting(phone).chars().count() as i64;
    stripped_len <= options.show_first.saturating_add(options.show_last)
}
