use phone_masker::{mask_phone, strip_formatting, MaskOptions};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 200;

// Strategy for generating formatted phone numbers
fn phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (200..999u32, 200..999u32, 1000..9999u32)
            .prop_map(|(area, exchange, number)| format!("({:03}) {:03}-{:04}", area, exchange, number)),
        (1..99u32, 100_000_000..999_999_999u64)
            .prop_map(|(cc, rest)| format!("+{} {}", cc, rest)),
        "[0-9]{1,15}",
        "[0-9 .()+-]{1,20}",
    ]
}

fn window_strategy() -> impl Strategy<Value = (i64, i64)> {
    (-3i64..8, -3i64..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn preserve_format_keeps_length(phone in phone_strategy(), (first, last) in window_strategy()) {
        let opts = MaskOptions::new().preserve_format(true).show_first(first).show_last(last);
        let trimmed = phone.trim();
        let out = mask_phone(phone.as_str(), Some(&opts));
        prop_assert_eq!(out.chars().count(), trimmed.chars().count());
    }

    #[test]
    fn digit_only_matches_stripped_length(phone in phone_strategy(), (first, last) in window_strategy()) {
        let opts = MaskOptions::new().show_first(first).show_last(last);
        let stripped = strip_formatting(phone.trim());
        let out = mask_phone(phone.as_str(), Some(&opts));
        if stripped.len() as i64 > first + last {
            prop_assert_eq!(out.chars().count(), stripped.chars().count());
        }
    }

    #[test]
    fn bypass_returns_input(phone in phone_strategy(), (first, last) in window_strategy()) {
        let opts = MaskOptions::new().show_first(first).show_last(last);
        let trimmed = phone.trim();
        if strip_formatting(trimmed).len() as i64 <= first + last {
            prop_assert_eq!(mask_phone(phone.as_str(), Some(&opts)), trimmed);
        }
    }

    #[test]
    fn custom_mask_ignores_other_options(
        phone in phone_strategy(),
        (first, last) in window_strategy(),
        preserve in any::<bool>(),
    ) {
        let f = |c: char, i: usize, _: &str| if i % 3 == 0 { c } else { '#' };
        let plain = MaskOptions::new().preserve_format(preserve).custom_mask(f);
        let noisy = MaskOptions::new()
            .preserve_format(preserve)
            .show_first(first)
            .show_last(last)
            .mask_char('x')
            .visible_ranges([(0, 4)])
            .custom_mask(f);
        prop_assert_eq!(
            mask_phone(phone.as_str(), Some(&plain)),
            mask_phone(phone.as_str(), Some(&noisy))
        );
    }

    #[test]
    fn float_and_integer_inputs_agree(n in 0u64..9_007_199_254_740_992u64, (first, last) in window_strategy()) {
        let opts = MaskOptions::new().show_first(first).show_last(last);
        prop_assert_eq!(mask_phone(n as f64, Some(&opts)), mask_phone(n, Some(&opts)));
    }

    #[test]
    fn masked_digits_never_leak_outside_window(digits in "[0-9]{6,15}") {
        let opts = MaskOptions::new().show_first(1).show_last(1);
        let out: Vec<char> = mask_phone(digits.as_str(), Some(&opts)).chars().collect();
        let n = out.len();
        for (i, ch) in out.iter().enumerate() {
            if i != 0 && i != n - 1 {
                prop_assert_eq!(*ch, '*');
            }
        }
    }
}
