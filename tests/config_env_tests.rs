use phone_masker::config::{load_options, CliOverrides};

// Kept in its own test binary: it mutates process environment.
#[test]
fn environment_then_cli_precedence() {
    std::env::set_var("PHONE_MASK_SHOW_FIRST", "3");
    std::env::set_var("PHONE_MASK_SHOW_LAST", "2");
    std::env::set_var("PHONE_MASK_PRESERVE_FORMAT", "true");

    let overrides = CliOverrides {
        show_last: Some(5),
        ..Default::default()
    };
    let opts = load_options(None, &overrides).unwrap();

    std::env::remove_var("PHONE_MASK_SHOW_FIRST");
    std::env::remove_var("PHONE_MASK_SHOW_LAST");
    std::env::remove_var("PHONE_MASK_PRESERVE_FORMAT");

    assert_eq!(opts.show_first, Some(3));
    assert_eq!(opts.show_last, Some(5));
    assert_eq!(opts.preserve_format, Some(true));
}
