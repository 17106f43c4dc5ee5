//! Phone number masking for display

pub mod config;
pub mod errors;
pub mod input;
pub mod logger;
pub mod masker;
pub mod metrics;
pub mod options;
pub mod stream;
pub mod visibility;

pub use input::{is_valid_phone_input, normalize, PhoneInput};
pub use masker::{mask_phone, mask_with_format, mask_without_format, strip_formatting};
pub use options::{resolve, CustomMask, MaskOptions, NormalizedOptions, VisibleRange, DEFAULT_OPTIONS};
pub use visibility::is_visible;
