//! Formatting and validation helpers.

mod currency;
mod image;

pub use currency::{format_currency_digits, format_rupiah, parse_currency_digits};
pub use image::{
    encode_image_as_data_url, validate_image_asset, ImageAsset, ImageRejection, ImageValidation,
};
