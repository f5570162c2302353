/// Default base URL of the Finmate API
pub const DEFAULT_API_BASE_URL: &str = "https://api.finmate.id/api";

/// Default request timeout in milliseconds
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Default runtime environment name
pub const DEFAULT_APP_ENV: &str = "development";

pub const DEFAULT_SUPPORT_EMAIL: &str = "support@finmate.id";
pub const DEFAULT_PRIVACY_EMAIL: &str = "privacy@finmate.id";
pub const DEFAULT_CDN_URL: &str = "https://cdn.finmate.id";
pub const DEFAULT_IMAGE_CDN_URL: &str = "https://images.finmate.id";

/// Maximum accepted size of an uploaded image (2 MiB)
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Raster image types accepted for upload
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// MIME type used for data URLs when none is known
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

pub const IMAGE_TOO_LARGE_MESSAGE: &str = "Ukuran gambar maksimal 2MB";
pub const IMAGE_TYPE_NOT_ALLOWED_MESSAGE: &str = "Format gambar harus JPG, PNG, atau WEBP";
pub const IMAGE_ENCODING_FAILED_MESSAGE: &str = "Gagal memproses gambar. Silakan coba lagi.";
