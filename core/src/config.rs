//! Construction-time configuration for catalog clients.

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_IMAGE_BASE: &str = "https://starwars-visualguide.com/assets/img";

/// The two values a catalog client is built from. Trailing slashes are
/// stripped so paths can always be appended with a leading `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    base_url: String,
    image_base: String,
}

impl CatalogConfig {
    pub fn new(base_url: &str, image_base: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            image_base: image_base.trim_end_matches('/').to_string(),
        }
    }

    /// Point at another catalog host, keeping the current image base.
    pub fn with_base_url(self, base_url: &str) -> Self {
        Self::new(base_url, &self.image_base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn image_base(&self) -> &str {
        &self.image_base
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE)
    }
}
