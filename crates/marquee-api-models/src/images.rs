//! Image URL templating for upstream poster, backdrop and profile paths.

/// Fixed base for upstream image assets.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Size tokens accepted by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// 92px wide; filmography rows.
    W92,
    /// 185px wide; cast tiles.
    W185,
    /// 400px wide; detail posters.
    W400,
    /// 500px wide; cards and profile photos.
    W500,
    /// Original upload size; hero backdrops.
    Original,
}

impl ImageSize {
    /// Path token for the size.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::W92 => "w92",
            Self::W185 => "w185",
            Self::W400 => "w400",
            Self::W500 => "w500",
            Self::Original => "original",
        }
    }
}

/// Build an image URL for a path fragment. Missing or blank paths yield `None`.
#[must_use]
pub fn image_url(path: Option<&str>, size: ImageSize) -> Option<String> {
    let path = path.map(str::trim).filter(|path| !path.is_empty())?;
    let separator = if path.starts_with('/') { "" } else { "/" };
    Some(format!("{IMAGE_BASE_URL}/{}{separator}{path}", size.token()))
}
