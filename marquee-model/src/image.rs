use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Public TMDB image CDN root.
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Backdrop widths served by the TMDB image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BackdropSize {
    W300,
    W780,
    #[default]
    W1280,
    Original,
}

impl BackdropSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }

    /// Pixel width, `None` for the original upload.
    pub fn width(&self) -> Option<u32> {
        match self {
            BackdropSize::W300 => Some(300),
            BackdropSize::W780 => Some(780),
            BackdropSize::W1280 => Some(1280),
            BackdropSize::Original => None,
        }
    }

    /// Build a backdrop URL from a provider-relative image path.
    ///
    /// `path` is expected to carry its leading slash (`/abc.jpg`), which is
    /// how TMDB returns it; a missing slash is tolerated.
    pub fn url_for(&self, image_base: &str, path: &str) -> String {
        let base = image_base.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}/{}{}", base, self.as_str(), path)
        } else {
            format!("{}/{}/{}", base, self.as_str(), path)
        }
    }
}

impl Display for BackdropSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackdropSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w300" => Ok(BackdropSize::W300),
            "w780" => Ok(BackdropSize::W780),
            "w1280" => Ok(BackdropSize::W1280),
            "original" => Ok(BackdropSize::Original),
            other => Err(ModelError::UnknownBackdropSize(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_cdn_urls() {
        assert_eq!(
            BackdropSize::W1280.url_for(DEFAULT_IMAGE_BASE, "/abc.jpg"),
            "https://image.tmdb.org/t/p/w1280/abc.jpg"
        );
        assert_eq!(
            BackdropSize::Original.url_for("http://cdn.local/t/p/", "abc.jpg"),
            "http://cdn.local/t/p/original/abc.jpg"
        );
    }

    #[test]
    fn parses_size_names() {
        assert_eq!("W780".parse::<BackdropSize>(), Ok(BackdropSize::W780));
        assert!("w92".parse::<BackdropSize>().is_err());
    }
}
