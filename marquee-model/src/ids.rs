use std::str::FromStr;

use crate::error::ModelError;

/// Provider-assigned identifier of a media item (the TMDB numeric id).
///
/// Used both as the render key of a slide and as the navigation target of
/// its detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MediaId(pub u64);

impl MediaId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for MediaId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for MediaId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ModelError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numeric_ids() {
        assert_eq!(" 603 ".parse::<MediaId>(), Ok(MediaId(603)));
        assert_eq!(MediaId(603).to_string(), "603");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_eq!(
            "tt0133093".parse::<MediaId>(),
            Err(ModelError::InvalidId("tt0133093".to_string()))
        );
    }
}
