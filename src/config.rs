use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Default name of the collation registered on a connection
pub const DEFAULT_COLLATION_NAME: &str = "U64TEXT";

/// Which storage convention a connection is set up for
///
/// The canonical scheme is the authoritative one. The raw scheme exists for
/// databases that already store reinterpreted signed integers; it offers no
/// validation at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// `U64TEXT` collation plus `u64_to_text`, `text_to_u64`, `is_u64text`
    /// and `u64text_display`
    #[default]
    Canonical,
    /// `u64` and `u64_cmp` only
    Raw,
    /// Both sets, under their distinct names
    Both,
}

impl Scheme {
    #[must_use]
    pub const fn includes_canonical(self) -> bool {
        matches!(self, Self::Canonical | Self::Both)
    }

    #[must_use]
    pub const fn includes_raw(self) -> bool {
        matches!(self, Self::Raw | Self::Both)
    }
}

impl FromStr for Scheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("canonical") {
            Ok(Self::Canonical)
        } else if s.eq_ignore_ascii_case("raw") {
            Ok(Self::Raw)
        } else if s.eq_ignore_ascii_case("both") {
            Ok(Self::Both)
        } else {
            Err(ConfigError::UnknownScheme(s.to_string()))
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Canonical => "canonical",
            Self::Raw => "raw",
            Self::Both => "both",
        })
    }
}

/// Registration settings for [`register`](crate::sql::register)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConfig {
    scheme: Scheme,
    collation_name: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            collation_name: DEFAULT_COLLATION_NAME.to_string(),
        }
    }
}

impl ExtensionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Register the collation under another name, e.g. to avoid a clash with
    /// a collation the host already defines
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCollationName`] for an empty or blank name.
    pub fn with_collation_name(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyCollationName);
        }
        self.collation_name = name;
        Ok(self)
    }

    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    #[must_use]
    pub fn collation_name(&self) -> &str {
        &self.collation_name
    }
}
