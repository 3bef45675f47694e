use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The `cache_targets` option.
///
/// On disk it is either the string `"auto"` or a boolean; `"true"` and
/// `"false"` strings are accepted too, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheTargets {
    /// Re-parse only when the file's modification time moves past the
    /// time recorded at the last parse
    #[default]
    Auto,
    /// Parse once and keep the result regardless of edits (`true`)
    Always,
    /// Never trust the cache (`false`)
    Never,
}

impl CacheTargets {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheTargets::Auto => "auto",
            CacheTargets::Always => "true",
            CacheTargets::Never => "false",
        }
    }
}

impl fmt::Display for CacheTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheTargets {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(CacheTargets::Auto),
            "true" => Ok(CacheTargets::Always),
            "false" => Ok(CacheTargets::Never),
            _ => Err(Error::ConfigError(format!(
                "invalid cache_targets value '{s}', expected one of: auto, true, false"
            ))),
        }
    }
}

impl Serialize for CacheTargets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CacheTargets::Auto => serializer.serialize_str("auto"),
            CacheTargets::Always => serializer.serialize_bool(true),
            CacheTargets::Never => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for CacheTargets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(CacheTargets::Always),
            Raw::Flag(false) => Ok(CacheTargets::Never),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
