//! Packing policies.
//!
//! A packing type decides how much padding goes around the item on every
//! side before the box search starts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Returned when a packing type key is not one of the known ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown packing type '{0}'")]
pub struct UnknownPackingType(pub String);

/// Available packing types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PackingType {
    Basic,
    Standard,
    Fragile,
    Custom,
}

/// Buffer and label for one packing type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PackingPolicy {
    /// Padding per side in inches.
    pub buffer: f64,
    pub description: &'static str,
}

impl PackingType {
    pub const ALL: [PackingType; 4] = [
        PackingType::Basic,
        PackingType::Standard,
        PackingType::Fragile,
        PackingType::Custom,
    ];

    pub const fn policy(self) -> PackingPolicy {
        match self {
            PackingType::Basic => PackingPolicy {
                buffer: 0.5,
                description: "+0.5 inch per side - Minimal protection",
            },
            PackingType::Standard => PackingPolicy {
                buffer: 1.0,
                description: "+1 inch per side - Standard protection",
            },
            PackingType::Fragile => PackingPolicy {
                buffer: 2.0,
                description: "+2 inches per side - Extra protection",
            },
            PackingType::Custom => PackingPolicy {
                buffer: 1.0,
                description: "User-defined buffer - Custom protection",
            },
        }
    }

    /// Effective per-side buffer. The override only applies to `Custom`.
    pub fn buffer(self, custom_buffer: Option<f64>) -> f64 {
        match (self, custom_buffer) {
            (PackingType::Custom, Some(buffer)) => buffer,
            _ => self.policy().buffer,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            PackingType::Basic => "basic",
            PackingType::Standard => "standard",
            PackingType::Fragile => "fragile",
            PackingType::Custom => "custom",
        }
    }

    /// Parses a key and falls back to `Custom` for anything unknown.
    pub fn from_key_lenient(key: &str) -> Self {
        match key.parse() {
            Ok(packing_type) => packing_type,
            Err(err) => {
                tracing::warn!(%err, "falling back to custom packing policy");
                PackingType::Custom
            }
        }
    }
}

impl FromStr for PackingType {
    type Err = UnknownPackingType;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(PackingType::Basic),
            "standard" => Ok(PackingType::Standard),
            "fragile" => Ok(PackingType::Fragile),
            "custom" => Ok(PackingType::Custom),
            _ => Err(UnknownPackingType(raw.to_string())),
        }
    }
}

impl fmt::Display for PackingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_grow_with_protection_level() {
        let basic = PackingType::Basic.policy().buffer;
        let standard = PackingType::Standard.policy().buffer;
        let fragile = PackingType::Fragile.policy().buffer;
        assert!(basic < standard);
        assert!(standard < fragile);
        for packing_type in PackingType::ALL {
            assert!(packing_type.policy().buffer >= 0.0);
        }
    }

    #[test]
    fn custom_override_only_applies_to_custom() {
        assert_eq!(PackingType::Custom.buffer(Some(0.0)), 0.0);
        assert_eq!(PackingType::Custom.buffer(Some(3.5)), 3.5);
        assert_eq!(PackingType::Custom.buffer(None), 1.0);
        assert_eq!(PackingType::Fragile.buffer(Some(0.0)), 2.0);
    }

    #[test]
    fn parse_keys_case_insensitively() {
        assert_eq!("standard".parse::<PackingType>(), Ok(PackingType::Standard));
        assert_eq!(" FRAGILE ".parse::<PackingType>(), Ok(PackingType::Fragile));
        assert_eq!(
            "bubble".parse::<PackingType>(),
            Err(UnknownPackingType("bubble".to_string()))
        );
    }

    #[test]
    fn lenient_parse_falls_back_to_custom() {
        assert_eq!(PackingType::from_key_lenient("basic"), PackingType::Basic);
        assert_eq!(PackingType::from_key_lenient("overnight"), PackingType::Custom);
        assert_eq!(PackingType::from_key_lenient(""), PackingType::Custom);
    }

    #[test]
    fn key_round_trips_through_display() {
        for packing_type in PackingType::ALL {
            assert_eq!(packing_type.to_string().parse(), Ok(packing_type));
        }
    }
}
