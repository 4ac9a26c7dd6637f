//! Subscription tiers with a total order used for feature gating

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Named subscription level
///
/// Declaration order is rank order, so the derived `Ord` is the gating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tier {
    #[default]
    Free,
    /// Legacy paid plan, no longer sold but still honoured
    Starter,
    Pro,
    Team,
    Enterprise,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Free,
        Tier::Starter,
        Tier::Pro,
        Tier::Team,
        Tier::Enterprise,
    ];

    /// Wire name (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Starter => "starter",
            Tier::Pro => "pro",
            Tier::Team => "team",
            Tier::Enterprise => "enterprise",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Starter => "Starter",
            Tier::Pro => "Pro",
            Tier::Team => "Team",
            Tier::Enterprise => "Enterprise",
        }
    }

    /// Parse a tier name, ranking anything unrecognised as `Free`
    pub fn parse_lenient(name: &str) -> Tier {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(tier = name, "Unknown tier name, treating as free");
            Tier::Free
        })
    }

    /// Whether this tier is a paid plan
    pub fn is_paid(&self) -> bool {
        *self > Tier::Free
    }
}

/// True when `tier` ranks at or above `threshold`
pub fn meets_minimum(tier: Tier, threshold: Tier) -> bool {
    tier >= threshold
}

/// Moving from `from` to `to` raises the tier
pub fn is_upgrade(from: Tier, to: Tier) -> bool {
    from < to
}

/// Moving from `from` to `to` lowers the tier
pub fn is_downgrade(from: Tier, to: Tier) -> bool {
    from > to
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tier: {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Tier::Free),
            "starter" => Ok(Tier::Starter),
            "pro" => Ok(Tier::Pro),
            "team" => Ok(Tier::Team),
            "enterprise" => Ok(Tier::Enterprise),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Tier::parse_lenient(&name))
    }
}
