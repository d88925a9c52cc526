use serde::Serialize;

/// Visual tier of a node, picked from its referral fan-out. Rendering maps
/// each tier to an asterisk glyph; the ordering here is what matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Base,
    Elevated,
    High,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Elevated => "elevated",
            Self::High => "high",
        }
    }
}

/// Threshold bands, evaluated highest first with `>=` so a count sitting
/// exactly on a boundary lands in the higher tier. Presentation decides the
/// numbers; the defaults are what the site ships with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierThresholds {
    pub elevated: u32,
    pub high: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { elevated: 2, high: 5 }
    }
}

impl TierThresholds {
    pub fn classify(&self, fanout: u32) -> Tier {
        if fanout >= self.high {
            Tier::High
        } else if fanout >= self.elevated {
            Tier::Elevated
        } else {
            Tier::Base
        }
    }
}
