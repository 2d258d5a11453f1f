use serde::{Deserialize, Serialize};

/// Pricing model of a fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeeKind {
    /// Constant fee regardless of the transferred amount.
    Fixed,
    /// Fee proportional to the transferred amount.
    Factor,
}

impl FeeKind {
    /// Wire tag as sent by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            FeeKind::Fixed => "FIXED",
            FeeKind::Factor => "FACTOR",
        }
    }

    /// Resolve a wire tag. Tags are matched exactly.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "FIXED" => Some(FeeKind::Fixed),
            "FACTOR" => Some(FeeKind::Factor),
            _ => None,
        }
    }
}

impl std::fmt::Display for FeeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
