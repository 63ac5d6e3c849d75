use serde::{Deserialize, Serialize};

/// Either the fixed tile grid or the camera-relative scrolling overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Grid,
    Overview,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::Overview,
            Self::Overview => Self::Grid,
        }
    }

    /// Convert string identifier to layout mode for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grid" => Some(Self::Grid),
            "overview" => Some(Self::Overview),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Overview => "overview",
        }
    }
}
