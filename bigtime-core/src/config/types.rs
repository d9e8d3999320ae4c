//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::layout::FaceLayout;

/// Default overlay auto-hide delay
pub const DEFAULT_OVERLAY_TIMEOUT_MS: u32 = 3000;

/// Overlay behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayConfig {
    /// Delay before a shown overlay hides itself (ms)
    pub timeout_ms: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_OVERLAY_TIMEOUT_MS,
        }
    }
}

/// Complete watch-face configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    pub layout: FaceLayout,
    pub overlay: OverlayConfig,
}
