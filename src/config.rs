//! Timing configuration for the frame driver.
//!
//! The CPU is instruction-timed, not cycle-timed: a scanline is a fixed number
//! of `step` calls rather than 76 CPU cycles. The defaults reproduce NTSC
//! frame geometry under that model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scanline and frame timing.
///
/// # Examples
///
/// ```
/// use lib2600::TimingConfig;
///
/// let config = TimingConfig::default();
/// assert_eq!(config, TimingConfig::ntsc());
/// assert_eq!(config.steps_per_frame(), 262 * 76);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// CPU steps executed per scanline.
    pub steps_per_scanline: u32,

    /// Scanlines per frame, including vertical blank and overscan.
    pub scanlines_per_frame: u32,

    /// Scanline that draws frame buffer row 0.
    pub first_visible_scanline: u32,
}

impl TimingConfig {
    /// NTSC timing: 76 steps per scanline, 262 scanlines, picture from
    /// scanline 40.
    pub const fn ntsc() -> Self {
        Self {
            steps_per_scanline: 76,
            scanlines_per_frame: 262,
            first_visible_scanline: 40,
        }
    }

    /// Total `step` calls in one frame.
    pub const fn steps_per_frame(&self) -> u64 {
        self.steps_per_scanline as u64 * self.scanlines_per_frame as u64
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::ntsc()
    }
}
