// Copyright 2025 the Squares Logo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::RangeInclusive;

use peniko::Color;
use squares_logo::{DEFAULT_BPM_RANGE, DEFAULT_LOGO_SIZE, DEFAULT_SPEED, FitPolicy, MAX_TILT};

/// Settings for the 2D bounce saver.
#[derive(Clone, Debug, PartialEq)]
pub struct SaverConfig {
    /// Side of the logo's bounding square on the host canvas.
    pub logo_size: f64,
    /// Distance the logo travels per frame.
    pub speed: f64,
    /// How the 1024×1024 artwork is mapped into the logo's bounding square.
    pub resizing: FitPolicy,
    /// Fill drawn behind the logo each frame.
    pub background: Color,
    /// Only animate when the host runs the saver as a preview.
    pub preview_only: bool,
}

impl Default for SaverConfig {
    fn default() -> Self {
        Self {
            logo_size: DEFAULT_LOGO_SIZE,
            speed: DEFAULT_SPEED,
            resizing: FitPolicy::AspectFit,
            background: squares_logo::background(),
            preview_only: false,
        }
    }
}

impl SaverConfig {
    /// Checks that sizes and speed are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.logo_size.is_finite() && self.logo_size > 0.0) {
            return Err(ConfigError::LogoSize(self.logo_size));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::Speed(self.speed));
        }
        Ok(())
    }
}

/// Settings for the 3D breathing-grid saver.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Edge length of each cuboid in scene units.
    pub cell_size: f64,
    /// Inclusive tempo range, in beats per minute, the scene draws from.
    pub bpm_range: RangeInclusive<u32>,
    /// Tilt unit in radians.
    pub max_tilt: f64,
    /// Only animate when the host runs the saver as a preview.
    pub preview_only: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            bpm_range: DEFAULT_BPM_RANGE,
            max_tilt: MAX_TILT,
            preview_only: false,
        }
    }
}

impl GridConfig {
    /// Checks the cell size, tempo range, and tilt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        let (lo, hi) = (*self.bpm_range.start(), *self.bpm_range.end());
        if lo == 0 || lo > hi {
            return Err(ConfigError::TempoRange { lo, hi });
        }
        if !self.max_tilt.is_finite() {
            return Err(ConfigError::Tilt(self.max_tilt));
        }
        Ok(())
    }
}

/// A configuration value that cannot drive an animation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Logo size is not a positive finite number.
    LogoSize(f64),
    /// Speed is not a positive finite number.
    Speed(f64),
    /// Cell size is not a positive finite number.
    CellSize(f64),
    /// Tempo range is empty or includes zero.
    TempoRange {
        /// Lower bound as configured.
        lo: u32,
        /// Upper bound as configured.
        hi: u32,
    },
    /// Tilt is not finite.
    Tilt(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LogoSize(v) => write!(f, "logo size must be positive and finite, got {v}"),
            Self::Speed(v) => write!(f, "speed must be positive and finite, got {v}"),
            Self::CellSize(v) => write!(f, "cell size must be positive and finite, got {v}"),
            Self::TempoRange { lo, hi } => {
                write!(f, "tempo range {lo}..={hi} bpm must be non-empty and above zero")
            }
            Self::Tilt(v) => write!(f, "tilt must be finite, got {v}"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use core::ops::RangeInclusive;

    use super::{ConfigError, GridConfig, SaverConfig};

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SaverConfig::default().validate(), Ok(()));
        assert_eq!(GridConfig::default().validate(), Ok(()));
    }

    #[test]
    fn saver_rejects_bad_sizes_and_speeds() {
        let config = SaverConfig {
            logo_size: 0.0,
            ..SaverConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::LogoSize(0.0)));

        let config = SaverConfig {
            speed: f64::INFINITY,
            ..SaverConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Speed(f64::INFINITY)));
    }

    #[test]
    fn grid_rejects_empty_or_zero_tempo_ranges() {
        let reversed = GridConfig {
            bpm_range: RangeInclusive::new(100, 60),
            ..GridConfig::default()
        };
        assert_eq!(
            reversed.validate(),
            Err(ConfigError::TempoRange { lo: 100, hi: 60 })
        );

        let zero = GridConfig {
            bpm_range: 0..=60,
            ..GridConfig::default()
        };
        assert!(zero.validate().is_err());

        let fixed = GridConfig {
            bpm_range: 90..=90,
            ..GridConfig::default()
        };
        assert_eq!(fixed.validate(), Ok(()));
    }

    #[test]
    fn errors_render_the_offending_value() {
        let message = ConfigError::TempoRange { lo: 100, hi: 60 }.to_string();
        assert!(message.contains("100..=60"), "{message}");
        let message = ConfigError::CellSize(-2.0).to_string();
        assert!(message.contains("-2"), "{message}");
    }
}
