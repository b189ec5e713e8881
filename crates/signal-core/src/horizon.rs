use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SignalError;

/// Threshold relaxation step per iteration (2 percentage points)
pub const RELAX_STEP: f64 = 0.02;

/// Signals exported per side, at most
pub const TARGET_PER_SIDE: usize = 4;

/// Relaxation stops once the ROI bar reaches -50%
pub const ROI_FLOOR: f64 = -0.5;

/// Forecast window a signal is projected over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizonKey {
    #[serde(rename = "24h")]
    H24h,
    #[serde(rename = "7d")]
    D7,
    #[serde(rename = "30d")]
    D30,
    #[serde(rename = "1y")]
    Y1,
}

impl HorizonKey {
    pub const ALL: [HorizonKey; 4] = [
        HorizonKey::H24h,
        HorizonKey::D7,
        HorizonKey::D30,
        HorizonKey::Y1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HorizonKey::H24h => "24h",
            HorizonKey::D7 => "7d",
            HorizonKey::D30 => "30d",
            HorizonKey::Y1 => "1y",
        }
    }

    /// Display label the model is instructed to echo in `RawSignal::horizon`
    pub fn label(&self) -> &'static str {
        match self {
            HorizonKey::H24h => "24 Horas",
            HorizonKey::D7 => "7 Dias",
            HorizonKey::D30 => "30 Dias",
            HorizonKey::Y1 => "1 Ano",
        }
    }

    /// Minimum return-on-investment required before relaxation kicks in
    pub fn min_roi(&self) -> f64 {
        match self {
            HorizonKey::H24h => 0.08,
            HorizonKey::D7 => 0.30,
            HorizonKey::D30 => 0.50,
            HorizonKey::Y1 => 1.00,
        }
    }
}

impl fmt::Display for HorizonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizonKey {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(HorizonKey::H24h),
            "7d" => Ok(HorizonKey::D7),
            "30d" => Ok(HorizonKey::D30),
            "1y" => Ok(HorizonKey::Y1),
            other => Err(SignalError::UnknownHorizon(other.to_string())),
        }
    }
}
