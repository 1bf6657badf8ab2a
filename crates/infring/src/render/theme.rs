use crate::config::ThemeConfig;
use derive_more::{Deref, From, Into};
use palette::rgb::FromHexError;
use palette::{Srgb, Srgba, WithAlpha};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// An sRGB color written as `#rrggbb` in config files.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr, Deref, From, Into)]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn to_srgba(self) -> Srgba<f64> {
        self.0.into_format::<f64>().with_alpha(1.0)
    }
}

impl FromStr for HexColor {
    type Err = FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            self.0.red, self.0.green, self.0.blue
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Srgba<f64>,
    pub circle: Srgba<f64>,
    pub tick: Srgba<f64>,
    pub arrow: Srgba<f64>,
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            background: config.background.to_srgba(),
            circle: config.circle.to_srgba(),
            tick: config.tick.to_srgba(),
            arrow: config.arrow.to_srgba(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from(&ThemeConfig::default())
    }
}
