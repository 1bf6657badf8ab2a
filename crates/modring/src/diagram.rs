use crate::arrow::{Arrow, ArrowStyle};
use crate::error::Result;
use crate::geometry::{TickRing, layout};
use crate::walk::{WalkResult, additive_walk, multiplicative_map};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[display("additive")]
    Additive,
    #[display("multiplicative")]
    Multiplicative,
}

impl Mode {
    pub fn arrow_style(&self) -> ArrowStyle {
        match self {
            Self::Additive => ArrowStyle::additive(),
            Self::Multiplicative => ArrowStyle::multiplicative(),
        }
    }
}

/// A ring with one tick per residue and the segments drawn over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub mode: Mode,
    pub base: i64,
    /// The additive step or the multiplier, as given.
    pub operand: i64,
    pub ring: TickRing,
    pub walk: WalkResult,
}

impl Diagram {
    pub fn additive(base: i64, step: i64, radius: f64) -> Result<Self> {
        let walk = additive_walk(base, step)?;
        let ring = layout(base, radius)?;
        Ok(Self {
            mode: Mode::Additive,
            base,
            operand: step,
            ring,
            walk,
        })
    }

    pub fn multiplicative(base: i64, multiplier: i64, radius: f64) -> Result<Self> {
        let walk = multiplicative_map(base, multiplier)?;
        let ring = layout(base, radius)?;
        Ok(Self {
            mode: Mode::Multiplicative,
            base,
            operand: multiplier,
            ring,
            walk,
        })
    }

    pub fn arrows(&self, style: &ArrowStyle) -> Vec<Arrow> {
        self.walk
            .iter()
            .filter_map(|segment| segment.endpoints(&self.ring))
            .map(|(tail, tip)| Arrow::between(tail, tip, style))
            .collect()
    }
}
