//! Arrow geometry for drawing segments.
//!
//! An arrow's length includes its head: the tip sits exactly on the target tick and the
//! shaft stops where the head begins. The head is a four-point polygon
//! `[tip, left barb, notch, right barb]`; `overhang` sweeps the notch back toward the tip.

use crate::error::{Result, RingError, require_positive_finite};
use crate::geometry::Point;
use serde::Serialize;

pub const DEFAULT_HEAD_WIDTH: f64 = 0.02;
pub const HEAD_LENGTH_RATIO: f64 = 1.5;
pub const SWEPT_OVERHANG: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArrowStyle {
    head_width: f64,
    head_length: f64,
    overhang: f64,
}

impl ArrowStyle {
    /// `head_length` defaults to `1.5 * head_width`.
    pub fn new(head_width: f64, head_length: Option<f64>, overhang: f64) -> Result<Self> {
        let head_width = require_positive_finite("head_width", head_width)?;
        let head_length = match head_length {
            Some(length) => require_positive_finite("head_length", length)?,
            None => head_width * HEAD_LENGTH_RATIO,
        };
        if !(0.0..1.0).contains(&overhang) {
            return Err(RingError::invalid(
                "overhang",
                overhang,
                "must be in [0, 1)",
            ));
        }
        Ok(Self {
            head_width,
            head_length,
            overhang,
        })
    }

    /// Plain triangular head.
    pub fn additive() -> Self {
        Self {
            head_width: DEFAULT_HEAD_WIDTH,
            head_length: DEFAULT_HEAD_WIDTH * HEAD_LENGTH_RATIO,
            overhang: 0.0,
        }
    }

    /// Swept-back head, lighter when hundreds of arrows overlap.
    pub fn multiplicative() -> Self {
        Self {
            overhang: SWEPT_OVERHANG,
            ..Self::additive()
        }
    }

    pub fn with_head_width(self, head_width: f64) -> Result<Self> {
        Self::new(head_width, None, self.overhang)
    }

    pub fn head_width(&self) -> f64 {
        self.head_width
    }

    pub fn head_length(&self) -> f64 {
        self.head_length
    }

    pub fn overhang(&self) -> f64 {
        self.overhang
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self::additive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arrow {
    pub tail: Point,
    pub tip: Point,
    pub shaft_end: Point,
    pub head: Option<[Point; 4]>,
}

impl Arrow {
    pub fn between(tail: Point, tip: Point, style: &ArrowStyle) -> Self {
        let length = tail.distance(tip);
        // self loops have no direction to point in
        if length <= f64::EPSILON {
            return Self {
                tail,
                tip,
                shaft_end: tail,
                head: None,
            };
        }

        let dir = (tip - tail) / length;
        let half_width = dir.normal() * (style.head_width / 2.0);
        let head_length = style.head_length.min(length);
        let barb_base = tip - dir * head_length;
        let notch = tip - dir * (head_length * (1.0 - style.overhang));

        Self {
            tail,
            tip,
            shaft_end: notch,
            head: Some([tip, barb_base + half_width, notch, barb_base - half_width]),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.head.is_none()
    }
}
