use crate::error::{Result, require_positive};
use crate::geometry::{Point, TickRing};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::Serialize;
use std::iter::FusedIterator;

/// One directed arrow between two residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display("{from}→{to}")]
pub struct Segment {
    pub from: usize,
    pub to: usize,
}

impl Segment {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    pub fn endpoints(&self, ring: &TickRing) -> Option<(Point, Point)> {
        Some((*ring.get(self.from)?, *ring.get(self.to)?))
    }
}

/// Segments in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deref, From, Into, AsRef)]
#[serde(transparent)]
pub struct WalkResult(Vec<Segment>);

impl FromIterator<Segment> for WalkResult {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for WalkResult {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WalkResult {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of segments in the additive walk: the order of `step` in Z/baseZ.
pub fn orbit_len(base: i64, step: i64) -> Result<usize> {
    let b = require_positive("base", base)?;
    let s = require_positive("step", step)?;
    Ok(b / gcd(b as u64, s as u64) as usize)
}

/// The closed walk `x ← (x + step) mod base` from 0, yielded lazily.
///
/// The walk stops after emitting the segment that lands back on 0, so a step that
/// is a multiple of `base` yields the single self loop `0→0`.
#[derive(Debug, Clone)]
pub struct AdditiveWalk {
    base: usize,
    step: u64,
    current: usize,
    remaining: usize,
}

impl AdditiveWalk {
    pub fn new(base: i64, step: i64) -> Result<Self> {
        let remaining = orbit_len(base, step)?;
        Ok(Self {
            base: base as usize,
            step: step as u64,
            current: 0,
            remaining,
        })
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn step(&self) -> u64 {
        self.step
    }
}

impl Iterator for AdditiveWalk {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.remaining == 0 {
            return None;
        }
        // widened so that `current + step` cannot overflow
        let next = ((self.current as u128 + self.step as u128) % self.base as u128) as usize;
        let segment = Segment::new(self.current, next);
        self.current = next;
        self.remaining = if next == 0 { 0 } else { self.remaining - 1 };
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AdditiveWalk {}

impl FusedIterator for AdditiveWalk {}

pub fn additive_walk(base: i64, step: i64) -> Result<WalkResult> {
    let walk: WalkResult = AdditiveWalk::new(base, step)?.collect();
    log::debug!(
        "additive walk base={} step={}: {} segments",
        base,
        step,
        walk.len()
    );
    Ok(walk)
}

/// Maps every residue `x` in `[0, base)` to `(x * multiplier) mod base`, ascending by `x`.
pub fn multiplicative_map(base: i64, multiplier: i64) -> Result<WalkResult> {
    let b = require_positive("base", base)?;
    let m = require_positive("multiplier", multiplier)?;

    let map: WalkResult = (0..b)
        .map(|x| Segment::new(x, ((x as u128 * m as u128) % b as u128) as usize))
        .collect();
    log::debug!(
        "multiplicative map base={} multiplier={}: {} segments",
        base,
        multiplier,
        map.len()
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RingError;
    use crate::geometry::layout;

    fn pairs(walk: &WalkResult) -> Vec<(usize, usize)> {
        walk.iter().map(|s| (s.from, s.to)).collect()
    }

    #[test]
    fn test_additive_walk_visits_in_order() {
        let walk = additive_walk(5, 2).unwrap();
        assert_eq!(pairs(&walk), vec![(0, 2), (2, 4), (4, 1), (1, 3), (3, 0)]);
    }

    #[test]
    fn test_additive_walk_length() {
        for base in 1..=50 {
            for step in 1..=30 {
                let walk = additive_walk(base, step).unwrap();
                let expected = base as u64 / gcd(base as u64, step as u64);
                assert_eq!(walk.len() as u64, expected, "base {base}, step {step}");
                assert_eq!(walk.last().map(|s| s.to), Some(0));
                // 0 is only reached by the closing segment
                assert!(walk[..walk.len() - 1].iter().all(|s| s.to != 0));
            }
        }
    }

    #[test]
    fn test_additive_walk_degenerate_self_loop() {
        let cases = vec![(5, 5), (5, 10), (1, 1), (1, 7)];

        for (base, step) in cases {
            let walk = additive_walk(base, step).unwrap();
            assert_eq!(pairs(&walk), vec![(0, 0)], "base {base}, step {step}");
            assert!(walk[0].is_loop());
        }
    }

    #[test]
    fn test_additive_walk_raw_step_larger_than_base() {
        let walk = additive_walk(5, 7).unwrap();
        assert_eq!(pairs(&walk), vec![(0, 2), (2, 4), (4, 1), (1, 3), (3, 0)]);
    }

    #[test]
    fn test_additive_walk_chains() {
        let walk = additive_walk(12, 8).unwrap();
        assert_eq!(pairs(&walk), vec![(0, 8), (8, 4), (4, 0)]);
        for pair in walk.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn test_additive_walk_is_lazy_and_exact_size() {
        let mut walk = AdditiveWalk::new(6, 4).unwrap();
        assert_eq!(walk.len(), 3);
        assert_eq!(walk.next(), Some(Segment::new(0, 4)));
        assert_eq!(walk.len(), 2);
        assert_eq!(walk.next(), Some(Segment::new(4, 2)));
        assert_eq!(walk.next(), Some(Segment::new(2, 0)));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn test_additive_walk_huge_step_does_not_overflow() {
        let walk = additive_walk(10, i64::MAX).unwrap();
        assert_eq!(walk.len(), 10);
        assert_eq!(walk[0].to, 7);
        assert_eq!(walk.last().map(|s| s.to), Some(0));
    }

    #[test]
    fn test_multiplicative_map() {
        let map = multiplicative_map(6, 2).unwrap();
        assert_eq!(
            pairs(&map),
            vec![(0, 0), (1, 2), (2, 4), (3, 0), (4, 2), (5, 4)]
        );
    }

    #[test]
    fn test_multiplicative_map_is_total_and_ascending() {
        for base in [1i64, 2, 50, 100, 333, 500] {
            for mult in 1..=10 {
                let map = multiplicative_map(base, mult).unwrap();
                assert_eq!(map.len(), base as usize);
                for (x, s) in map.iter().enumerate() {
                    assert_eq!(s.from, x);
                    assert_eq!(s.to as i64, (x as i64 * mult) % base);
                }
            }
        }
    }

    #[test]
    fn test_multiplicative_map_huge_multiplier_does_not_overflow() {
        let map = multiplicative_map(10, i64::MAX).unwrap();
        assert_eq!(map[3].to, ((3u128 * i64::MAX as u128) % 10) as usize);
    }

    #[test]
    fn test_invalid_input() {
        let cases: Vec<(Result<WalkResult>, &str)> = vec![
            (additive_walk(0, 3), "base"),
            (additive_walk(-4, 3), "base"),
            (additive_walk(5, 0), "step"),
            (additive_walk(5, -2), "step"),
            (multiplicative_map(-1, 2), "base"),
            (multiplicative_map(0, 2), "base"),
            (multiplicative_map(10, 0), "multiplier"),
        ];

        for (result, name) in cases {
            let err = result.unwrap_err();
            assert!(matches!(err, RingError::InvalidParameter { .. }));
            assert_eq!(err.parameter(), name);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(additive_walk(48, 18), additive_walk(48, 18));
        assert_eq!(multiplicative_map(499, 7), multiplicative_map(499, 7));
    }

    #[test]
    fn test_gcd_and_orbit_len() {
        let cases = vec![(12, 8, 4), (5, 2, 1), (7, 0, 7), (0, 9, 9), (30, 30, 30)];
        for (a, b, expected) in cases {
            assert_eq!(gcd(a, b), expected);
        }
        assert_eq!(orbit_len(12, 8), Ok(3));
        assert_eq!(orbit_len(5, 5), Ok(1));
    }

    #[test]
    fn test_segment_endpoints() {
        let ring = layout(4, 0.45).unwrap();
        let (from, to) = Segment::new(0, 2).endpoints(&ring).unwrap();
        assert_eq!(from, ring[0]);
        assert_eq!(to, ring[2]);
        assert_eq!(Segment::new(0, 9).endpoints(&ring), None);
    }

    #[test]
    fn test_serializes_as_list() {
        let walk = additive_walk(3, 1).unwrap();
        let json = serde_json::to_string(&walk).unwrap();
        assert_eq!(
            json,
            r#"[{"from":0,"to":1},{"from":1,"to":2},{"from":2,"to":0}]"#
        );
        assert_eq!(walk[0].to_string(), "0→1");
    }
}
