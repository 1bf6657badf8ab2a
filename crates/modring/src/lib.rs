pub mod arrow;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod walk;

pub use arrow::{Arrow, ArrowStyle};
pub use diagram::{Diagram, Mode};
pub use error::{Result, RingError};
pub use geometry::{Point, TickRing, layout};
pub use walk::{AdditiveWalk, Segment, WalkResult, additive_walk, gcd, multiplicative_map, orbit_len};
