//! # Grid stretching
//!
//! Non-uniform grids are built from [`Segment`]s: a uniformly spaced core around the
//! region of interest, buffers that grow geometrically towards the domain boundaries,
//! a smoothing pass that removes the kinks where they meet, and an optional resampling
//! to a solver friendly point count.

mod newton;
mod resample;
mod segment;

pub use newton::{find_n_growth_rate, newton_iter, NewtonOptions, NewtonResult};
pub use resample::{prime_comb_str, prime_factors};
pub use segment::{connect_segs, Segment, SmoothOptions};
