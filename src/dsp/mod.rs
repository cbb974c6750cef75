//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free after construction and safe to
//! run on the realtime render thread. They stay focused on the
//! signal-processing math; graph combinators layer on composition and
//! modulation.

/// State-variable filter with low/high/band responses.
pub mod filter;
/// Sub-audio sine oscillator for parameter modulation.
pub mod lfo;
/// Parameter modulation math.
pub mod modulate;
/// Looping uniform white-noise buffer.
pub mod noise;
