//! Minimum free energy folding of single-stranded nucleic acids.
//!
//! The search is restricted to the candidate pairs proposed by
//! [`PairIndex`]; per candidate pair, a dynamic program resolves the best
//! loop decomposition by ascending span, an exterior pass checks whether
//! leaving both ends unpaired wins, and the traceback turns the filled
//! cache into an ordered list of [`Feature`]s with marginal energies.

/// Structural features and their labels.
mod features;

/// The tagged energy cache.
mod cache;

/// Candidate base pair index (sets S and D).
mod pair_index;

/// Non-overlapping branch groupings.
mod combinations;

/// The DP fill engine and the exterior multi-branch resolver.
mod fill;

/// Marginal energy reconstruction.
mod traceback;

/// Contact matrix and dot-bracket encoders.
mod render;

/// The public fold operation.
mod fold;

pub use features::*;
pub use pair_index::*;
pub use combinations::*;
pub use render::*;
pub use fold::*;
