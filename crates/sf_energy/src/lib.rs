/// Base, NucleotideVec, PairType, ....
mod nucleotides;

/// Embedded nearest neighbor parameter sets.
pub mod parameters;

/// Typed lookup tables built from the parameter sets.
mod tables;

/// The energy model trait and the DNA/RNA mode switch.
mod energy_model;

/// The nearest neighbor model implementation.
mod nn_model;

pub use nucleotides::*;
pub use tables::*;
pub use energy_model::*;
pub use nn_model::*;
