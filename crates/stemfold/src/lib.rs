//! # stemfold
//!
//! Unified API for minimum free energy folding of nucleic acids.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod fold_parsers;

pub mod structure {
    pub use ::sf_structure::*;
}

pub mod energy {
    pub use ::sf_energy::*;
}

pub mod fold {
    pub use ::sf_fold::*;
}
