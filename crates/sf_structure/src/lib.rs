mod error;
mod dotbracket;
mod pair_table;

pub use error::*;
pub use dotbracket::*;
pub use pair_table::*;


/// We use u16 (0 to 65k), which is plenty for indexing positions on a nucleic
/// acid. If you ever want to change this, beware that downstream crates pack
/// a pair (u16, u16) into one u32 for intmap keys. In particular, sf_fold
/// *assumes* that NAIDX is set to u16.
pub type NAIDX = u16;
