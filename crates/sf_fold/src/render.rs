use ndarray::Array2;

use sf_structure::{DotBracket, DotBracketVec, NAIDX};
use sf_energy::Base;

use crate::{Feature, FeatureKind};

/// The single base pairs a fold result places. A leading open-ending
/// placeholder carries the branch list instead of a pair of its own and is
/// skipped, as is any other multi-pair feature.
fn placed_pairs(structs: &[Feature]) -> impl Iterator<Item = (NAIDX, NAIDX)> + '_ {
    let structs = match structs.first() {
        Some(s) if s.kind == FeatureKind::Exterior => &structs[1..],
        _ => structs,
    };
    structs.iter()
        .filter(|s| s.pairs.len() == 1)
        .map(|s| s.pairs[0])
}

/// The contact matrix of a fold result: symmetric 1-entries for every base
/// pair, zero elsewhere. `size` pads the matrix with zeros beyond the
/// sequence length.
pub fn structure_to_matrix(
    seq: &[Base],
    structs: &[Feature],
    size: Option<usize>,
) -> Array2<u8> {
    let n = size.unwrap_or(seq.len());
    let mut matrix = Array2::zeros((n, n));
    for (i, j) in placed_pairs(structs) {
        matrix[[i as usize, j as usize]] = 1;
        matrix[[j as usize, i as usize]] = 1;
    }
    matrix
}

/// The dot-bracket string of a fold result.
pub fn structure_to_dot_bracket(seq: &[Base], structs: &[Feature]) -> DotBracketVec {
    let mut dbv = vec![DotBracket::Unpaired; seq.len()];
    for (i, j) in placed_pairs(structs) {
        dbv[i as usize] = DotBracket::Open;
        dbv[j as usize] = DotBracket::Close;
    }
    DotBracketVec(dbv)
}
