use log::debug;

use sf_structure::NAIDX;
use sf_energy::{Base, EnergyModel, Mode, NearestNeighbor};

use crate::Feature;
use crate::fill::FoldState;
use crate::pair_index::PairIndex;
use crate::traceback::traceback;

/// Pair-type motifs the candidate matcher proposes: the Watson-Crick set.
const TEMPLATES: usize = 4;

/// Parameters of one fold call.
///
/// `max_branches` is a hard cap on the arms of any multi-branch loop, not an
/// optimization hint: the number of branch combinations grows super-linearly
/// with it, and decompositions that would need more arms than the cap are
/// unreachable. `stem` forces the first `stem` bases to pair with the last
/// `stem` bases, overriding the energetic search.
#[derive(Debug, Clone)]
pub struct FoldOptions {
    /// Temperature in Celsius.
    pub temperature: f64,
    /// Forced prefix/suffix stem length, 0 for none.
    pub stem: usize,
    /// Most arms a multi-branch loop may have.
    pub max_branches: usize,
    /// Parameter set to fold with.
    pub mode: Mode,
}

impl Default for FoldOptions {
    fn default() -> Self {
        FoldOptions {
            temperature: 37.0,
            stem: 0,
            max_branches: 4,
            mode: Mode::Dna,
        }
    }
}

/// Fold `seq` into its minimum free energy secondary structure.
///
/// Returns the structure as an ordered list of features, outer to inner,
/// each carrying its marginal free energy contribution; the marginals sum
/// to the total free energy of the fold. A sequence too short to pair
/// yields an empty list.
pub fn fold(seq: &[Base], options: &FoldOptions) -> Vec<Feature> {
    let model = NearestNeighbor::new(options.mode, options.temperature);
    fold_with_model(seq, &model, options)
}

/// [`fold`] against a caller-provided energy model.
pub fn fold_with_model<M: EnergyModel>(
    seq: &[Base],
    model: &M,
    options: &FoldOptions,
) -> Vec<Feature> {
    let index = PairIndex::new(seq, model, TEMPLATES, options.stem);
    if index.is_empty() {
        return Vec::new();
    }

    let mut state = FoldState::new(seq, model, &index, options.max_branches, options.stem);
    state.fill();
    if options.stem == 0 {
        state.exterior_upgrade();
    }

    // a forced stem pins the root to the whole sequence
    let root = if options.stem > 0 {
        (0, (seq.len() - 1) as NAIDX)
    } else {
        match state.best() {
            Some(bp) => bp,
            None => return Vec::new(),
        }
    };
    debug!("traceback from root ({}, {})", root.0, root.1);

    traceback(root, &state.cache)
}

/// Total free energy of a fold result, kcal/mol.
pub fn free_energy(structs: &[Feature]) -> f64 {
    structs.iter().map(|s| s.energy).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeatureKind, structure_to_dot_bracket, structure_to_matrix};
    use sf_structure::PairTable;
    use sf_energy::NucleotideVec;

    fn fold_str(seq: &str, options: &FoldOptions) -> (NucleotideVec, Vec<Feature>) {
        let seq = NucleotideVec::from_lossy(seq);
        let structs = fold(&seq, options);
        (seq, structs)
    }

    #[test]
    fn test_simple_helix() {
        let (seq, structs) = fold_str("GGGGAAAACCCC", &FoldOptions::default());
        assert_eq!(structure_to_dot_bracket(&seq, &structs).to_string(), "((((....))))");

        // three stacks closed by a hairpin, total energy favorable
        assert_eq!(structs.len(), 4);
        assert!(structs[..3].iter().all(|s| s.kind.is_stack()));
        assert_eq!(structs[3].kind, FeatureKind::Hairpin);
        assert_eq!(structs[3].pairs, vec![(3, 8)]);
        assert!(free_energy(&structs) < 0.0);
    }

    #[test]
    fn test_determinism() {
        let options = FoldOptions::default();
        let seq = NucleotideVec::from_lossy("GCGCAAGCUGAAUCAGCAAGCGC");
        assert_eq!(fold(&seq, &options), fold(&seq, &options));
    }

    #[test]
    fn test_too_short_to_pair() {
        let (seq, structs) = fold_str("GAAC", &FoldOptions::default());
        assert!(structs.is_empty());
        assert_eq!(structure_to_dot_bracket(&seq, &structs).to_string(), "....");
    }

    #[test]
    fn test_empty_sequence() {
        let (_, structs) = fold_str("", &FoldOptions::default());
        assert!(structs.is_empty());
    }

    #[test]
    fn test_no_double_pairing() {
        let (seq, structs) = fold_str("GCGCAAGCUGAAUCAGCAAGCGCAAGGAUCC", &FoldOptions::default());
        let pairs: Vec<_> = structs.iter()
            .filter(|s| s.kind != FeatureKind::Exterior && s.pairs.len() == 1)
            .map(|s| s.pairs[0])
            .collect();
        assert!(!pairs.is_empty());
        // from_pairs rejects any position claimed twice
        let pt = PairTable::from_pairs(seq.len(), &pairs).unwrap();

        let dbv = structure_to_dot_bracket(&seq, &structs);
        let open = dbv.to_string().matches('(').count();
        let close = dbv.to_string().matches(')').count();
        assert_eq!(open, pairs.len());
        assert_eq!(close, pairs.len());
        let matrix = structure_to_matrix(&seq, &structs, None);
        assert_eq!(matrix.sum() as usize, 2 * pairs.len());
        assert!(pt.is_well_formed(0, seq.len()));
    }

    #[test]
    fn test_strict_nesting() {
        let (_, structs) = fold_str("GCGCAAGCUGAAUCAGCAAGCGCAAGGAUCC", &FoldOptions::default());
        // every feature with a single child encloses it strictly
        for w in structs.windows(2) {
            let (outer, inner) = (&w[0], &w[1]);
            if outer.pairs.len() == 1 && inner.pairs.len() == 1 {
                let (i, j) = outer.pairs[0];
                let (p, q) = inner.pairs[0];
                // siblings of a multi-branch restart at a disjoint range
                assert!(
                    (i < p && q < j) || j < p,
                    "({}, {}) then ({}, {})", i, j, p, q
                );
            }
        }
    }

    #[test]
    fn test_forced_stem_is_kept() {
        let options = FoldOptions { stem: 2, ..FoldOptions::default() };
        let (seq, structs) = fold_str("GCGGAAAACCGC", &options);

        // the outermost two pairs are the forced stem, as a stack chain
        assert_eq!(structs[0].pairs, vec![(0, 11)]);
        assert!(structs[0].kind.is_stack());
        assert_eq!(structs[1].pairs, vec![(1, 10)]);
        let dbv = structure_to_dot_bracket(&seq, &structs);
        assert!(dbv.to_string().starts_with("(("));
        assert!(dbv.to_string().ends_with("))"));
    }

    #[test]
    fn test_unresolvable_stem_folds_empty() {
        // forced stem whose inward neighbors A/A cannot pair
        let options = FoldOptions { stem: 2, ..FoldOptions::default() };
        let (seq, structs) = fold_str("GAGGAAAACCAC", &options);
        assert!(structs.is_empty());
        assert_eq!(structure_to_dot_bracket(&seq, &structs).to_string(), "............");
    }

    #[test]
    fn test_rna_mode_differs_from_dna() {
        let seq = NucleotideVec::from_lossy("GGGGAAAACCCC");
        let dna = fold(&seq, &FoldOptions::default());
        let rna = fold(&seq, &FoldOptions { mode: Mode::Rna, ..FoldOptions::default() });
        assert_eq!(dna.len(), rna.len());
        assert!((free_energy(&dna) - free_energy(&rna)).abs() > 0.1);
    }

    #[test]
    fn test_marginals_sum_to_absolute_energy() {
        let seq = NucleotideVec::from_lossy("GGGGAAAACCCC");
        let model = NearestNeighbor::new(Mode::Dna, 37.0);
        let structs = fold_with_model(&seq, &model, &FoldOptions::default());

        // the root decomposition is three stacks on a hairpin; the marginal
        // energies telescope back to its absolute energy within the
        // per-feature rounding of 0.1
        let absolute = model.stack(&seq, 0, 1, 10, 11)
            + model.stack(&seq, 1, 2, 9, 10)
            + model.stack(&seq, 2, 3, 8, 9)
            + model.hairpin(&seq, 3, 8);
        assert!((free_energy(&structs) - absolute).abs() <= 0.2 + 1e-9);
    }
}
