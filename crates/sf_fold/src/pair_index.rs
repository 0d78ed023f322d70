use std::collections::BTreeMap;

use ahash::AHashMap;

use sf_structure::NAIDX;
use sf_energy::{Base, EnergyModel, PairType};

/// Pack a base pair into one u32 intmap key (NAIDX is u16).
pub fn pack(i: NAIDX, j: NAIDX) -> u32 {
    ((i as u32) << 16) | (j as u32)
}

/// Pair-type templates the candidate matcher may propose, strongest first
/// within each class: Watson-Crick, then wobble.
const MOTIFS: [PairType; 6] = [
    PairType::AU, PairType::UA,
    PairType::CG, PairType::GC,
    PairType::GU, PairType::UG,
];

/// The candidate base pair index: every pair the fold may use, grouped two
/// ways. `spans()` yields candidates by ascending span `d = j - i`, the
/// required fill order; `nested(i, j)` yields the strictly nested
/// candidates `i < p < q < j` that bound the interior and branch search.
///
/// Candidates are matched from the complementarity graph using up to
/// `templates` pair-type motifs (4 = Watson-Crick only, 6 = wobble
/// included), always intersected with the model's own pairing alphabet.
/// This is a heuristic restriction, not an exhaustive guarantee.
pub struct PairIndex {
    nested: AHashMap<u32, Vec<(NAIDX, NAIDX)>>,
    by_span: BTreeMap<usize, Vec<(NAIDX, NAIDX)>>,
    pairs: Vec<(NAIDX, NAIDX)>,
}

impl PairIndex {
    pub fn new<M: EnergyModel>(seq: &[Base], model: &M, templates: usize, stem: usize) -> Self {
        let n = seq.len();
        let motifs = &MOTIFS[..templates.min(MOTIFS.len())];
        let min_span = model.min_hairpin_size() + 1;

        let mut pairs: Vec<(NAIDX, NAIDX)> = Vec::new();
        for i in 0..n.saturating_sub(min_span) {
            for j in (i + min_span)..n {
                let pt = PairType::from((seq[i], seq[j]));
                if motifs.contains(&pt) && model.can_pair(seq[i], seq[j]) {
                    pairs.push((i as NAIDX, j as NAIDX));
                }
            }
        }

        // a forced stem contributes its diagonal even when a motif or the
        // span bound would not propose it
        for k in 0..stem {
            if k + 1 >= n.saturating_sub(k) {
                break;
            }
            let bp = (k as NAIDX, (n - 1 - k) as NAIDX);
            if model.can_pair(seq[k], seq[n - 1 - k]) && !pairs.contains(&bp) {
                pairs.push(bp);
            }
        }

        pairs.sort_unstable();
        pairs.dedup();

        let mut by_span: BTreeMap<usize, Vec<(NAIDX, NAIDX)>> = BTreeMap::new();
        for &(i, j) in &pairs {
            by_span.entry((j - i) as usize).or_default().push((i, j));
        }

        let mut nested: AHashMap<u32, Vec<(NAIDX, NAIDX)>> = AHashMap::new();
        for &(i, j) in &pairs {
            let inner: Vec<(NAIDX, NAIDX)> = pairs
                .iter()
                .copied()
                .filter(|&(p, q)| i < p && q < j)
                .collect();
            if !inner.is_empty() {
                nested.insert(pack(i, j), inner);
            }
        }

        PairIndex { nested, by_span, pairs }
    }

    /// All candidate pairs, sorted 5'→3'.
    pub fn pairs(&self) -> &[(NAIDX, NAIDX)] {
        &self.pairs
    }

    /// Strictly nested candidates of `(i, j)`, sorted 5'→3'.
    pub fn nested(&self, i: NAIDX, j: NAIDX) -> &[(NAIDX, NAIDX)] {
        self.nested.get(&pack(i, j)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Span groups in ascending span order.
    pub fn spans(&self) -> impl Iterator<Item = (usize, &[(NAIDX, NAIDX)])> {
        self.by_span.iter().map(|(d, bps)| (*d, bps.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
