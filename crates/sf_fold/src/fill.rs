use log::debug;
use nohash_hasher::IntSet;

use sf_structure::NAIDX;
use sf_energy::{Base, EnergyModel};

use crate::FeatureKind;
use crate::cache::{Cell, Entry, EnergyCache};
use crate::combinations::disjoint_combinations;
use crate::pair_index::{PairIndex, pack};

/// Penalty for a pair with no stacking support on either side; keeps
/// implausible lone pairs out of every decomposition that has a real
/// alternative.
pub(crate) const LONE_PAIR_PENALTY: f64 = 5000.0;

/// The fill engine: resolves every candidate pair by ascending span and
/// tracks the global best. All mutable fill state lives here; branch
/// eligibility (`non_branches`) only ever refers to pairs of strictly
/// smaller, already-resolved span.
pub(crate) struct FoldState<'a, M: EnergyModel> {
    seq: &'a [Base],
    model: &'a M,
    index: &'a PairIndex,
    max_branches: usize,
    stem: usize,
    pub(crate) cache: EnergyCache,
    non_branches: IntSet<u32>,
    best: Option<((NAIDX, NAIDX), f64)>,
}

impl<'a, M: EnergyModel> FoldState<'a, M> {
    pub fn new(
        seq: &'a [Base],
        model: &'a M,
        index: &'a PairIndex,
        max_branches: usize,
        stem: usize,
    ) -> Self {
        FoldState {
            seq,
            model,
            index,
            max_branches,
            stem,
            cache: EnergyCache::new(seq.len()),
            non_branches: IntSet::default(),
            best: None,
        }
    }

    pub fn best(&self) -> Option<(NAIDX, NAIDX)> {
        self.best.map(|(bp, _)| bp)
    }

    pub fn fill(&mut self) {
        let index = self.index;
        for (_d, pairs) in index.spans() {
            for &(i, j) in pairs {
                if self.stem > 0 && self.is_forced_stem(i, j) {
                    self.resolve_stem(i, j);
                } else {
                    self.resolve(i, j);
                }
                let e = self.cache.energy(i, j);
                if e < self.best.map_or(f64::INFINITY, |(_, b)| b) {
                    self.best = Some(((i, j), e));
                }
            }
        }
    }

    /// Outer stem diagonal pairs skip the generic search; the innermost
    /// stem pair resolves like any other candidate.
    fn is_forced_stem(&self, i: NAIDX, j: NAIDX) -> bool {
        let k = i as usize;
        k + 1 < self.stem && j as usize == self.seq.len() - 1 - k
    }

    fn resolve_stem(&mut self, i: NAIDX, j: NAIDX) {
        let seq = self.seq;
        let n = seq.len();
        let (ui, uj) = (i as usize, j as usize);
        let (p, q) = (ui + 1, uj - 1);

        if !self.model.can_pair(seq[p], seq[q])
            || !self.cache.energy(p as NAIDX, q as NAIDX).is_finite()
        {
            // the forced helix cannot continue inward
            self.cache.set(i, j, Cell::Infeasible);
            return;
        }

        let kind = if (ui > 0 && uj == n - 1) || (ui == 0 && uj < n - 1) {
            FeatureKind::StackDangling
        } else {
            FeatureKind::Stack
        };
        let e = self.model.stack(seq, ui, p, q, uj) + self.cache.energy(p as NAIDX, q as NAIDX);
        self.cache.set(i, j, Cell::Solved(Entry {
            energy: e,
            kind,
            children: vec![(p as NAIDX, q as NAIDX)],
        }));
    }

    fn resolve(&mut self, i: NAIDX, j: NAIDX) {
        if !self.cache.get(i, j).is_vacant() {
            return; // memoized
        }
        let seq = self.seq;
        let index = self.index;
        let n = seq.len();
        let (ui, uj) = (i as usize, j as usize);

        // a pair with no stacking support on either side only enters under
        // penalty; boundary pairs count as unsupported on the outside
        let isolated_outer = if ui > 0 && uj < n - 1 {
            !self.model.can_pair(seq[ui - 1], seq[uj + 1])
        } else {
            true
        };
        let isolated_inner = !self.model.can_pair(seq[ui + 1], seq[uj - 1]);
        if isolated_outer && isolated_inner {
            self.cache.set(i, j, Cell::Solved(
                Entry::terminal(LONE_PAIR_PENALTY, FeatureKind::LonePair),
            ));
            return;
        }

        let mut best: Option<Entry> = None;
        let better = |best: &Option<Entry>, e: f64| {
            e < best.as_ref().map_or(f64::INFINITY, |b| b.energy)
        };

        // hairpin, when the span encloses a minimal loop
        let hairpin = self.model.hairpin(seq, ui, uj);
        if hairpin.is_finite() {
            best = Some(Entry::terminal(hairpin, FeatureKind::Hairpin));
        }

        // the best two-loop: stack, bulge, or interior loop
        for &(p, q) in index.nested(i, j) {
            let (up, uq) = (p as usize, q as usize);
            if !self.model.can_pair(seq[up], seq[uq]) {
                continue; // not complementary, skipped silently
            }

            let (dl, dr) = (up - ui, uj - uq);
            let (e_loop, kind) = if dl == 1 && dr == 1 {
                let kind = if (ui > 0 && uj == n - 1) || (ui == 0 && uj < n - 1) {
                    FeatureKind::StackDangling
                } else {
                    FeatureKind::Stack
                };
                (self.model.stack(seq, ui, up, uq, uj), kind)
            } else if dl > 1 && dr > 1 {
                // flanking bases that could stack rule the interior loop out
                if self.model.is_nn_pair(seq, ui, ui + 1, uj, uj - 1)
                    || self.model.is_nn_pair(seq, up - 1, up, uq + 1, uq)
                {
                    continue;
                }
                let kind = if dl == 2 && dr == 2 {
                    FeatureKind::StackMismatch
                } else {
                    FeatureKind::Interior(dl - 1, dr - 1)
                };
                (self.model.interior(seq, ui, up, uq, uj), kind)
            } else if dl > 1 {
                (self.model.bulge(seq, ui, up, uq, uj), FeatureKind::Bulge(dl - 1))
            } else {
                (self.model.bulge(seq, ui, up, uq, uj), FeatureKind::Bulge(dr - 1))
            };

            let e = e_loop + self.cache.energy(p, q);
            if better(&best, e) {
                best = Some(Entry { energy: e, kind, children: vec![(p, q)] });
            }
        }

        // multi-branch decompositions; only pairs with outer support or at a
        // sequence boundary may close one
        if !isolated_outer || ui == 0 || uj == n - 1 {
            let pool: Vec<(NAIDX, NAIDX)> = index
                .nested(i, j)
                .iter()
                .copied()
                .filter(|&(p, q)| !self.non_branches.contains(&pack(p, q)))
                .collect();
            if pool.len() >= 2 {
                for combo in disjoint_combinations(&pool, 2, self.max_branches) {
                    let mut e = self.model.multibranch(seq, (ui, uj), &combo);
                    for &(p, q) in &combo {
                        e += self.cache.energy(p, q);
                    }
                    if better(&best, e) {
                        best = Some(Entry {
                            energy: e,
                            kind: FeatureKind::Multibranch,
                            children: combo,
                        });
                    }
                }
            }
        }

        match best {
            Some(entry) => {
                // only favorable helix continuations stay eligible as arms
                // of multi-branch loops yet to come
                if entry.energy > 0.0
                    || matches!(entry.kind, FeatureKind::Hairpin | FeatureKind::Multibranch)
                {
                    self.non_branches.insert(pack(i, j));
                }
                self.cache.set(i, j, Cell::Solved(entry));
            }
            None => {
                self.non_branches.insert(pack(i, j));
                self.cache.set(i, j, Cell::Infeasible);
            }
        }
    }

    /// Decide whether leaving both sequence ends unpaired beats the best
    /// single closing pair. Only the whole-sequence cell may be rewritten.
    pub fn exterior_upgrade(&mut self) {
        debug_assert_eq!(self.stem, 0, "exterior pass only without a forced stem");
        let n = self.seq.len();
        let Some((mut root, root_e)) = self.best else { return };
        let (first, last) = (0, (n - 1) as NAIDX);

        let skip = !self.cache.get(first, last).is_vacant()
            && self.cache.energy(first, last) <= root_e;
        if skip {
            return;
        }

        let arms: Vec<(NAIDX, NAIDX)> = self.index
            .pairs()
            .iter()
            .copied()
            .filter(|&(p, q)| self.cache.energy(p, q) < 0.0)
            .collect();
        if arms.len() < 2 {
            return;
        }

        for combo in disjoint_combinations(&arms, 2, self.max_branches) {
            let mut e = self.model.exterior(self.seq, &combo);
            for &(p, q) in &combo {
                e += self.cache.energy(p, q);
            }
            if e < self.cache.energy(root.0, root.1) {
                debug!("open ending improves the fold: {:.2} for {} arms", e, combo.len());
                self.cache.set(first, last, Cell::Solved(Entry {
                    energy: e,
                    kind: FeatureKind::Exterior,
                    children: combo,
                }));
                root = (first, last);
                self.best = Some((root, e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_energy::NucleotideVec;
    use Base::*;

    /// Flat energies so decompositions are easy to predict: every stack is
    /// -2, hairpins +3, bulges and interiors +2, multi-branch +1 plus 0.2
    /// per arm, open endings 0.2 per arm.
    struct FlatModel;

    impl EnergyModel for FlatModel {
        fn can_pair(&self, b1: Base, b2: Base) -> bool {
            matches!((b1, b2), (A, U) | (U, A) | (C, G) | (G, C))
        }
        fn temperature(&self) -> f64 {
            37.0
        }
        fn min_hairpin_size(&self) -> usize {
            3
        }
        fn hairpin(&self, _seq: &[Base], i: usize, j: usize) -> f64 {
            if j - i - 1 < 3 { f64::INFINITY } else { 3.0 }
        }
        fn stack(&self, _seq: &[Base], _i: usize, _p: usize, _q: usize, _j: usize) -> f64 {
            -2.0
        }
        fn bulge(&self, _seq: &[Base], _i: usize, _p: usize, _q: usize, _j: usize) -> f64 {
            2.0
        }
        fn interior(&self, _seq: &[Base], _i: usize, _p: usize, _q: usize, _j: usize) -> f64 {
            2.0
        }
        fn multibranch(&self, _seq: &[Base], _closing: (usize, usize), branches: &[(NAIDX, NAIDX)]) -> f64 {
            1.0 + 0.2 * branches.len() as f64
        }
        fn exterior(&self, _seq: &[Base], branches: &[(NAIDX, NAIDX)]) -> f64 {
            0.2 * branches.len() as f64
        }
        fn is_nn_pair(&self, seq: &[Base], a: usize, _b: usize, _c: usize, d: usize) -> bool {
            self.can_pair(seq[a], seq[d])
        }
    }

    fn filled(seq: &str, max_branches: usize, stem: usize) -> (NucleotideVec, PairIndex, EnergyCache, Option<(NAIDX, NAIDX)>) {
        let seq = NucleotideVec::from_lossy(seq);
        let model = FlatModel;
        let index = PairIndex::new(&seq, &model, 6, stem);
        let mut state = FoldState::new(&seq, &model, &index, max_branches, stem);
        state.fill();
        if stem == 0 {
            state.exterior_upgrade();
        }
        let best = state.best();
        let cache = state.cache;
        (seq, index, cache, best)
    }

    #[test]
    fn test_helix_chain_resolution() {
        let (_, _, cache, best) = filled("GGGGAAAACCCC", 4, 0);
        // the full helix: 3 stacks on a +3 hairpin
        assert_eq!(best, Some((0, 11)));
        assert_eq!(cache.energy(0, 11), -3.0);
        match cache.get(0, 11) {
            Cell::Solved(entry) => {
                assert!(entry.kind.is_stack());
                assert_eq!(entry.children, vec![(1, 10)]);
            }
            _ => panic!("expected a solved cell"),
        }
        assert_eq!(cache.energy(3, 8), 3.0); // bare hairpin
    }

    #[test]
    fn test_lone_pair_penalty() {
        let (_, _, cache, _) = filled("GAAAAAAAAAAC", 4, 0);
        // (0, 11) has no stacking support on either side
        assert_eq!(cache.energy(0, 11), LONE_PAIR_PENALTY);
        match cache.get(0, 11) {
            Cell::Solved(entry) => {
                assert_eq!(entry.kind, FeatureKind::LonePair);
                assert!(entry.children.is_empty());
            }
            _ => panic!("expected a solved cell"),
        }
    }

    #[test]
    fn test_exterior_upgrade_two_arms() {
        // two favorable arms in the cache, nothing else negative: the open
        // ending must overwrite the whole-sequence cell and become the root
        let seq = NucleotideVec::from_lossy("GGGAAACCCGGGAAACCC");
        let model = FlatModel;
        let index = PairIndex::new(&seq, &model, 6, 0);
        let mut state = FoldState::new(&seq, &model, &index, 4, 0);

        state.cache.set(0, 8, Cell::Solved(Entry {
            energy: -2.5, kind: FeatureKind::Stack, children: vec![(1, 7)],
        }));
        state.cache.set(9, 17, Cell::Solved(Entry {
            energy: -1.5, kind: FeatureKind::Stack, children: vec![(10, 16)],
        }));
        state.best = Some(((0, 8), -2.5));

        state.exterior_upgrade();

        assert_eq!(state.best(), Some((0, 17)));
        match state.cache.get(0, 17) {
            Cell::Solved(entry) => {
                assert_eq!(entry.kind, FeatureKind::Exterior);
                assert_eq!(entry.children, vec![(0, 8), (9, 17)]);
                // 0.2 per arm on top of the arm energies
                assert!((entry.energy - (-4.0 + 0.4)).abs() < 1e-9);
            }
            _ => panic!("expected the whole-sequence cell to be rewritten"),
        }
    }

    #[test]
    fn test_exterior_skips_when_root_already_best() {
        let seq = NucleotideVec::from_lossy("GGGAAACCC");
        let model = FlatModel;
        let index = PairIndex::new(&seq, &model, 6, 0);
        let mut state = FoldState::new(&seq, &model, &index, 4, 0);

        state.cache.set(0, 8, Cell::Solved(Entry {
            energy: -2.5, kind: FeatureKind::Stack, children: vec![(1, 7)],
        }));
        state.best = Some(((0, 8), -2.5));

        state.exterior_upgrade();

        // the whole-sequence cell is already the best root, nothing changes
        assert_eq!(state.best(), Some((0, 8)));
        assert_eq!(state.cache.energy(0, 8), -2.5);
    }

    #[test]
    fn test_forced_stem_cells() {
        let (_, _, cache, _) = filled("GCGGAAAACCGC", 4, 2);
        // (0, 11) is forced to stack onto (1, 10)
        match cache.get(0, 11) {
            Cell::Solved(entry) => {
                assert!(entry.kind.is_stack());
                assert_eq!(entry.children, vec![(1, 10)]);
            }
            _ => panic!("stem cell must be solved"),
        }
    }

    #[test]
    fn test_forced_stem_mismatch_is_infeasible() {
        // the inward neighbors A/A cannot pair, so the forced outer stem
        // pair has no continuation
        let (_, _, cache, _) = filled("GAGGAAAACCAC", 4, 2);
        assert_eq!(cache.get(0, 11), &Cell::Infeasible);
    }
}
