use sf_structure::NAIDX;

use crate::{Feature, FeatureKind};
use crate::cache::{Cell, EnergyCache};

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Convert absolute cache energies into marginal contributions: each
/// feature pays its own energy minus the next (inner) feature's energy;
/// the innermost keeps its absolute value. Rounded to one decimal, so the
/// marginals sum back to the root energy within rounding.
fn marginalize(mut feats: Vec<Feature>) -> Vec<Feature> {
    for k in 0..feats.len() {
        let next = if k + 1 < feats.len() { feats[k + 1].energy } else { 0.0 };
        feats[k].energy = round1(feats[k].energy - next);
    }
    feats
}

/// Walk the filled cache from `root` and emit features outer to inner.
/// The cache is read-only here; forced stem cells already point one pair
/// inward, so no preprocessing pass is needed.
pub(crate) fn traceback(root: (NAIDX, NAIDX), cache: &EnergyCache) -> Vec<Feature> {
    let (mut i, mut j) = root;
    let mut feats: Vec<Feature> = Vec::new();

    loop {
        let entry = match cache.get(i, j) {
            Cell::Solved(entry) => entry,
            _ => return marginalize(feats), // unresolved root, nothing below
        };

        match entry.children.len() {
            0 => {
                // terminal: hairpin or penalized lone pair
                feats.push(Feature {
                    energy: entry.energy,
                    kind: entry.kind.clone(),
                    pairs: vec![(i, j)],
                });
                return marginalize(feats);
            }
            1 => {
                feats.push(Feature {
                    energy: entry.energy,
                    kind: entry.kind.clone(),
                    pairs: vec![(i, j)],
                });
                (i, j) = entry.children[0];
            }
            _ => {
                // an open-ending root closes nothing; it carries the branch
                // list in place of a pair of its own
                let own_pairs = if entry.kind == FeatureKind::Exterior {
                    entry.children.clone()
                } else {
                    vec![(i, j)]
                };
                feats.push(Feature {
                    energy: entry.energy,
                    kind: entry.kind.clone(),
                    pairs: own_pairs,
                });
                let mut feats = marginalize(feats);

                let mut branch_sum = 0.0;
                let mut branch_feats = Vec::new();
                for &(p, q) in &entry.children {
                    let tb = traceback((p, q), cache);
                    if !tb.is_empty() {
                        branch_sum += cache.energy(p, q);
                        branch_feats.extend(tb);
                    }
                }

                // the closing feature keeps only the branching cost
                if let Some(last) = feats.last_mut() {
                    last.energy = round1(last.energy - branch_sum);
                }
                feats.extend(branch_feats);
                return feats;
            }
        }
    }
}
