use sf_structure::NAIDX;

/// All combinations of `min..=max` mutually disjoint pairs from `pool`.
///
/// The pool is deduplicated and sorted first, so every combination comes
/// out in 5'→3' order and the overall enumeration is deterministic. Two
/// pairs are disjoint when their closed intervals share no position, which
/// also excludes nested pairs.
///
/// `max` is a hard cap, not a hint: the number of combinations grows
/// super-linearly with it, and callers must keep it small.
pub fn disjoint_combinations(
    pool: &[(NAIDX, NAIDX)],
    min: usize,
    max: usize,
) -> Vec<Vec<(NAIDX, NAIDX)>> {
    let mut pool = pool.to_vec();
    pool.sort_unstable();
    pool.dedup();

    let mut out = Vec::new();
    if max == 0 || pool.is_empty() {
        return out;
    }
    let mut current = Vec::new();
    extend(&pool, 0, min.max(1), max, &mut current, &mut out);
    out
}

fn extend(
    pool: &[(NAIDX, NAIDX)],
    from: usize,
    min: usize,
    max: usize,
    current: &mut Vec<(NAIDX, NAIDX)>,
    out: &mut Vec<Vec<(NAIDX, NAIDX)>>,
) {
    if current.len() >= min {
        out.push(current.clone());
    }
    if current.len() == max {
        return;
    }
    for k in from..pool.len() {
        let (p, q) = pool[k];
        if let Some(&(_, last_q)) = current.last() {
            if p <= last_q {
                continue; // overlaps or nests with the previous choice
            }
        }
        current.push((p, q));
        extend(pool, k + 1, min, max, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs_disjoint() {
        let pool = [(0, 3), (1, 6), (4, 7), (8, 11), (9, 10)];
        for combo in disjoint_combinations(&pool, 2, 4) {
            for w in combo.windows(2) {
                assert!(w[0].1 < w[1].0, "overlap in {:?}", combo);
            }
        }
    }

    #[test]
    fn test_size_bounds() {
        let pool = [(0, 1), (2, 3), (4, 5), (6, 7)];
        let combos = disjoint_combinations(&pool, 2, 3);
        assert!(combos.iter().all(|c| c.len() >= 2 && c.len() <= 3));
        // C(4,2) + C(4,3) of fully disjoint pairs
        assert_eq!(combos.len(), 6 + 4);
    }

    #[test]
    fn test_nested_pairs_never_combine() {
        let pool = [(0, 9), (1, 4), (5, 8)];
        let combos = disjoint_combinations(&pool, 2, 3);
        assert_eq!(combos, vec![vec![(1, 4), (5, 8)]]);
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let pool = [(0, 1), (0, 1), (2, 3)];
        let combos = disjoint_combinations(&pool, 2, 2);
        assert_eq!(combos, vec![vec![(0, 1), (2, 3)]]);
    }

    #[test]
    fn test_empty_results() {
        assert!(disjoint_combinations(&[], 2, 4).is_empty());
        assert!(disjoint_combinations(&[(0, 5), (1, 4)], 2, 4).is_empty());
        assert!(disjoint_combinations(&[(0, 1), (2, 3)], 2, 0).is_empty());
    }
}
