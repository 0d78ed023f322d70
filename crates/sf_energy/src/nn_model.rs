use log::warn;
use colored::*;

use sf_structure::NAIDX;

use crate::Base;
use crate::Dhs;
use crate::EnergyModel;
use crate::EnergyTables;
use crate::Mode;
use crate::PairType;
use crate::StepKey;
use crate::{K0, R_GAS};

/// Interior loop asymmetry cost per unpaired-length difference, capped.
const ASYMMETRY: f64 = 0.3;
const ASYMMETRY_MAX: f64 = 3.0;

/// The nearest neighbor free energy model over the embedded DNA or RNA
/// parameter set. The parameter set and the temperature are fixed at
/// construction; all evaluations are pure.
pub struct NearestNeighbor {
    mode: Mode,
    temperature: f64,
    kelvin: f64,
    tables: EnergyTables,
}

impl NearestNeighbor {
    pub fn new(mode: Mode, temperature: f64) -> Self {
        NearestNeighbor {
            mode,
            temperature,
            kelvin: temperature + K0,
            tables: EnergyTables::for_mode(mode),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn dg(&self, dhs: Dhs) -> f64 {
        dhs.dg(self.kelvin)
    }

    fn step(seq: &[Base], a: usize, b: usize, c: usize, d: usize) -> StepKey {
        [seq[a], seq[b], seq[c], seq[d]]
    }

    /// Loop initiation with Jacobson-Stockmayer extrapolation past the table.
    fn loop_init(&self, table: &dyn Fn(usize) -> Dhs, len: usize) -> f64 {
        if len <= 30 {
            self.dg(table(len))
        } else {
            self.dg(table(30)) + 1.75 * R_GAS * self.kelvin * (len as f64 / 30.0).ln()
        }
    }

    fn ru_penalty(&self, seq: &[Base], i: usize, j: usize) -> f64 {
        if PairType::from((seq[i], seq[j])).is_ru() {
            self.tables.terminal_ru
        } else {
            0.0
        }
    }
}

impl EnergyModel for NearestNeighbor {
    fn can_pair(&self, b5: Base, b3: Base) -> bool {
        self.tables.can_pair(b5, b3)
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn min_hairpin_size(&self) -> usize {
        3
    }

    fn hairpin(&self, seq: &[Base], i: usize, j: usize) -> f64 {
        let len = j - i - 1;
        if len < self.min_hairpin_size() {
            return f64::INFINITY;
        }

        let mut e = self.loop_init(&|l| self.tables.hairpin_loop(l), len);

        // whole-loop bonuses, keyed closing pair + loop
        if len == 3 || len == 4 {
            if let Some(bonus) = self.tables.special_hairpin(&seq[i..=j]) {
                e += self.dg(bonus);
            }
        }

        if len > 3 {
            let key = Self::step(seq, i, i + 1, j, j - 1);
            if let Some(mm) = self.tables.terminal_mm(key) {
                e += self.dg(mm);
            }
        } else if PairType::from((seq[i], seq[j])).is_ru() {
            // triloops are too tight for a mismatch, only the closing penalty
            e += self.tables.terminal_ru;
        }
        e
    }

    fn stack(&self, seq: &[Base], i: usize, p: usize, q: usize, j: usize) -> f64 {
        let key = Self::step(seq, i, p, j, q);
        match self.tables.nn(key) {
            Some(dhs) => self.dg(dhs),
            None => {
                warn!("{} no stack parameters for {}{}/{}{}",
                    "WARNING:".red(), seq[i], seq[p], seq[j], seq[q]);
                0.0
            }
        }
    }

    fn bulge(&self, seq: &[Base], i: usize, p: usize, q: usize, j: usize) -> f64 {
        let len = (p - i - 1).max(j - q - 1);
        debug_assert!(len >= 1, "not a bulge");

        let mut e = self.loop_init(&|l| self.tables.bulge_loop(l), len);
        if len == 1 {
            // the flanking helices stack coaxially across a single base
            e += self.stack(seq, i, p, q, j);
        } else {
            e += self.ru_penalty(seq, i, j);
            e += self.ru_penalty(seq, p, q);
        }
        e
    }

    fn interior(&self, seq: &[Base], i: usize, p: usize, q: usize, j: usize) -> f64 {
        let left = p - i - 1;
        let right = j - q - 1;
        debug_assert!(left >= 1 && right >= 1, "not an interior loop");

        let mut e = self.loop_init(&|l| self.tables.internal_loop(l), left + right);
        e += (ASYMMETRY * (left as f64 - right as f64).abs()).min(ASYMMETRY_MAX);

        if let Some(mm) = self.tables.internal_mm(Self::step(seq, i, i + 1, j, j - 1)) {
            e += self.dg(mm);
        }
        if let Some(mm) = self.tables.internal_mm(Self::step(seq, p - 1, p, q + 1, q)) {
            e += self.dg(mm);
        }
        e
    }

    fn multibranch(&self, seq: &[Base], closing: (usize, usize), branches: &[(NAIDX, NAIDX)]) -> f64 {
        let (a, b, c, d) = self.tables.multibranch;
        let (i, j) = closing;

        let mut unpaired = 0;
        let mut prev = i;
        for &(p, q) in branches {
            unpaired += p as usize - prev - 1;
            prev = q as usize;
        }
        unpaired += j - prev - 1;

        let mut e = a + b * branches.len() as f64;
        if unpaired == 0 {
            e += d;
        } else {
            e += c * unpaired as f64;
        }

        e += self.ru_penalty(seq, i, j);
        for &(p, q) in branches {
            e += self.ru_penalty(seq, p as usize, q as usize);
        }
        e
    }

    fn exterior(&self, seq: &[Base], branches: &[(NAIDX, NAIDX)]) -> f64 {
        let (_, b, _, _) = self.tables.multibranch;

        // unpaired exterior bases are free, only helix costs remain
        let mut e = b * branches.len() as f64;
        for &(p, q) in branches {
            e += self.ru_penalty(seq, p as usize, q as usize);
        }
        e
    }

    fn is_nn_pair(&self, seq: &[Base], a: usize, b: usize, c: usize, d: usize) -> bool {
        self.tables.is_nn(Self::step(seq, a, b, c, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NucleotideVec;

    fn dna() -> NearestNeighbor {
        NearestNeighbor::new(Mode::Dna, 37.0)
    }

    #[test]
    fn test_stack_energy() {
        let model = dna();
        let seq = NucleotideVec::from_lossy("GGGGAAAACCCC");
        let e = model.stack(&seq, 0, 1, 10, 11);
        assert!((e - (-1.828)).abs() < 1e-3);
    }

    #[test]
    fn test_hairpin_energy() {
        let model = dna();
        let seq = NucleotideVec::from_lossy("GGGGAAAACCCC");
        // loop GAAAAC: initiation 3.5, terminal mismatch GA/CA -1.1
        let e = model.hairpin(&seq, 3, 8);
        assert!((e - 2.4).abs() < 0.05, "hairpin energy {}", e);
    }

    #[test]
    fn test_hairpin_too_small() {
        let model = dna();
        let seq = NucleotideVec::from_lossy("GAAC");
        assert!(model.hairpin(&seq, 0, 3).is_infinite());
    }

    #[test]
    fn test_triloop_closing_penalty() {
        let model = dna();
        // A-T closed triloop pays the terminal penalty, G-C does not
        let at = NucleotideVec::from_lossy("ACCCT");
        let gc = NucleotideVec::from_lossy("GCCCC");
        let diff = model.hairpin(&at, 0, 4) - model.hairpin(&gc, 0, 4);
        assert!((diff - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_special_tetraloop_bonus() {
        let model = NearestNeighbor::new(Mode::Rna, 37.0);
        let plain = NucleotideVec::from_lossy("GCCCCC"); // no bonus entry
        let bonus = NucleotideVec::from_lossy("GGAAAC"); // GNRA tetraloop
        assert!(model.hairpin(&bonus, 0, 5) < model.hairpin(&plain, 0, 5));
    }

    #[test]
    fn test_single_bulge_keeps_stack() {
        let model = dna();
        //          0123456789
        let seq = NucleotideVec::from_lossy("GGAGAAACCC");
        // (1, 8) -> (3, 7): one bulged A on the left strand
        let with_stack = model.bulge(&seq, 1, 3, 7, 8);
        let stack = model.stack(&seq, 1, 3, 7, 8);
        assert!((with_stack - (4.0 + stack)).abs() < 0.05);
    }

    #[test]
    fn test_interior_asymmetry() {
        let model = dna();
        let seq = NucleotideVec::from_lossy("GAAGAAACAAAAC");
        // same total loop size, different asymmetry
        let sym = model.interior(&seq, 0, 3, 7, 10);   // 2x2
        let asym = model.interior(&seq, 0, 4, 7, 9);   // 3x1
        assert!(asym > sym);
    }

    #[test]
    fn test_long_loop_extrapolation() {
        let model = dna();
        let make = |loop_len: usize| {
            NucleotideVec::from_lossy(&format!("G{}C", "A".repeat(loop_len)))
        };
        let e40 = model.hairpin(&make(40), 0, 41);
        let e30 = model.hairpin(&make(30), 0, 31);
        assert!(e40.is_finite());
        assert!(e40 > e30);
    }

    #[test]
    fn test_multibranch_unpaired_count() {
        let model = dna();
        let seq = NucleotideVec::from_lossy("GGCCCGGAAACCGGG");
        let closing = (0, 14);
        // branches (2, 6) and (8, 12): unpaired = 1 + 1 + 1 = 3
        let e = model.multibranch(&seq, closing, &[(2, 6), (8, 12)]);
        let (a, b, c, _) = (2.6, 0.2, 0.2, 2.0);
        assert!((e - (a + 2.0 * b + 3.0 * c)).abs() < 1e-6);
    }

    #[test]
    fn test_exterior_is_cheaper_than_closed() {
        let model = dna();
        let seq = NucleotideVec::from_lossy("GGCCCGGAAACCGGG");
        let open = model.exterior(&seq, &[(2, 6), (8, 12)]);
        let closed = model.multibranch(&seq, (0, 14), &[(2, 6), (8, 12)]);
        assert!(open < closed);
    }
}
