use ahash::AHashMap;

use crate::Base;
use crate::Mode;
use crate::PairType;
use crate::parameters::{self, ParamSet};

/// An enthalpy/entropy pair, ΔH in kcal/mol, ΔS in cal/(mol·K).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dhs {
    pub dh: f64,
    pub ds: f64,
}

impl Dhs {
    /// Free energy at `t` Kelvin.
    pub fn dg(&self, t: f64) -> f64 {
        self.dh - t * self.ds / 1000.0
    }
}

/// A dinucleotide step `XY/WZ`: top strand 5'→3', bottom strand 3'→5'.
pub type StepKey = [Base; 4];

fn reversed(key: StepKey) -> StepKey {
    // Reading the same duplex step from the other strand: XY/WZ == ZW/YX.
    [key[3], key[2], key[1], key[0]]
}

fn parse_step(key: &str) -> StepKey {
    let mut bases = key
        .chars()
        .filter(|&c| c != '/')
        .map(|c| Base::try_from(c).expect("parameter key alphabet"));
    let k = [(); 4].map(|_| bases.next().expect("four bases per step key"));
    assert!(bases.next().is_none(), "four bases per step key");
    k
}

fn step_map(rows: &[(&str, f64, f64)]) -> AHashMap<StepKey, Dhs> {
    rows.iter()
        .map(|&(key, dh, ds)| (parse_step(key), Dhs { dh, ds }))
        .collect()
}

/// Lookup tables for one parameter set, built once per model construction.
pub struct EnergyTables {
    pub wobble: bool,
    pub terminal_ru: f64,
    /// (a, b, c, d) multi-branch coefficients, see [`parameters::ParamSet`].
    pub multibranch: (f64, f64, f64, f64),
    nn: AHashMap<StepKey, Dhs>,
    terminal_mm: AHashMap<StepKey, Dhs>,
    internal_mm: AHashMap<StepKey, Dhs>,
    special_hairpins: AHashMap<Vec<Base>, Dhs>,
    hairpin_loops: [Dhs; 30],
    bulge_loops: [Dhs; 30],
    internal_loops: [Dhs; 30],
}

impl EnergyTables {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Dna => Self::from_params(&parameters::DNA),
            Mode::Rna => Self::from_params(&parameters::RNA),
        }
    }

    fn from_params(params: &ParamSet) -> Self {
        let special_hairpins = params
            .special_hairpins
            .iter()
            .map(|&(key, dh, ds)| {
                let seq: Vec<Base> = key
                    .chars()
                    .map(|c| Base::try_from(c).expect("parameter key alphabet"))
                    .collect();
                (seq, Dhs { dh, ds })
            })
            .collect();

        EnergyTables {
            wobble: params.wobble,
            terminal_ru: params.terminal_ru,
            multibranch: params.multibranch,
            nn: step_map(params.nn),
            terminal_mm: step_map(params.terminal_mm),
            internal_mm: step_map(params.internal_mm),
            special_hairpins,
            hairpin_loops: (*params.hairpin_loops).map(|(dh, ds)| Dhs { dh, ds }),
            bulge_loops: (*params.bulge_loops).map(|(dh, ds)| Dhs { dh, ds }),
            internal_loops: (*params.internal_loops).map(|(dh, ds)| Dhs { dh, ds }),
        }
    }

    pub fn can_pair(&self, b5: Base, b3: Base) -> bool {
        let pt = PairType::from((b5, b3));
        pt.is_wcf() || (self.wobble && pt.is_wobble())
    }

    fn step(map: &AHashMap<StepKey, Dhs>, key: StepKey) -> Option<Dhs> {
        map.get(&key).or_else(|| map.get(&reversed(key))).copied()
    }

    pub fn nn(&self, key: StepKey) -> Option<Dhs> {
        Self::step(&self.nn, key)
    }

    pub fn is_nn(&self, key: StepKey) -> bool {
        self.nn(key).is_some()
    }

    pub fn terminal_mm(&self, key: StepKey) -> Option<Dhs> {
        Self::step(&self.terminal_mm, key)
    }

    pub fn internal_mm(&self, key: StepKey) -> Option<Dhs> {
        Self::step(&self.internal_mm, key)
    }

    pub fn special_hairpin(&self, seq: &[Base]) -> Option<Dhs> {
        self.special_hairpins.get(seq).copied()
    }

    /// Hairpin loop initiation, loop length 1..=30.
    pub fn hairpin_loop(&self, len: usize) -> Dhs {
        self.hairpin_loops[len - 1]
    }

    /// Bulge loop initiation, loop length 1..=30.
    pub fn bulge_loop(&self, len: usize) -> Dhs {
        self.bulge_loops[len - 1]
    }

    /// Internal loop initiation, loop length 1..=30.
    pub fn internal_loop(&self, len: usize) -> Dhs {
        self.internal_loops[len - 1]
    }
}
