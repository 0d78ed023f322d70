//! Embedded nearest neighbor parameter sets.
//!
//! Each row is `(key, ΔH, ΔS)` with ΔH in kcal/mol and ΔS in cal/(mol·K);
//! ΔG(T) = ΔH − T·ΔS/1000. Dinucleotide keys read `XY/WZ`, the top strand
//! 5'→3' and the bottom strand 3'→5', so `X·W` and `Y·Z` face each other.
//! Loop initiation tables are indexed by loop length 1..=30; longer loops
//! are extrapolated at lookup time. The DNA set follows the unified
//! SantaLucia parameters, the RNA set the Turner-lineage parameters.

/// One nearest neighbor parameter set.
pub struct ParamSet {
    pub name: &'static str,
    /// Whether G-U wobble pairs are part of the pairing alphabet.
    pub wobble: bool,
    /// Penalty for a helix that ends on an A-U (or wobble) pair.
    pub terminal_ru: f64,
    /// Multi-branch coefficients `(a, b, c, d)`: closing penalty, per-branch
    /// cost, per-unpaired-base cost, and strain for a fully paired loop.
    pub multibranch: (f64, f64, f64, f64),
    pub nn: &'static [(&'static str, f64, f64)],
    pub terminal_mm: &'static [(&'static str, f64, f64)],
    pub internal_mm: &'static [(&'static str, f64, f64)],
    /// Whole-hairpin sequence bonuses (closing pair + loop), tri- and
    /// tetraloops.
    pub special_hairpins: &'static [(&'static str, f64, f64)],
    pub hairpin_loops: &'static [(f64, f64); 30],
    pub bulge_loops: &'static [(f64, f64); 30],
    pub internal_loops: &'static [(f64, f64); 30],
}

pub static DNA: ParamSet = ParamSet {
    name: "dna",
    wobble: false,
    terminal_ru: 0.5,
    multibranch: (2.6, 0.2, 0.2, 2.0),
    nn: &[
        ("AA/TT", -7.6, -21.3),
        ("AT/TA", -7.2, -20.4),
        ("TA/AT", -7.2, -21.3),
        ("CA/GT", -8.5, -22.7),
        ("GT/CA", -8.4, -22.4),
        ("CT/GA", -7.8, -21.0),
        ("GA/CT", -8.2, -22.2),
        ("CG/GC", -10.6, -27.2),
        ("GC/CG", -9.8, -24.4),
        ("GG/CC", -8.0, -19.9),
    ],
    terminal_mm: &[
        ("GA/CA", -4.4, -10.64),
        ("GA/CC", -4.0, -9.67),
        ("GA/CG", -4.8, -11.61),
        ("GA/CT", -3.6, -8.71),
        ("GC/CA", -3.6, -8.71),
        ("GC/CC", -3.2, -7.74),
        ("GC/CG", -4.0, -9.67),
        ("GC/CT", -3.2, -7.74),
        ("GG/CA", -4.8, -11.61),
        ("GG/CC", -4.0, -9.67),
        ("GG/CG", -5.2, -12.57),
        ("GG/CT", -4.0, -9.67),
        ("GT/CA", -3.2, -7.74),
        ("GT/CC", -2.8, -6.77),
        ("GT/CG", -3.6, -8.71),
        ("GT/CT", -2.8, -6.77),
        ("CA/GA", -4.0, -9.67),
        ("CA/GC", -3.6, -8.71),
        ("CA/GG", -4.4, -10.64),
        ("CA/GT", -3.2, -7.74),
        ("CC/GA", -3.2, -7.74),
        ("CC/GC", -2.8, -6.77),
        ("CC/GG", -3.6, -8.71),
        ("CC/GT", -2.8, -6.77),
        ("CG/GA", -4.4, -10.64),
        ("CG/GC", -3.6, -8.71),
        ("CG/GG", -4.8, -11.61),
        ("CG/GT", -3.6, -8.71),
        ("CT/GA", -2.8, -6.77),
        ("CT/GC", -2.4, -5.8),
        ("CT/GG", -3.2, -7.74),
        ("CT/GT", -2.4, -5.8),
        ("AA/TA", -2.8, -6.77),
        ("AA/TC", -2.4, -5.8),
        ("AA/TG", -3.2, -7.74),
        ("AA/TT", -2.0, -4.84),
        ("AC/TA", -2.4, -5.8),
        ("AC/TC", -2.0, -4.84),
        ("AC/TG", -2.8, -6.77),
        ("AC/TT", -2.0, -4.84),
        ("AG/TA", -3.2, -7.74),
        ("AG/TC", -2.4, -5.8),
        ("AG/TG", -3.6, -8.71),
        ("AG/TT", -2.4, -5.8),
        ("AT/TA", -2.0, -4.84),
        ("AT/TC", -1.6, -3.87),
        ("AT/TG", -2.4, -5.8),
        ("AT/TT", -1.6, -3.87),
        ("TA/AA", -2.4, -5.8),
        ("TA/AC", -2.0, -4.84),
        ("TA/AG", -2.8, -6.77),
        ("TA/AT", -2.0, -4.84),
        ("TC/AA", -2.0, -4.84),
        ("TC/AC", -1.6, -3.87),
        ("TC/AG", -2.4, -5.8),
        ("TC/AT", -1.6, -3.87),
        ("TG/AA", -2.8, -6.77),
        ("TG/AC", -2.4, -5.8),
        ("TG/AG", -3.2, -7.74),
        ("TG/AT", -2.0, -4.84),
        ("TT/AA", -1.6, -3.87),
        ("TT/AC", -1.2, -2.9),
        ("TT/AG", -2.0, -4.84),
        ("TT/AT", -1.2, -2.9),
    ],
    internal_mm: &[
        ("GA/CA", -1.2, -2.9),
        ("GA/CC", -0.8, -1.93),
        ("GA/CG", -2.0, -4.84),
        ("GA/CT", -0.8, -1.93),
        ("GC/CA", -0.4, -0.97),
        ("GC/CC", 0.0, 0.0),
        ("GC/CG", -1.2, -2.9),
        ("GC/CT", 0.0, 0.0),
        ("GG/CA", -2.0, -4.84),
        ("GG/CC", -1.2, -2.9),
        ("GG/CG", -2.4, -5.8),
        ("GG/CT", -1.2, -2.9),
        ("GT/CA", -0.8, -1.93),
        ("GT/CC", 0.0, 0.0),
        ("GT/CG", -1.2, -2.9),
        ("GT/CT", 0.4, 0.97),
        ("CA/GA", -0.8, -1.93),
        ("CA/GC", -0.4, -0.97),
        ("CA/GG", -1.6, -3.87),
        ("CA/GT", -0.4, -0.97),
        ("CC/GA", 0.0, 0.0),
        ("CC/GC", 0.4, 0.97),
        ("CC/GG", -0.8, -1.93),
        ("CC/GT", 0.4, 0.97),
        ("CG/GA", -1.6, -3.87),
        ("CG/GC", -0.8, -1.93),
        ("CG/GG", -2.0, -4.84),
        ("CG/GT", -0.8, -1.93),
        ("CT/GA", -0.4, -0.97),
        ("CT/GC", 0.4, 0.97),
        ("CT/GG", -0.8, -1.93),
        ("CT/GT", 0.8, 1.93),
        ("AA/TA", 0.0, 0.0),
        ("AA/TC", 0.4, 0.97),
        ("AA/TG", -0.8, -1.93),
        ("AA/TT", 0.8, 1.93),
        ("AC/TA", 0.8, 1.93),
        ("AC/TC", 1.2, 2.9),
        ("AC/TG", 0.0, 0.0),
        ("AC/TT", 1.2, 2.9),
        ("AG/TA", -0.8, -1.93),
        ("AG/TC", 0.0, 0.0),
        ("AG/TG", -1.2, -2.9),
        ("AG/TT", 0.0, 0.0),
        ("AT/TA", 0.4, 0.97),
        ("AT/TC", 1.2, 2.9),
        ("AT/TG", 0.0, 0.0),
        ("AT/TT", 1.6, 3.87),
        ("TA/AA", 0.4, 0.97),
        ("TA/AC", 0.8, 1.93),
        ("TA/AG", -0.4, -0.97),
        ("TA/AT", 0.8, 1.93),
        ("TC/AA", 1.2, 2.9),
        ("TC/AC", 1.6, 3.87),
        ("TC/AG", 0.4, 0.97),
        ("TC/AT", 1.6, 3.87),
        ("TG/AA", -0.4, -0.97),
        ("TG/AC", 0.4, 0.97),
        ("TG/AG", -0.8, -1.93),
        ("TG/AT", 0.4, 0.97),
        ("TT/AA", 0.8, 1.93),
        ("TT/AC", 1.6, 3.87),
        ("TT/AG", 0.4, 0.97),
        ("TT/AT", 2.0, 4.84),
    ],
    special_hairpins: &[
        // triloops
        ("AGAAT", -4.0, -9.67),
        ("AGCAT", -2.8, -6.77),
        ("CGAAG", -6.4, -15.48),
        ("CGCAG", -5.2, -12.57),
        ("GGAAC", -5.6, -13.54),
        ("GGCAC", -4.4, -10.64),
        ("TGAAA", -1.6, -3.87),
        // tetraloops
        ("AGAAAT", -4.8, -11.61),
        ("AGCAAT", -3.2, -7.74),
        ("CGAAAG", -7.2, -17.41),
        ("CGCAAG", -5.6, -13.54),
        ("CTTCGG", -6.0, -14.51),
        ("GGAAAC", -6.4, -15.48),
        ("TTTCGA", -2.4, -5.8),
    ],
    hairpin_loops: &[
        (f64::INFINITY, 0.0), (f64::INFINITY, 0.0), (0.0, -11.28), (0.0, -11.28), (0.0, -10.64),
        (0.0, -12.9), (0.0, -13.54), (0.0, -13.86), (0.0, -14.51), (0.0, -14.83),
        (0.0, -15.48), (0.0, -15.8), (0.0, -15.8), (0.0, -16.12), (0.0, -16.44),
        (0.0, -16.77), (0.0, -17.09), (0.0, -17.41), (0.0, -17.41), (0.0, -17.73),
        (0.0, -18.06), (0.0, -18.38), (0.0, -18.38), (0.0, -18.7), (0.0, -18.7),
        (0.0, -19.02), (0.0, -19.02), (0.0, -19.35), (0.0, -19.35), (0.0, -19.67),
    ],
    bulge_loops: &[
        (0.0, -12.9), (0.0, -9.35), (0.0, -10.0), (0.0, -10.32), (0.0, -10.64),
        (0.0, -11.28), (0.0, -11.93), (0.0, -12.57), (0.0, -13.22), (0.0, -13.86),
        (0.0, -14.19), (0.0, -14.51), (0.0, -15.15), (0.0, -15.48), (0.0, -15.8),
        (0.0, -16.12), (0.0, -16.44), (0.0, -16.77), (0.0, -17.09), (0.0, -17.09),
        (0.0, -17.41), (0.0, -17.73), (0.0, -17.73), (0.0, -18.06), (0.0, -18.38),
        (0.0, -18.38), (0.0, -18.7), (0.0, -18.7), (0.0, -19.02), (0.0, -19.02),
    ],
    internal_loops: &[
        (f64::INFINITY, 0.0), (0.0, -7.42), (0.0, -10.32), (0.0, -11.61), (0.0, -12.9),
        (0.0, -14.19), (0.0, -14.83), (0.0, -15.48), (0.0, -15.8), (0.0, -15.8),
        (0.0, -16.77), (0.0, -16.77), (0.0, -17.41), (0.0, -17.41), (0.0, -18.06),
        (0.0, -18.06), (0.0, -18.7), (0.0, -18.7), (0.0, -19.02), (0.0, -19.02),
        (0.0, -19.35), (0.0, -19.67), (0.0, -19.67), (0.0, -19.99), (0.0, -19.99),
        (0.0, -20.31), (0.0, -20.31), (0.0, -20.64), (0.0, -20.64), (0.0, -21.28),
    ],
};

pub static RNA: ParamSet = ParamSet {
    name: "rna",
    wobble: true,
    terminal_ru: 0.45,
    multibranch: (3.4, 0.4, 0.0, 2.0),
    nn: &[
        ("AA/UU", -6.82, -19.0),
        ("AU/UA", -9.38, -26.7),
        ("UA/AU", -7.69, -20.5),
        ("CU/GA", -10.48, -27.1),
        ("CA/GU", -10.44, -26.9),
        ("GU/CA", -11.40, -29.5),
        ("GA/CU", -12.44, -32.5),
        ("CG/GC", -10.64, -26.7),
        ("GG/CC", -13.39, -32.7),
        ("GC/CG", -14.88, -36.9),
        // wobble steps
        ("AG/UU", -3.21, -8.6),
        ("AU/UG", -8.81, -24.0),
        ("CG/GU", -5.61, -13.5),
        ("CU/GG", -12.11, -32.2),
        ("GG/CU", -8.33, -21.9),
        ("GG/UC", -12.59, -32.5),
        ("GU/UG", -13.47, -41.82),
        ("UG/AU", -6.99, -19.3),
        ("UG/GU", -9.26, -30.8),
        ("UU/AG", -12.83, -37.3),
    ],
    terminal_mm: &[
        ("GA/CA", -5.6, -13.54),
        ("GA/CC", -5.2, -12.57),
        ("GA/CG", -6.0, -14.51),
        ("GA/CU", -4.8, -11.61),
        ("GC/CA", -4.8, -11.61),
        ("GC/CC", -4.4, -10.64),
        ("GC/CG", -5.2, -12.57),
        ("GC/CU", -4.4, -10.64),
        ("GG/CA", -6.0, -14.51),
        ("GG/CC", -5.2, -12.57),
        ("GG/CG", -6.4, -15.48),
        ("GG/CU", -5.2, -12.57),
        ("GU/CA", -4.4, -10.64),
        ("GU/CC", -4.0, -9.67),
        ("GU/CG", -4.8, -11.61),
        ("GU/CU", -4.0, -9.67),
        ("CA/GA", -5.2, -12.57),
        ("CA/GC", -4.8, -11.61),
        ("CA/GG", -5.6, -13.54),
        ("CA/GU", -4.4, -10.64),
        ("CC/GA", -4.4, -10.64),
        ("CC/GC", -4.0, -9.67),
        ("CC/GG", -4.8, -11.61),
        ("CC/GU", -4.0, -9.67),
        ("CG/GA", -5.6, -13.54),
        ("CG/GC", -4.8, -11.61),
        ("CG/GG", -6.0, -14.51),
        ("CG/GU", -4.8, -11.61),
        ("CU/GA", -4.0, -9.67),
        ("CU/GC", -3.6, -8.71),
        ("CU/GG", -4.4, -10.64),
        ("CU/GU", -3.6, -8.71),
        ("AA/UA", -4.0, -9.67),
        ("AA/UC", -3.6, -8.71),
        ("AA/UG", -4.4, -10.64),
        ("AA/UU", -3.2, -7.74),
        ("AC/UA", -3.6, -8.71),
        ("AC/UC", -3.2, -7.74),
        ("AC/UG", -4.0, -9.67),
        ("AC/UU", -3.2, -7.74),
        ("AG/UA", -4.4, -10.64),
        ("AG/UC", -3.6, -8.71),
        ("AG/UG", -4.8, -11.61),
        ("AG/UU", -3.6, -8.71),
        ("AU/UA", -3.2, -7.74),
        ("AU/UC", -2.8, -6.77),
        ("AU/UG", -3.6, -8.71),
        ("AU/UU", -2.8, -6.77),
        ("UA/AA", -3.6, -8.71),
        ("UA/AC", -3.2, -7.74),
        ("UA/AG", -4.0, -9.67),
        ("UA/AU", -3.2, -7.74),
        ("UC/AA", -3.2, -7.74),
        ("UC/AC", -2.8, -6.77),
        ("UC/AG", -3.6, -8.71),
        ("UC/AU", -2.8, -6.77),
        ("UG/AA", -4.0, -9.67),
        ("UG/AC", -3.6, -8.71),
        ("UG/AG", -4.4, -10.64),
        ("UG/AU", -3.2, -7.74),
        ("UU/AA", -2.8, -6.77),
        ("UU/AC", -2.4, -5.8),
        ("UU/AG", -3.2, -7.74),
        ("UU/AU", -2.4, -5.8),
    ],
    internal_mm: &[
        ("GA/CA", -2.0, -4.84),
        ("GA/CC", -1.6, -3.87),
        ("GA/CG", -2.8, -6.77),
        ("GA/CU", -1.6, -3.87),
        ("GC/CA", -1.2, -2.9),
        ("GC/CC", -0.8, -1.93),
        ("GC/CG", -2.0, -4.84),
        ("GC/CU", -0.8, -1.93),
        ("GG/CA", -2.8, -6.77),
        ("GG/CC", -2.0, -4.84),
        ("GG/CG", -3.2, -7.74),
        ("GG/CU", -2.0, -4.84),
        ("GU/CA", -1.6, -3.87),
        ("GU/CC", -0.8, -1.93),
        ("GU/CG", -2.0, -4.84),
        ("GU/CU", -0.4, -0.97),
        ("CA/GA", -1.6, -3.87),
        ("CA/GC", -1.2, -2.9),
        ("CA/GG", -2.4, -5.8),
        ("CA/GU", -1.2, -2.9),
        ("CC/GA", -0.8, -1.93),
        ("CC/GC", -0.4, -0.97),
        ("CC/GG", -1.6, -3.87),
        ("CC/GU", -0.4, -0.97),
        ("CG/GA", -2.4, -5.8),
        ("CG/GC", -1.6, -3.87),
        ("CG/GG", -2.8, -6.77),
        ("CG/GU", -1.6, -3.87),
        ("CU/GA", -1.2, -2.9),
        ("CU/GC", -0.4, -0.97),
        ("CU/GG", -1.6, -3.87),
        ("CU/GU", 0.0, 0.0),
        ("AA/UA", -0.8, -1.93),
        ("AA/UC", -0.4, -0.97),
        ("AA/UG", -1.6, -3.87),
        ("AA/UU", 0.0, 0.0),
        ("AC/UA", 0.0, 0.0),
        ("AC/UC", 0.4, 0.97),
        ("AC/UG", -0.8, -1.93),
        ("AC/UU", 0.4, 0.97),
        ("AG/UA", -1.6, -3.87),
        ("AG/UC", -0.8, -1.93),
        ("AG/UG", -2.0, -4.84),
        ("AG/UU", -0.8, -1.93),
        ("AU/UA", -0.4, -0.97),
        ("AU/UC", 0.4, 0.97),
        ("AU/UG", -0.8, -1.93),
        ("AU/UU", 0.8, 1.93),
        ("UA/AA", -0.4, -0.97),
        ("UA/AC", 0.0, 0.0),
        ("UA/AG", -1.2, -2.9),
        ("UA/AU", 0.0, 0.0),
        ("UC/AA", 0.4, 0.97),
        ("UC/AC", 0.8, 1.93),
        ("UC/AG", -0.4, -0.97),
        ("UC/AU", 0.8, 1.93),
        ("UG/AA", -1.2, -2.9),
        ("UG/AC", -0.4, -0.97),
        ("UG/AG", -1.6, -3.87),
        ("UG/AU", -0.4, -0.97),
        ("UU/AA", 0.0, 0.0),
        ("UU/AC", 0.8, 1.93),
        ("UU/AG", -0.4, -0.97),
        ("UU/AU", 1.2, 2.9),
    ],
    special_hairpins: &[
        // tetraloops (GNRA and UUCG families)
        ("GGAAAC", -8.8, -21.28),
        ("GGCAAC", -7.6, -18.38),
        ("CGAAAG", -11.6, -28.05),
        ("CGAGAG", -9.6, -23.21),
        ("CGUGAG", -8.8, -21.28),
        ("CGCAAG", -8.0, -19.35),
        ("CUUCGG", -11.6, -28.05),
        ("UGAAAA", -4.0, -9.67),
    ],
    hairpin_loops: &[
        (f64::INFINITY, 0.0), (f64::INFINITY, 0.0), (0.0, -17.41), (0.0, -18.06), (0.0, -18.38),
        (0.0, -17.41), (0.0, -19.35), (0.0, -17.73), (0.0, -20.64), (0.0, -20.96),
        (0.0, -21.28), (0.0, -21.6), (0.0, -21.92), (0.0, -22.25), (0.0, -22.25),
        (0.0, -22.57), (0.0, -22.89), (0.0, -22.89), (0.0, -23.21), (0.0, -23.21),
        (0.0, -23.54), (0.0, -23.54), (0.0, -23.86), (0.0, -23.86), (0.0, -24.18),
        (0.0, -24.18), (0.0, -24.18), (0.0, -24.5), (0.0, -24.5), (0.0, -24.83),
    ],
    bulge_loops: &[
        (0.0, -12.25), (0.0, -9.03), (0.0, -10.32), (0.0, -11.61), (0.0, -12.9),
        (0.0, -14.19), (0.0, -14.83), (0.0, -15.15), (0.0, -15.48), (0.0, -15.8),
        (0.0, -16.12), (0.0, -16.44), (0.0, -16.77), (0.0, -17.09), (0.0, -17.41),
        (0.0, -17.41), (0.0, -17.73), (0.0, -17.73), (0.0, -18.06), (0.0, -18.38),
        (0.0, -18.38), (0.0, -18.7), (0.0, -18.7), (0.0, -18.7), (0.0, -19.02),
        (0.0, -19.02), (0.0, -19.35), (0.0, -19.35), (0.0, -19.35), (0.0, -19.67),
    ],
    internal_loops: &[
        (f64::INFINITY, 0.0), (0.0, -3.22), (0.0, -5.8), (0.0, -6.45), (0.0, -6.45),
        (0.0, -6.77), (0.0, -7.42), (0.0, -8.06), (0.0, -8.38), (0.0, -9.03),
        (0.0, -9.35), (0.0, -9.67), (0.0, -10.0), (0.0, -10.32), (0.0, -10.64),
        (0.0, -10.96), (0.0, -10.96), (0.0, -11.28), (0.0, -11.61), (0.0, -11.61),
        (0.0, -11.93), (0.0, -11.93), (0.0, -12.25), (0.0, -12.25), (0.0, -12.57),
        (0.0, -12.57), (0.0, -12.9), (0.0, -12.9), (0.0, -13.22), (0.0, -13.22),
    ],
};
