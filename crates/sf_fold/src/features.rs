use std::fmt;

use colored::*;
use serde::Serialize;

use sf_structure::NAIDX;

/// What a resolved pair contributes structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum FeatureKind {
    Hairpin,
    Stack,
    /// Helix continuation next to a dangling sequence end.
    StackDangling,
    /// Interior loop of one unpaired base per strand, really a 1bp mismatch.
    StackMismatch,
    /// Unpaired insertion on one strand, by length.
    Bulge(usize),
    /// Unpaired insertions on both strands, by (left, right) length.
    Interior(usize, usize),
    Multibranch,
    /// Open-ending multi-branch: top-level arms with both sequence ends
    /// unpaired.
    Exterior,
    /// A pair without stacking support, kept only under penalty.
    LonePair,
}

impl FeatureKind {
    pub fn is_stack(&self) -> bool {
        matches!(self, FeatureKind::Stack | FeatureKind::StackDangling | FeatureKind::StackMismatch)
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKind::Hairpin => write!(f, "HAIRPIN"),
            FeatureKind::Stack => write!(f, "STACK"),
            FeatureKind::StackDangling => write!(f, "STACK_DE"),
            FeatureKind::StackMismatch => write!(f, "STACK_MM"),
            FeatureKind::Bulge(len) => write!(f, "BULGE:{}", len),
            FeatureKind::Interior(l, r) => write!(f, "INTERIOR:{}/{}", l, r),
            FeatureKind::Multibranch => write!(f, "MULTIBRANCH"),
            FeatureKind::Exterior => write!(f, "EXTERIOR"),
            FeatureKind::LonePair => write!(f, "LONE_PAIR"),
        }
    }
}

/// One structural feature of a fold result. `energy` is the feature's
/// marginal free energy contribution in kcal/mol; `pairs` holds the single
/// base pair the feature accounts for, or the branch list for an
/// [`FeatureKind::Exterior`] placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub energy: f64,
    pub kind: FeatureKind,
    pub pairs: Vec<(NAIDX, NAIDX)>,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>7.2}  {:<14} {}",
            self.energy,
            self.kind.to_string().cyan(),
            self.pairs.iter()
                .map(|(i, j)| format!("[{:>3}, {:>3}]", i, j))
                .collect::<Vec<_>>()
                .join(", "))
    }
}
