use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

use log::warn;
use colored::*;


#[derive(Debug)]
pub enum SequenceError {
    Plain(String),
    InvalidChar(char),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Plain(s) => {
                write!(f, "ERROR: {}", s)
            }
            SequenceError::InvalidChar(c) => {
                write!(f, "Unsupported nucleotide: '{}'", c)
            }
        }
    }
}

impl std::error::Error for SequenceError {}


/// The nucleotide alphabet. DNA thymine is folded into `U` on input, so one
/// alphabet serves both parameter sets; `N` never pairs.
#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, U, N }
pub const BCOUNT: usize = 5; // 5 Base variants for tables.

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' | 'T' => Ok(Base::U),
            'N' => Ok(Base::N),
            _ => Err(SequenceError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
            Base::N => 'N',
        };
        write!(f, "{}", c)
    }
}


#[derive(Clone, Hash, Debug, Eq, PartialEq)]
pub struct NucleotideVec(pub Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Base]> for NucleotideVec {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for c in s.chars() {
            vec.push(Base::try_from(c)?);
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

impl NucleotideVec {
    pub fn from_lossy(s: &str) -> Self {
        let vec = s.chars().map(|c| {
            Base::try_from(c).unwrap_or_else(|e| {
                warn!("{} {} -> converted to 'N'", "WARNING:".red(), e);
                Base::N
            })
        }).collect();
        NucleotideVec(vec)
    }
}

const PAIR_LOOKUP: [[PairType; BCOUNT]; BCOUNT] = {
    use Base::*;
    use PairType::*;
    let mut table = [[NN; BCOUNT]; BCOUNT];
    table[A as usize][U as usize] = AU;
    table[U as usize][A as usize] = UA;
    table[C as usize][G as usize] = CG;
    table[G as usize][C as usize] = GC;
    table[G as usize][U as usize] = GU;
    table[U as usize][G as usize] = UG;
    table
};

/// The base pairing motifs. `AU`/`UA` double as A-T/T-A under the DNA
/// parameter set; `NN` marks an impossible pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairType { AU, UA, CG, GC, GU, UG, NN }
pub const PCOUNT: usize = 7; // 7 Pair variants for tables.

impl From<(Base, Base)> for PairType {
    fn from(pair: (Base, Base)) -> Self {
        PAIR_LOOKUP[pair.0 as usize][pair.1 as usize]
    }
}

impl fmt::Display for PairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PairType::AU => "A-U",
            PairType::UA => "U-A",
            PairType::CG => "C-G",
            PairType::GC => "G-C",
            PairType::GU => "G-U",
            PairType::UG => "U-G",
            PairType::NN => "N-N",
        };
        write!(f, "{}", s)
    }
}

impl PairType {
    pub fn is_ru(&self) -> bool {
       matches!(self
            , PairType::GU | PairType::UG
            | PairType::AU | PairType::UA)
    }

    pub fn is_wcf(&self) -> bool {
       matches!(self
            , PairType::GC | PairType::CG
            | PairType::AU | PairType::UA)
    }

    pub fn is_wobble(&self) -> bool {
       matches!(self, PairType::GU | PairType::UG)
    }

    pub fn invert(&self) -> PairType {
        use PairType::*;
        match self {
            AU => UA,
            UA => AU,
            CG => GC,
            GC => CG,
            GU => UG,
            UG => GU,
            NN => NN,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use Base::*;

    #[test]
    fn test_base_from_char() {
        assert_eq!(Base::try_from('a').unwrap(), A);
        assert_eq!(Base::try_from('T').unwrap(), U);
        assert_eq!(Base::try_from('u').unwrap(), U);
        assert!(Base::try_from('x').is_err());
    }

    #[test]
    fn test_nucleotide_vec_display() {
        let seq = NucleotideVec::try_from("GATTACA").unwrap();
        assert_eq!(seq.to_string(), "GAUUACA");
        assert_eq!(seq.len(), 7);
    }

    #[test]
    fn test_nucleotide_vec_lossy() {
        let seq = NucleotideVec::from_lossy("GAXCA");
        assert_eq!(seq[2], N);
    }

    #[test]
    fn test_pair_type_lookup() {
        assert_eq!(PairType::from((G, C)), PairType::GC);
        assert_eq!(PairType::from((U, G)), PairType::UG);
        assert_eq!(PairType::from((A, A)), PairType::NN);
        assert_eq!(PairType::from((N, U)), PairType::NN);
    }

    #[test]
    fn test_pair_type_classes() {
        assert!(PairType::AU.is_wcf());
        assert!(PairType::AU.is_ru());
        assert!(!PairType::GU.is_wcf());
        assert!(PairType::GU.is_wobble());
        assert_eq!(PairType::CG.invert(), PairType::GC);
    }
}
