use std::ops::{Deref, DerefMut};
use std::convert::TryFrom;

use crate::NAIDX;
use crate::StructureError;
use crate::{DotBracket, DotBracketVec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(pub Vec<Option<NAIDX>>);

impl PairTable {
    /// Build a table from an explicit pair list. Rejects out-of-range
    /// indices, self-pairing, and positions claimed twice.
    pub fn from_pairs(
        len: usize,
        pairs: &[(NAIDX, NAIDX)],
    ) -> Result<Self, StructureError> {
        let mut table = vec![None; len];
        for &(i, j) in pairs {
            let (ui, uj) = (i as usize, j as usize);
            if ui >= len || uj >= len || ui == uj {
                return Err(StructureError::InvalidToken(
                    format!("pair ({}, {})", i, j),
                    "pair list".into(),
                    ui,
                ));
            }
            if table[ui].is_some() {
                return Err(StructureError::ConflictingPair(ui));
            }
            if table[uj].is_some() {
                return Err(StructureError::ConflictingPair(uj));
            }
            table[ui] = Some(j);
            table[uj] = Some(i);
        }
        Ok(PairTable(table))
    }

    /// Check if the substructure from `i..j` is well-formed:
    /// - All pairings are internal to the interval
    pub fn is_well_formed(&self, i: usize, j: usize) -> bool {
        assert!(j <= self.len(), "Invalid interval: j must be <= length");

        for k in i..j {
            if let Some(l) = self[k] {
                let l = l as usize;
                if l < i || l >= j {
                    return false; // points outside
                }
            }
        }
        true
    }
}

impl Deref for PairTable {
    type Target = [Option<NAIDX>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PairTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut stack = Vec::new();
        let mut table = vec![None; s.chars().count()];

        for (i, c) in s.chars().enumerate() {
            match c {
                '(' => stack.push(i),
                ')' => {
                    let j = stack.pop().ok_or(StructureError::UnmatchedClose(i))?;
                    table[i] = Some(j as NAIDX);
                    table[j] = Some(i as NAIDX);
                }
                '.' => (),
                _ => {
                    return Err(StructureError::InvalidToken(
                        format!("character '{}'", c),
                        "structure".to_string(),
                        i,
                    ));
                }
            }
        }

        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }
        Ok(PairTable(table))
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    fn try_from(db: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stack: Vec<usize> = Vec::new();
        let mut table = vec![None; db.len()];

        for (i, dot) in db.iter().enumerate() {
            match dot {
                DotBracket::Open => stack.push(i),
                DotBracket::Close => {
                    let j = stack.pop().ok_or(StructureError::UnmatchedClose(i))?;
                    table[i] = Some(j as NAIDX);
                    table[j] = Some(i as NAIDX);
                }
                DotBracket::Unpaired => {}
            }
        }

        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }

        Ok(PairTable(table))
    }
}
