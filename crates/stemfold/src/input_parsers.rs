use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, Result};
use paste::paste;
use sf_energy::NucleotideVec;

// ============================================================
//  Generic FASTA-like parser supporting lenient/strict modes
// ============================================================

#[derive(Clone, Copy)]
enum FastaMode {
    Lenient,
    Strict,
}

/// Core parsing logic shared by all adapters. Reads an optional '>' header
/// and the first sequence line; in lenient mode unknown letters become 'N',
/// in strict mode they are an error.
fn parse_fasta_like<R: BufRead>(
    reader: R,
    mode: FastaMode,
) -> Result<(Option<String>, NucleotideVec)> {
    let mut header: Option<String> = None;
    let mut sequence: Option<NucleotideVec> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            header = Some(line.to_string());
        } else {
            let token = line.split_whitespace().next().unwrap();
            sequence = Some(match mode {
                FastaMode::Lenient => NucleotideVec::from_lossy(token),
                FastaMode::Strict => NucleotideVec::try_from(token)?,
            });
            break;
        }
    }

    let sequence = sequence.ok_or_else(|| anyhow!("Missing sequence line"))?;

    Ok((header, sequence))
}

// ============================================================
//  Base parser functions (lenient and strict variants)
// ============================================================

pub fn read_fasta_like<R: BufRead>(reader: R) -> Result<(Option<String>, NucleotideVec)> {
    parse_fasta_like(reader, FastaMode::Lenient)
}

pub fn read_fold<R: BufRead>(reader: R) -> Result<(Option<String>, NucleotideVec)> {
    parse_fasta_like(reader, FastaMode::Strict)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
///
/// Example:
/// ```ignore
/// define_input_variants!(read_fasta_like, Result<(Option<String>, NucleotideVec)>);
/// ```
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

// ============================================================
//  Apply macro to generate adapters for both variants
// ============================================================

type FastaResult = Result<(Option<String>, NucleotideVec)>;

define_input_variants!(read_fasta_like, FastaResult);
define_input_variants!(read_fold, FastaResult);

// ============================================================
//  Example helper: ruler()
// ============================================================

pub fn ruler(len: usize) -> String {
    let mut s = String::new();
    let mut skip = 0;
    for i in 0..=len {
        if i % 10 == 0 {
            let tick = (i / 10).to_string();
            skip = tick.len() - 1;
            s.push_str(&tick);
        } else if skip > 0 {
            skip -= 1;
        } else if i % 10 == 5 {
            s.push(',');
        } else {
            s.push('.');
        }
    }
    s
}

// ============================================================
//  Unit tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruler() {
        assert_eq!(ruler(0), "0");
        assert_eq!(ruler(5), "0....,");
        assert_eq!(ruler(10), "0....,....1");
    }

    #[test]
    fn test_read_fasta_like_basic() {
        let input = ">test\nACGU\n";
        let (hdr, seq) = read_fasta_like_string(input).unwrap();
        assert_eq!(hdr, Some(">test".into()));
        assert_eq!(seq.to_string(), "ACGU");
    }

    #[test]
    fn test_read_fasta_like_no_header() {
        let (hdr, seq) = read_fasta_like_string("GATTACA\n").unwrap();
        assert_eq!(hdr, None);
        assert_eq!(seq.to_string(), "GAUUACA");
    }

    #[test]
    fn test_read_fold_strict_mode() {
        let ok = read_fold_string(">test\nACGU\n");
        assert!(ok.is_ok());

        let bad = read_fold_string(">test\nACXU\n");
        assert!(bad.is_err(), "Unknown nucleotide should fail in strict mode");
        // the lenient parser converts it to 'N' instead
        let (_, seq) = read_fasta_like_string(">test\nACXU\n").unwrap();
        assert_eq!(seq.to_string(), "ACNU");
    }

    #[test]
    fn test_missing_sequence_line() {
        assert!(read_fold_string(">test\n").is_err());
        assert!(read_fold_string("").is_err());
    }
}
