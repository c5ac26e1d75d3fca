use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::VariantTokenError;

///
/// A single variant as written in a report, e.g. `12:109915190C>T`.
///
/// The token is the join key between the report and the intersect
/// output, so parsing preserves every byte: formatting a parsed token
/// reproduces the input exactly.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct VariantToken {
    pub chrom: String,
    /// 1-based position as written in the token.
    pub position: u32,
    pub reference: String,
    pub alternate: String,
}

fn check_allele(
    bases: &str,
    allele: &'static str,
    token: &str,
) -> Result<(), VariantTokenError> {
    if bases.is_empty() {
        return Err(VariantTokenError::EmptyAllele {
            allele,
            token: token.to_string(),
        });
    }
    if !bases
        .chars()
        .all(|c| matches!(c.to_ascii_uppercase(), 'A' | 'C' | 'G' | 'T'))
    {
        return Err(VariantTokenError::InvalidAllele {
            allele,
            token: token.to_string(),
        });
    }
    Ok(())
}

impl FromStr for VariantToken {
    type Err = VariantTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chrom, rest) = s
            .split_once(':')
            .ok_or_else(|| VariantTokenError::MissingPositionDelimiter(s.to_string()))?;

        let (left, alternate) = rest
            .split_once('>')
            .ok_or_else(|| VariantTokenError::MissingAlleleDelimiter(s.to_string()))?;

        let digits_end = left
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(left.len());
        let (digits, reference) = left.split_at(digits_end);

        if digits.is_empty() {
            return Err(VariantTokenError::MissingPosition(s.to_string()));
        }

        // A leading zero would break round-trip identity with the
        // formatted token, and a position of 0 is not a 1-based
        // coordinate.
        if digits.starts_with('0') {
            return Err(VariantTokenError::InvalidPosition(s.to_string()));
        }
        let position: u32 = digits
            .parse()
            .map_err(|_| VariantTokenError::InvalidPosition(s.to_string()))?;

        check_allele(reference, "reference", s)?;
        check_allele(alternate, "alternate", s)?;

        Ok(VariantToken {
            chrom: chrom.to_string(),
            position,
            reference: reference.to_string(),
            alternate: alternate.to_string(),
        })
    }
}

impl Display for VariantToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}{}>{}",
            self.chrom, self.position, self.reference, self.alternate
        )
    }
}
