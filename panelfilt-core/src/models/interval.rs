use std::fmt::{self, Display};

use crate::models::variant::VariantToken;

///
/// Half-open projection of a [VariantToken] onto the genome, in the
/// four-column line format the interval engine consumes.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VariantInterval {
    pub chrom: String,
    /// 0-based, inclusive.
    pub start: u32,
    /// 0-based, exclusive.
    pub end: u32,
    /// Original token text, carried so an intersect hit can be traced
    /// back to its report row.
    pub token: String,
}

impl VariantInterval {
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Get file string of the interval
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}\t{}", self.chrom, self.start, self.end, self.token)
    }
}

impl Display for VariantInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl VariantToken {
    /// Project this variant onto a half-open interval.
    ///
    /// A single-base reference covers exactly its anchor base. A
    /// multi-base reference (deletion or MNP) covers the full reference
    /// span plus one extra base, so that a region boundary sitting one
    /// base past the deleted span still registers as an overlap — the
    /// same hits an intersect of the full-length REF allele in a VCF
    /// record would produce.
    pub fn to_interval(&self) -> VariantInterval {
        let start = self.position - 1;
        let end = if self.reference.len() > 1 {
            start + self.reference.len() as u32 + 1
        } else {
            self.position
        };

        VariantInterval {
            chrom: self.chrom.clone(),
            start,
            end,
            token: self.to_string(),
        }
    }
}
