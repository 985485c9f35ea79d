use crate::model::{Operator, Statement};
use serde::{Deserialize, Serialize};

/// Conventional significance threshold, marked on histograms.
pub const ALPHA: f64 = 0.05;

pub const DEFAULT_BIN_COUNT: usize = 100;

/// Tolerance, in bin widths, for snapping values onto a bin edge.
const EDGE_EPSILON: f64 = 1e-9;

/// Distribution of parsed p-values over `[0, 1]` in equal-width bins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<usize>,
    /// Parsed values outside `[0, 1]`.
    pub out_of_range: usize,
    /// Statements with no parsed value.
    pub unparsed: usize,
    pub at_or_below_alpha: usize,
}

impl Histogram {
    pub fn from_statements<'a, I>(statements: I, bin_count: usize) -> Histogram
    where
        I: IntoIterator<Item = &'a Statement>,
    {
        let bin_count = bin_count.max(1);
        let mut hist = Histogram {
            bins: vec![0; bin_count],
            out_of_range: 0,
            unparsed: 0,
            at_or_below_alpha: 0,
        };

        for statement in statements {
            let Some(v) = statement.value else {
                hist.unparsed += 1;
                continue;
            };
            if !(0.0..=1.0).contains(&v) {
                hist.out_of_range += 1;
                continue;
            }
            if v <= ALPHA {
                hist.at_or_below_alpha += 1;
            }
            let i = hist.bin_index(v);
            hist.bins[i] += 1;
        }

        hist
    }

    pub fn bin_width(&self) -> f64 {
        1.0 / self.bins.len() as f64
    }

    /// Bin holding `v`; 1.0 falls in the last bin.
    ///
    /// A value on a bin edge belongs to the bin starting there, even when
    /// `v * n` lands a rounding step below the integer (0.29 * 100).
    pub fn bin_index(&self, v: f64) -> usize {
        let n = self.bins.len();
        let scaled = v * n as f64;
        let nearest = scaled.round();
        let position = if (scaled - nearest).abs() < EDGE_EPSILON {
            nearest
        } else {
            scaled
        };
        (position as usize).min(n - 1)
    }

    /// Lower and upper edge of bin `i`.
    pub fn bin_edges(&self, i: usize) -> (f64, f64) {
        let w = self.bin_width();
        (i as f64 * w, (i + 1) as f64 * w)
    }

    pub fn total_binned(&self) -> usize {
        self.bins.iter().sum()
    }
}

/// Statement counts per comparison operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub lt: usize,
    pub gt: usize,
    pub eq: usize,
}

impl Tally {
    pub fn from_statements<'a, I>(statements: I) -> Tally
    where
        I: IntoIterator<Item = &'a Statement>,
    {
        let mut tally = Tally::default();
        for statement in statements {
            match statement.operator {
                Operator::Lt => tally.lt += 1,
                Operator::Gt => tally.gt += 1,
                Operator::Eq => tally.eq += 1,
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.lt + self.gt + self.eq
    }
}
