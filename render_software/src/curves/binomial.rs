use once_cell::sync::{Lazy};

///
/// The highest degree of curve that the path interpreter generates (cubic bezier curves)
///
pub const MAX_CURVE_DEGREE: usize = 3;

///
/// Table of binomial coefficients for the curve degrees used when rasterizing
///
static CURVE_BINOMIALS: Lazy<BinomialTable> = Lazy::new(|| BinomialTable::new(MAX_CURVE_DEGREE));

///
/// Precalculated rows of Pascal's triangle
///
/// Row `n` holds the coefficients `C(n, 0)` to `C(n, n)`, which are the weights of the Bernstein polynomials
/// for a bezier curve of degree `n`.
///
#[derive(Clone, Debug, PartialEq)]
pub struct BinomialTable {
    rows: Vec<Vec<u64>>,
}

impl BinomialTable {
    ///
    /// Creates a table containing the coefficients up to and including a particular degree
    ///
    pub fn new(max_degree: usize) -> BinomialTable {
        let mut rows: Vec<Vec<u64>> = Vec::with_capacity(max_degree + 1);
        rows.push(vec![1]);

        for n in 1..=max_degree {
            // Every row starts and ends with 1, and the rest of the values are the sum of the two values above
            let previous    = &rows[n-1];
            let mut row     = Vec::with_capacity(n+1);

            row.push(1);
            row.extend(previous.windows(2).map(|pair| pair[0] + pair[1]));
            row.push(1);

            rows.push(row);
        }

        BinomialTable { rows }
    }

    ///
    /// The shared table used for rasterizing curves (covers lines, quadratic and cubic curves)
    ///
    #[inline]
    pub fn for_curves() -> &'static BinomialTable {
        &*CURVE_BINOMIALS
    }

    ///
    /// The highest degree stored in this table
    ///
    #[inline]
    pub fn max_degree(&self) -> usize {
        self.rows.len() - 1
    }

    ///
    /// The coefficients for a particular degree, if they're in this table
    ///
    #[inline]
    pub fn row(&self, n: usize) -> Option<&[u64]> {
        self.rows.get(n).map(|row| row.as_slice())
    }

    ///
    /// Returns `C(n, k)`, the number of ways of choosing `k` items from `n`
    ///
    /// This is 0 when `k` is negative or greater than `n`. Coefficients for degrees beyond the end of the table are
    /// calculated when they are requested.
    ///
    pub fn coefficient(&self, n: usize, k: isize) -> u64 {
        if k < 0 || (k as usize) > n {
            return 0;
        }

        let k = k as usize;

        match self.rows.get(n) {
            Some(row)   => row[k],
            None        => {
                // C(n, k) = C(n, k-1) * (n-k+1) / k, which is always a whole number at every step
                let k = k.min(n-k) as u64;
                let n = n as u64;

                (1..=k).fold(1u64, |coefficient, i| coefficient * (n - k + i) / i)
            }
        }
    }
}
