use super::Segment;
use crate::prelude::*;
use log::debug;

impl Segment {
    /// Redistribute the segment onto `n` points by linear interpolation of the
    /// coordinate over the normalised point index. Both ends are kept exactly.
    ///
    /// ```
    /// use vicar::Segment;
    ///
    /// let seg = Segment::from(vec![0.0, 1.0, 3.0]);
    /// let fine = seg.resample(5);
    /// assert_eq!(fine.grid().to_vec(), vec![0.0, 0.5, 1.0, 2.0, 3.0]);
    /// ```
    pub fn resample(&self, n: usize) -> Segment {
        let npoint = self.npoint();
        if npoint < 2 || n < 2 {
            let grid: Vec<f64> = self.grid().iter().take(n).copied().collect();
            return Segment::from(grid);
        }

        let x = self.grid();
        let last = (npoint - 1) as f64;

        let grid = Array1::from_shape_fn(n, |k| {
            if k == n - 1 {
                return x[npoint - 1];
            }
            let position = k as f64 / (n - 1) as f64 * last;
            let i = (position.floor() as usize).min(npoint - 2);
            let t = position - i as f64;
            x[i] + t * (x[i + 1] - x[i])
        });

        Segment::new(grid)
    }

    /// Resample to the smallest point count `n >= npoint` whose cell count `n - 1` is a
    /// product of `factors` only. Solvers with FFT or multigrid stages run best on such
    /// sizes. Factors below 2 are ignored; without any usable factor the segment is
    /// returned unchanged.
    ///
    /// ```
    /// use vicar::Segment;
    ///
    /// let seg = Segment::uniform_n(0.0, 1.0, 13);
    /// let resampled = seg.resample_prime_comb(&[2, 3]);
    /// // 14 points are 13 cells, the next 2-3 smooth count is 16 cells
    /// assert_eq!(resampled.npoint(), 17);
    /// ```
    pub fn resample_prime_comb(&self, factors: &[usize]) -> Segment {
        let factors: Vec<usize> = factors.iter().copied().filter(|f| *f >= 2).collect();
        if factors.is_empty() || self.npoint() < 2 {
            return self.clone();
        }

        let mut cells = self.npoint() - 1;
        while !divides_out(cells, &factors) {
            cells += 1;
        }

        debug!(
            "resampling {} points to {} = {} cells",
            self.npoint(),
            cells + 1,
            prime_comb_str(&prime_factors(cells))
        );

        self.resample(cells + 1)
    }
}

fn divides_out(mut n: usize, factors: &[usize]) -> bool {
    for factor in factors {
        while n % factor == 0 {
            n /= factor;
        }
    }
    n == 1
}

/// Prime factorisation of `n` as ascending `(prime, power)` pairs, empty below 2.
///
/// ```
/// assert_eq!(vicar::grid::prime_factors(72), vec![(2, 3), (3, 2)]);
/// assert_eq!(vicar::grid::prime_factors(13), vec![(13, 1)]);
/// ```
pub fn prime_factors(mut n: usize) -> Vec<(usize, u32)> {
    let mut factors = Vec::new();
    let mut p = 2;

    while p * p <= n {
        let mut power = 0;
        while n % p == 0 {
            n /= p;
            power += 1;
        }
        if power > 0 {
            factors.push((p, power));
        }
        p += 1;
    }

    if n > 1 {
        factors.push((n, 1));
    }

    factors
}

/// `2^3 * 3^2`
pub fn prime_comb_str(factors: &[(usize, u32)]) -> String {
    factors
        .iter()
        .map(|(prime, power)| format!("{prime}^{power}"))
        .collect::<Vec<_>>()
        .join(" * ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn resample_keeps_ends() {
        let seg = Segment::from(vec![0.0, 0.1, 0.3, 0.7, 1.5]);
        for n in [2, 3, 7, 20] {
            let resampled = seg.resample(n);
            assert_eq!(resampled.npoint(), n);
            assert_eq!(resampled.start(), 0.0);
            assert_eq!(resampled.end(), 1.5);
            assert!(resampled.is_strictly_increasing());
        }
    }

    #[test]
    fn resample_same_count_is_identity() {
        let seg = Segment::from(vec![0.0, 0.1, 0.3, 0.7, 1.5]);
        let resampled = seg.resample(5);
        for (a, b) in resampled.grid().iter().zip(seg.grid()) {
            assert_relative_eq!(a, b, epsilon = 1e-15);
        }
    }

    #[test]
    fn prime_comb_counts() {
        for npoint in 2..200 {
            let seg = Segment::uniform_n(0.0, 1.0, npoint - 1);
            let resampled = seg.resample_prime_comb(&[2, 3]);
            let cells = resampled.npoint() - 1;

            assert!(resampled.npoint() >= npoint);
            assert!(prime_factors(cells)
                .iter()
                .all(|(prime, _)| *prime == 2 || *prime == 3));
        }
    }

    #[test]
    fn already_smooth_counts_are_kept() {
        let seg = Segment::uniform_n(0.0, 1.0, 96);
        assert_eq!(seg.resample_prime_comb(&[2, 3]).npoint(), 97);
    }

    #[test]
    fn factor_strings() {
        assert_eq!(prime_comb_str(&prime_factors(96)), "2^5 * 3^1");
        assert!(prime_factors(1).is_empty());
    }
}
