/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Change in `y` per unit of `x`.
    pub slope: f64,
    /// Value of `y` at `x = 0`.
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

fn non_nan_pairs(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys)
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .map(|(x, y)| (*x, *y))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>, n: usize) -> f64 {
    values.sum::<f64>() / n as f64
}

/// Pearson correlation coefficient between `xs` and `ys`.
///
/// Pairs where either side is NaN are excluded. Inputs of unequal length are
/// truncated to the shorter one. The result is clamped to `[-1, 1]` and is NaN
/// when fewer than two pairs remain, either side has zero variance, or an
/// infinite value reaches the sums.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let pairs = non_nan_pairs(xs, ys);
    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }
    let mx = mean(pairs.iter().map(|p| p.0), n);
    let my = mean(pairs.iter().map(|p| p.1), n);
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    let r = sxy / (sxx.sqrt() * syy.sqrt());
    if r.is_nan() { r } else { r.clamp(-1.0, 1.0) }
}

/// Ordinary least-squares fit of `ys` on `xs` over the finite pairs only.
///
/// Returns `None` with fewer than two finite pairs or when every `x` is equal.
#[must_use]
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| (*x, *y))
        .collect();
    let n = pairs.len();
    if n < 2 {
        return None;
    }
    let mx = mean(pairs.iter().map(|p| p.0), n);
    let my = mean(pairs.iter().map(|p| p.1), n);
    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (x, y) in &pairs {
        sxy += (x - mx) * (y - my);
        sxx += (x - mx) * (x - mx);
    }
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: slope.mul_add(-mx, my),
    })
}
