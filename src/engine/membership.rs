//! Membership functions
//!
//! Bounded maps from a raw heuristic magnitude to a comparable score, so features
//! with very different natural scales (piece counts, centipawns) can be summed.

/// Which exponential the sigmoidal shape uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpMode {
    /// `f64::exp`.
    #[default]
    Precise,
    /// [`fast_exp`]. Max relative error about 4%, sigmoid error below 0.011.
    Fast,
}

/// A membership shape with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Membership {
    Sigmoidal { steepness: f64, midpoint: f64 },
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    Gaussian { mean: f64, std_dev: f64 },
}

impl Membership {
    pub const fn sigmoid(steepness: f64, midpoint: f64) -> Self {
        Membership::Sigmoidal { steepness, midpoint }
    }

    pub fn apply(&self, x: f64, exp: ExpMode) -> f64 {
        match *self {
            Membership::Sigmoidal { steepness, midpoint } => match exp {
                ExpMode::Precise => sigmoidal(x, steepness, midpoint),
                ExpMode::Fast => sigmoidal_fast(x, steepness, midpoint),
            },
            Membership::Triangular { a, b, c } => triangular(x, a, b, c),
            Membership::Trapezoidal { a, b, c, d } => trapezoidal(x, a, b, c, d),
            Membership::Gaussian { mean, std_dev } => gaussian(x, mean, std_dev),
        }
    }
}

// Schraudolph (1999): write 2^(x / ln 2) straight into the exponent bits.
// 1512775 = 2^20 / ln 2, 1072632447 = 1023 * 2^20 - 60801 (error-balancing shift).
const EXP_A: f64 = 1_512_775.0;
const EXP_B: f64 = 1_072_632_447.0;

// Outside this range the high word leaves the positive double range.
const FAST_EXP_MIN: f64 = -708.0;
const FAST_EXP_MAX: f64 = 709.0;

/// Approximate `e^x` from the IEEE-754 layout. Relative error stays under 4%.
#[inline]
pub fn fast_exp(x: f64) -> f64 {
    if x < FAST_EXP_MIN {
        return 0.0;
    }
    let x = x.min(FAST_EXP_MAX);
    let bits = (EXP_A * x + EXP_B) as i64;
    f64::from_bits((bits << 32) as u64)
}

/// `1 / (1 + e^(-a (x - c)))`. Exactly 0.5 at `x == c`.
#[inline]
pub fn sigmoidal(x: f64, a: f64, c: f64) -> f64 {
    1.0 / (1.0 + (-a * (x - c)).exp())
}

/// [`sigmoidal`] on top of [`fast_exp`].
#[inline]
pub fn sigmoidal_fast(x: f64, a: f64, c: f64) -> f64 {
    1.0 / (1.0 + fast_exp(-a * (x - c)))
}

/// 0 outside `[a, c]`, rising to 1 at `b`, falling back to 0 at `c`.
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x < a || x > c {
        0.0
    } else if x <= b {
        ramp_up(x, a, b)
    } else {
        ramp_down(x, b, c)
    }
}

/// Like [`triangular`] with a plateau of 1 between `b` and `c`.
pub fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x < a || x > d {
        0.0
    } else if x < b {
        ramp_up(x, a, b)
    } else if x <= c {
        1.0
    } else {
        ramp_down(x, c, d)
    }
}

/// Bell curve with peak 1 at `mean`.
pub fn gaussian(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return if x == mean { 1.0 } else { 0.0 };
    }
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp()
}

// A zero-width ramp is a vertical edge.
#[inline]
fn ramp_up(x: f64, lo: f64, hi: f64) -> f64 {
    if hi == lo { 1.0 } else { (x - lo) / (hi - lo) }
}

#[inline]
fn ramp_down(x: f64, lo: f64, hi: f64) -> f64 {
    if hi == lo { 1.0 } else { (hi - x) / (hi - lo) }
}
