//! Closed-form approximations of the normal and Student's-t quantiles.
//!
//! Both are taken from M. H. MacDougall, _Simulating Computer Systems_
//! (MIT Press, 1987), p. 276.  They're accurate to roughly 1e-4 for the
//! normal and get better as the degrees of freedom grow for the t.  Callers
//! must keep `p` inside the open interval (0, 1).

/// The upper-tail critical value of the standard normal distribution.
///
/// Returns `z` such that `P(Z > z) = p`, so `z(0.025)` is about 1.96 and
/// `z(0.975)` about -1.96.
pub fn z(p: f64) -> f64 {
    let q = if p > 0.5 { 1. - p } else { p };
    let z1 = (-2. * q.ln()).sqrt();
    let n = (0.010328 * z1 + 0.802853) * z1 + 2.515517;
    let d = ((0.0013080 * z1 + 0.189269) * z1 + 1.43278) * z1 + 1.;
    let z1 = z1 - n / d;
    if p > 0.5 {
        -z1
    } else {
        z1
    }
}

/// The upper-tail critical value of Student's t-distribution with `ndf`
/// degrees of freedom.
///
/// This is a Cornish-Fisher expansion around [`z`].  The terms are summed
/// innermost-first, dividing by `ndf` at each step.
pub fn t(p: f64, ndf: u64) -> f64 {
    let ndf = ndf as f64;
    let z1 = z(p).abs();
    let z2 = z1 * z1;
    let h = [
        0.25 * z1 * (z2 + 1.),
        0.010416667 * z1 * ((5. * z2 + 16.) * z2 + 3.),
        0.002604167 * z1 * ((3. * z2 + 19.) * z2 - 15.),
        z1 * ((((79. * z2 + 776.) * z2 + 1482.) * z2 - 1920.) * z2 - 945.) * 0.000010851,
    ];
    let x = h.iter().rev().fold(0., |x, h| (x + h) / ndf);
    let y = z1 + x;
    if p > 0.5 {
        -y
    } else {
        y
    }
}
