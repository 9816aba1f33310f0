//! Functions to try the bisection on.

/// Return the function x ↦ x² - `c` whose positive root is √`c`.
///
/// ```
/// use bisect1d::{bisect, functions::square_root_of};
/// # fn main() -> Result<(), bisect1d::Error<f64>> {
/// let r = bisect(square_root_of(2.), 0., 2.).root()?;
/// assert!((r - 2f64.sqrt()).abs() <= 1e-14);
/// # Ok(()) }
/// ```
pub fn square_root_of(c: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| x * x - c
}

/// The polynomial x⁵ - x³ + 3x - 5.  Its only real root lies in
/// \[1, 2\], close to 1.26409.
pub fn quintic(x: f64) -> f64 {
    x.powi(5) - x.powi(3) + 3. * x - 5.
}
