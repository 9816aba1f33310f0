//! Bisection root finding for functions from ℝ to ℝ.
//!
//! Given a continuous function `f` and an interval \[a,b\] such that
//! `f` has opposite signs at a and b, the bisection method repeatedly
//! halves the interval, keeping the half on which `f` still changes
//! sign, until the estimate of the root stops moving and `f` is small
//! enough there.
//!
//! # Example
//!
//! The procedure has the same structure as a builder.  The function
//! [`bisect`] specifies `f` and the interval \[`a`, `b`\] on which `f`
//! changes sign.  It returns a structure [`Bisect`] which provides
//! methods to specify various parameters (such as
//! [`epsilon`][Bisect::epsilon]) and functions to compute a root (such
//! as [`root`][Bisect::root] and [`solve`][Bisect::solve]).
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bisect1d::bisect;
//! let r = bisect(|x| x * x - 10., 0., 10.).epsilon(1e-10).root()?;
//! assert!((r - 10f64.sqrt()).abs() < 1e-10);
//! # Ok(()) }
//! ```
//!
//! # Termination
//!
//! A solve stops successfully when *both* the step-size error
//! |x(n) - x(n-1)| and the residual error |f(x(n))| are ≤ `epsilon`,
//! or when the function vanishes exactly at a trial point.  It fails
//! with [`Error::NoSignChange`] when the initial interval does not
//! bracket a root and with [`Error::MaxIter`] when the iteration
//! budget is spent first.

#![cfg_attr(feature = "nightly", feature(never_type))]

use std::{
    fmt::{Debug, Display},
    marker::PhantomData,
    ops::Sub,
    result::Result,
};

pub mod functions;

#[cfg(feature = "nightly")]
/// Type indicating that no error is raised by the function.
pub type NoError = !;
#[cfg(not(feature = "nightly"))]
#[derive(Debug)]
/// Type indicating that no error is raised by the function.
pub enum NoError {}

/// Maximum number of bisection steps performed by default.
pub const DEFAULT_MAXITER: usize = 10_000;

/// Errors that may be returned by the bisection method.
#[derive(Debug, thiserror::Error)]
pub enum Error<T, E = NoError> {
    /// Error indicating that the function evaluated at `x` returned
    /// the non-finite value `fx`.  Also used with `fx = x` for an
    /// interval bound `x` that is not finite.
    #[error("evaluating the function at {x} yields {fx} which is not finite")]
    NotFinite { x: T, fx: T },
    /// Error returned by the function evaluated at `x`.
    #[error("evaluating the function at {x} yields the error {err:?}")]
    Fun { x: T, err: E },
    /// Report that the maximum number of iterations has been reached
    /// before the step-size and residual errors both fell below the
    /// tolerance.  `x` is the estimate of the root at that moment.
    #[error("maximum number of iterations reached (last estimate: {x})")]
    MaxIter { x: T },
    /// Report that the function did not change sign on the original
    /// interval \[a, b\] (including the case where it vanishes at one
    /// of the bounds).
    #[error("no change of sign on [a, b] = [{a}, {b}], f(a) = {fa}, f(b) = {fb}")]
    NoSignChange { a: T, fa: T, b: T, fb: T },
}

////////////////////////////////////////////////////////////////////////
//
// Error returning functions

/// A float type or a Result type for floats.
pub trait FloatOrError<T> {
    type Error;
    fn to_result(self) -> Result<T, Self::Error>;
}

macro_rules! impl_float_or_error { ($t: ty) => {
    impl FloatOrError<$t> for $t {
        type Error = NoError;

        #[inline]
        fn to_result(self) -> Result<$t, NoError> { Ok(self) }
    }
    impl<E> FloatOrError<$t> for Result<$t, E> {
        type Error = E;

        #[inline]
        fn to_result(self) -> Result<$t, E> { self }
    }
}}

impl_float_or_error!(f64);
impl_float_or_error!(f32);

/// Evaluate `f` at `x`, turning errors and non-finite values into
/// [`Error`]s.
#[inline]
fn eval<T, F, R>(f: &mut F, x: T) -> Result<T, Error<T, R::Error>>
where
    T: Bisectable,
    F: FnMut(T) -> R,
    R: FloatOrError<T>,
{
    let fx = f(x).to_result().map_err(|err| Error::Fun { x, err })?;
    if fx.is_finite() { Ok(fx) } else { Err(Error::NotFinite { x, fx }) }
}

////////////////////////////////////////////////////////////////////////
//
// Bisectable types

/// Trait indicating that the type is suitable for the bisection algorithm.
pub trait Bisectable:
    Copy + PartialOrd + Debug + Display + Sub<Output = Self>
{
    /// Tolerance used when none is given with [`Bisect::epsilon`].
    const DEFAULT_EPSILON: Self;

    /// Return `true` if `self` is `< 0` (thus not a NaN).
    fn lt0(self) -> bool;

    /// Return `true` if `self` is `> 0` (thus not a NaN).
    fn gt0(self) -> bool;

    /// Return `true` if `self` is exactly zero.
    fn is_zero(self) -> bool;

    /// Returns `true` iff `self` is finite.
    fn is_finite(self) -> bool;

    /// Returns `true` iff `self` is a NaN.
    fn is_nan(self) -> bool;

    /// Absolute value of `self`.
    fn abs(self) -> Self;

    /// Midpoint of the interval \[`a`, `b`\].  The bounds may be
    /// assumed to be finite.
    fn mid(a: Self, b: Self) -> Self;
}

macro_rules! impl_bisectable_fXX {
    ($t: ty, $eps: expr) => {
        impl Bisectable for $t {
            const DEFAULT_EPSILON: Self = $eps;
            #[inline]
            fn lt0(self) -> bool { self < 0. }
            #[inline]
            fn gt0(self) -> bool { self > 0. }
            #[inline]
            #[allow(clippy::float_cmp)]
            fn is_zero(self) -> bool { self == 0. }
            #[inline]
            fn is_finite(self) -> bool { <$t>::is_finite(self) }
            #[inline]
            fn is_nan(self) -> bool { <$t>::is_nan(self) }
            #[inline]
            fn abs(self) -> Self { <$t>::abs(self) }
            #[inline]
            fn mid(a: Self, b: Self) -> Self {
                // Based on: F. Goualard, “How do you compute the
                // midpoint of an interval?,” ACM Trans. Math. Softw.,
                // vol. 40, no. 2, pp. 1–25, Feb. 2014, doi: 10.1145/2493882.
                let mid = (a + b) / 2.;
                if mid.is_finite() { mid } else { 0.5 * a + 0.5 * b }
            }
        }
    }
}

impl_bisectable_fXX!(f64, 1e-14);
impl_bisectable_fXX!(f32, 1e-6);

/// Return `true` iff `fa` and `fb` have strictly opposite signs.
/// A zero or a NaN never has a sign.
#[inline]
pub fn opposite_signs<T: Bisectable>(fa: T, fb: T) -> bool {
    (fa.lt0() && fb.gt0()) || (fa.gt0() && fb.lt0())
}

/// Step-size error |`x` - `x_old`| between two successive estimates.
#[inline]
pub fn step_error<T: Bisectable>(x: T, x_old: T) -> T {
    (x - x_old).abs()
}

/// Residual error |f(x)| given the value `fx` = f(x).
#[inline]
pub fn residual_error<T: Bisectable>(fx: T) -> T {
    fx.abs()
}

////////////////////////////////////////////////////////////////////////
//
// Observation

/// State of the bisection after one step, handed to an [`Observer`].
#[derive(Debug, Clone, Copy)]
pub struct Step<T> {
    /// Iteration counter: 0 for the initial midpoint, then 1-based
    /// within the bisection loop.
    pub iter: usize,
    /// Current estimate of the root (midpoint of \[`a`, `b`\]).
    pub x: T,
    /// Step-size error, `None` for the initial midpoint.
    pub err_x: Option<T>,
    /// Residual error |f(`x`)|.
    pub err_r: T,
    /// Lower bound of the current bracket.
    pub a: T,
    /// Upper bound of the current bracket.
    pub b: T,
}

/// Receives the state of the solver after each step.
///
/// Closures `FnMut(&Step<T>)` implement `Observer`, and `()` is the
/// observer doing nothing.
pub trait Observer<T> {
    fn step(&mut self, step: &Step<T>);
}

impl<T, F> Observer<T> for F
where F: FnMut(&Step<T>) {
    #[inline]
    fn step(&mut self, step: &Step<T>) { self(step) }
}

impl<T> Observer<T> for () {
    #[inline]
    fn step(&mut self, _: &Step<T>) {}
}

////////////////////////////////////////////////////////////////////////
//
// Bisection

/// How a successful solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Step-size and residual errors are both ≤ `epsilon`.
    Converged,
    /// The function vanishes exactly at the returned root.
    ExactRoot,
}

/// Outcome of a successful bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// Approximation of the root.
    pub root: T,
    /// Final bracket.  It is reduced to \[`root`, `root`\] when the
    /// root is exact.
    pub bracket: (T, T),
    /// Number of bisection steps performed (0 when the initial
    /// midpoint is an exact root).
    pub iterations: usize,
    /// Last step-size error, `None` if no step was performed.
    pub err_x: Option<T>,
    /// Residual error |f(`root`)|.
    pub err_r: T,
    pub status: Status,
}

/// Find a root of the function `f` on the interval \[`a`, `b`\]
/// with finite bounds assuming `f(a)` and `f(b)` have opposite
/// signs and `f` is continuous using the bisection algorithm.
///
/// Trying to compute the root when `f(a)` and `f(b)` do *not* have
/// strictly opposite signs will return the error
/// [`Error::NoSignChange`] without bisecting.  The bounds need not be
/// ordered.
///
/// The default tolerance is [`Bisectable::DEFAULT_EPSILON`] (`1e-14`
/// for [`f64`], `1e-6` for [`f32`]) and the default maximum number
/// of iterations is [`DEFAULT_MAXITER`].  Reaching that many
/// iterations returns the error [`Error::MaxIter`].  Nothing is
/// computed until [`root`][Bisect::root], [`bracket`][Bisect::bracket]
/// or [`solve`][Bisect::solve] is used on the result.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use bisect1d::{bisect, functions::quintic};
/// let r = bisect(quintic, 1., 2.).root()?;
/// assert!(quintic(r).abs() <= 1e-14);
/// # Ok(()) }
/// ```
///
/// The function may also return an error in which case the bisection
/// stops and returns the error [`Error::Fun`].
///
/// ```
/// use bisect1d::{bisect, Error};
/// let f = |x: f64| if x < 1.9 { Ok(x - 1.5) } else { Err("too far") };
/// assert!(matches!(bisect(f, 1., 2.).root(), Err(Error::Fun { .. })));
/// ```
pub fn bisect<T, F, R>(f: F, a: T, b: T) -> Bisect<T, F, (), R::Error>
where
    T: Bisectable,
    F: FnMut(T) -> R,
    R: FloatOrError<T>,
{
    Bisect {
        f,  a,  b,
        error: PhantomData,
        obs: (),
        epsilon: T::DEFAULT_EPSILON,
        maxiter: DEFAULT_MAXITER,
    }
}

/// Return an approximation of a root of `f` on \[`a`, `b`\] to within
/// `epsilon`.  Shortcut for `bisect(f, a, b).epsilon(epsilon).root()`.
pub fn solve<T, F, R>(
    f: F, a: T, b: T, epsilon: T,
) -> Result<T, Error<T, R::Error>>
where
    T: Bisectable,
    F: FnMut(T) -> R,
    R: FloatOrError<T>,
{
    bisect(f, a, b).epsilon(epsilon).root()
}

/// Bisection algorithm.  See [`bisect`].
pub struct Bisect<T, F, Obs, E> {
    f: F,
    a: T,  // `a` and `b` are the bounds of the interval.
    b: T,
    error: PhantomData<E>, // Error that `f` might return
    obs: Obs,
    epsilon: T,
    maxiter: usize,
}

impl<T, F, Obs, E> Bisect<T, F, Obs, E>
where T: Bisectable {
    /// Set the tolerance on both the step-size error and the residual
    /// error.
    ///
    /// Set the default value if `epsilon` is < 0 or NaN.
    #[must_use]
    pub fn epsilon(mut self, epsilon: T) -> Self {
        self.epsilon =
            if epsilon.lt0() || epsilon.is_nan() { T::DEFAULT_EPSILON }
            else { epsilon };
        self
    }

    /// Set the maximum number of bisection steps.  With `n = 0`, only
    /// an exact root at the midpoint of the initial interval can be
    /// found.
    #[must_use]
    pub fn maxiter(mut self, n: usize) -> Self {
        self.maxiter = n;
        self
    }

    /// Change the observer to `obs`.  It is called with the initial
    /// midpoint and after every bisection step.
    ///
    /// You can use a closure `FnMut(&Step<T>)` as the observer.
    pub fn observe<O>(self, obs: O) -> Bisect<T, F, O, E>
    where O: Observer<T> {
        Bisect {
            obs,
            f: self.f,  a: self.a,  b: self.b,
            error: self.error,
            epsilon: self.epsilon,
            maxiter: self.maxiter,
        }
    }

    /// Check that `a` and `b` are finite.
    #[inline]
    fn check_interval_bounds(&self) -> Result<(), Error<T, E>> {
        if !self.a.is_finite() {
            return Err(Error::NotFinite { x: self.a, fx: self.a })
        }
        if !self.b.is_finite() {
            return Err(Error::NotFinite { x: self.b, fx: self.b })
        }
        Ok(())
    }
}

impl<T, F, R, Obs> Bisect<T, F, Obs, R::Error>
where
    T: Bisectable,
    F: FnMut(T) -> R,
    R: FloatOrError<T>,
    Obs: Observer<T>,
{
    /// Return `Ok(r)` where `r` is an approximate root of the
    /// function (provided that it is continuous) or `Err` indicating
    /// why no root could be computed.
    pub fn root(&mut self) -> Result<T, Error<T, R::Error>> {
        self.solve().map(|s| s.root)
    }

    /// Return an interval containing the root.  See
    /// [`solve`][Bisect::solve] for more information.
    pub fn bracket(&mut self) -> Result<(T, T), Error<T, R::Error>> {
        self.solve().map(|s| s.bracket)
    }

    /// Use the bisection algorithm to approximate a root of the
    /// function `f` on the interval \[`a`, `b`\] (see [`bisect`]).
    ///
    /// The half \[a, x\] is tested for a change of sign at each step
    /// and the other half is kept otherwise.  This is sound because
    /// f(a) · f(b) < 0 holds throughout: the bounds are only moved to
    /// points where `f` has a sign, and an exact zero of `f` at a
    /// trial point ends the solve.
    pub fn solve(&mut self) -> Result<Solution<T>, Error<T, R::Error>> {
        self.check_interval_bounds()?;
        let mut a = self.a;
        let mut b = self.b;
        log::debug!("bisect on [{a}, {b}], epsilon = {}, maxiter = {}",
                    self.epsilon, self.maxiter);
        let mut fa = eval(&mut self.f, a)?;
        let mut fb = eval(&mut self.f, b)?;
        if !opposite_signs(fa, fb) {
            log::debug!("no change of sign: f({a}) = {fa}, f({b}) = {fb}");
            return Err(Error::NoSignChange { a, fa, b, fb })
        }

        let mut x = T::mid(a, b);
        let mut fx = eval(&mut self.f, x)?;
        self.obs.step(&Step {
            iter: 0, x, err_x: None, err_r: residual_error(fx), a, b });
        if fx.is_zero() {
            log::debug!("exact root at the initial midpoint {x}");
            return Ok(Solution {
                root: x,  bracket: (x, x),  iterations: 0,
                err_x: None,  err_r: residual_error(fx),
                status: Status::ExactRoot,
            })
        }

        for iter in 1 ..= self.maxiter {
            let x_old = x;
            if opposite_signs(fa, fx) { b = x;  fb = fx; }
            else { a = x;  fa = fx; }
            debug_assert!(opposite_signs(fa, fb));
            x = T::mid(a, b);
            fx = eval(&mut self.f, x)?;
            let err_x = step_error(x, x_old);
            let err_r = residual_error(fx);
            log::trace!("{iter}: x = {x}, err_x = {err_x}, err_r = {err_r}");
            self.obs.step(&Step {
                iter, x, err_x: Some(err_x), err_r, a, b });
            if err_x <= self.epsilon && err_r <= self.epsilon {
                log::debug!("converged to {x} after {iter} iterations");
                return Ok(Solution {
                    root: x,  bracket: (a, b),  iterations: iter,
                    err_x: Some(err_x),  err_r,
                    status: Status::Converged,
                })
            }
            if fx.is_zero() {
                log::debug!("exact root {x} after {iter} iterations");
                return Ok(Solution {
                    root: x,  bracket: (x, x),  iterations: iter,
                    err_x: Some(err_x),  err_r,
                    status: Status::ExactRoot,
                })
            }
        }

        log::debug!("no convergence after {} iterations, last estimate {x}",
                    self.maxiter);
        Err(Error::MaxIter { x })
    }
}


////////////////////////////////////////////////////////////////////////
//
// Tests
