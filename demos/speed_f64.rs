use std::{error::Error,
          fmt::{self, Display, Formatter}};

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let mut sum = 0.;

    for _ in 0..10_000 {
        for i in 2..100 {
            let c = i as f64;
            let f = |x| x * x - c;
            let r = bisect(f, 0., 100., 1e-10)?;
            sum += r;
        }
    }

    println!("bisect_f64 sum: {:.12}", sum);
    Ok(())
}

#[derive(Debug)]
enum BisectError {
    NoSignChange,
    MaxIter,
}

impl Display for BisectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BisectError::NoSignChange =>
                write!(f, "The sign at the bound is not opposite"),
            BisectError::MaxIter =>
                write!(f, "Maximum number of iterations reached"),
        }
    }
}

impl Error for BisectError {}

/// Minimal and monomorphic routine to estimate the maximum possible
/// speed.  Same stopping rule as `bisect1d::bisect`.
fn bisect<F>(f: F, mut a: f64, mut b: f64, eps: f64) -> Result<f64, BisectError>
where F: Fn(f64) -> f64 {
    let mut fa = f(a);
    if !(fa * f(b) < 0.) { return Err(BisectError::NoSignChange) }
    let mut x = 0.5 * (a + b);
    let mut fx = f(x);
    if fx == 0. { return Ok(x) }
    for _ in 0..10_000 {
        let x_old = x;
        if fa * fx < 0. { b = x } else { a = x;  fa = fx }
        x = 0.5 * (a + b);
        fx = f(x);
        if (x - x_old).abs() <= eps && fx.abs() <= eps { return Ok(x) }
        if fx == 0. { return Ok(x) }
    }
    Err(BisectError::MaxIter)
}
