//! Compute level sets of x sin(x) on [0, 2] for random levels.
//! See https://twitter.com/walkingrandomly/status/1544615360833507329

use std::{error::Error, iter, time::Instant};
use bisect1d::bisect;
use rand::prelude::*;

fn main() -> Result<(), Box<dyn Error + 'static>> {
    const N: usize = 100_000;
    let levels: Vec<_> = iter::from_fn(|| Some(1.5 * random::<f64>()))
        .take(N).collect();
    let mut out = Vec::with_capacity(N);
    let mut niter = 0;

    let now = Instant::now();
    for lv in &levels {
        let s = bisect(|x: f64| x * x.sin() - lv, 0., 2.)
            .epsilon(1e-12).solve()?;
        niter += s.iterations;
        out.push(s.root);
    }
    println!("bisect: {} secs ({:.1} iterations on average)",
             now.elapsed().as_secs_f64(), niter as f64 / N as f64);

    Ok(())
}
