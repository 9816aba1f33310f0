use std::error::Error;
use std::f64::consts::PI;
use bisect1d::{bisect, functions::{quintic, square_root_of}, Step};

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let f1 = |x: f64| x.sin() - 0.5 * x;
    println!("f1: {}", bisect(f1, PI / 2., PI).epsilon(1e-15).root()?);

    let s = bisect(quintic, 1., 2.).solve()?;
    println!("quintic: {:.15} ({} iterations, {:?})",
             s.root, s.iterations, s.status);

    for c in 1..4 {
        let c = c as f64;
        let r = bisect(square_root_of(c), 0., c.max(1.)).epsilon(1e-12).root();
        println!("c = {} ⟹ root = {:?}", c, r);
    }

    // The estimates move by a factor 2 at each step.
    let mut widths = vec![];
    bisect(square_root_of(2.), 0., 2.)
        .epsilon(1e-3)
        .observe(|s: &Step<f64>| widths.push(s.b - s.a))
        .solve()?;
    println!("bracket widths: {:?}", widths);

    // No change of sign: the error says why.
    if let Err(e) = bisect(square_root_of(2.), 2., 3.).root() {
        println!("[2, 3]: {}", e);
    }
    Ok(())
}
