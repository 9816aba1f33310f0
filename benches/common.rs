use std::f64::consts::PI;

// Functions from the "Algorithm 748" paper (Alefeld, Potra, Shi).

fn f1(x: f64) -> f64 { x.sin() - x / 2. }

fn f3<const A: i32, const B: i32>(x: f64) -> f64 {
    A as f64 * x * (B as f64 * x).exp()
}

fn f4_0<const N:i32>(x: f64) -> f64 { x.powi(N) - 0.2 }
fn f4_1<const N:i32>(x: f64) -> f64 { x.powi(N) - 1. }

fn f5(x: f64) -> f64 { x.sin() - 0.5 }

fn f6<const N:i32>(x: f64) -> f64 {
    let n = (-N) as f64;
    2. * x * n.exp() - 2. * (n*x).exp() + 1.
}

fn f8<const N:i32>(x: f64) -> f64 { x * x - (1. - x).powi(N) }

fn f12<const N:i32>(x: f64) -> f64 {
    let n1 = 1. / N as f64;
    x.powf(n1) - (N as f64).powf(n1)
}

/// Return groups of test problems `(f, a, b)` on which `f` changes
/// sign, the last one being the quintic of the command line tool.
#[inline]
pub fn test_problems() -> [Vec<(fn(f64) -> f64, f64, f64)>; 9] {
    macro_rules! f { ($f: expr) => { $f as fn(f64) -> f64 } }
    macro_rules! vec_gen {
        ($f: ident $($n: literal)+, $a: expr, $b:expr) => {
            vec![$((f!($f::<$n>), $a, $b),)+]
        }
    }
    [vec![(f!(f1), 0.5 * PI, PI)],
     vec![(f!(f3::< -40, -1>), -9., 31.),
          (f!(f3::<-100, -2>), -9., 31.),
          (f!(f3::<-200, -3>), -9., 31.)],
     { let mut t = vec_gen!(f4_0 4 6 8 10 12, 0., 5.);
       t.append(&mut vec_gen!(f4_1 4 6 8 10 12, 0., 5.));
       t },
     vec![(f!(f5), 0., 1.5)],
     vec_gen!(f6 1 2 3 4 5 20 40 60 80 100, 0., 1.),
     vec_gen!(f8 2 5 10 15 20, 0., 1.),
     vec_gen!(f12 2 3 4 5 6 7 9 11 13 15, 1., 100.),
     vec![(f!(|x: f64| x * x - 10.), 0., 10.)],
     vec![(f!(bisect1d::functions::quintic), 1., 2.)],
    ]
}
