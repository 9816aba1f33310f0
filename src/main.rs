//! Solve one equation by bisection and print the root.
//!
//! Without arguments, the root of x⁵ - x³ + 3x - 5 on \[1, 2\] is
//! computed to within 1e-14.

use std::{env, error::Error, process, time::Instant};
use bisect1d::{bisect, functions::{quintic, square_root_of}, Observer, Step};
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Function {
    /// x⁵ - x³ + 3x - 5
    Quintic,
    /// x² - c
    Sqrt,
}

#[derive(Debug, thiserror::Error)]
enum ArgError {
    #[error("unknown option {0:?} (try --help)")]
    UnknownOption(String),
    #[error("option {0} requires a value")]
    MissingValue(String),
    #[error("invalid value {value:?} for option {option}")]
    InvalidValue { option: String, value: String },
    #[error("unknown function {0:?}, expected \"quintic\" or \"sqrt\"")]
    UnknownFunction(String),
}

#[derive(Debug)]
struct Options {
    function: Function,
    value: f64,
    a: Option<f64>,
    b: Option<f64>,
    epsilon: Option<f64>,
    maxiter: usize,
    time: bool,
    trace: bool,
    verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            function: Function::Quintic,
            value: 10.,
            a: None,
            b: None,
            epsilon: None,
            maxiter: bisect1d::DEFAULT_MAXITER,
            time: false,
            trace: false,
            verbose: false,
        }
    }
}

impl Options {
    /// Interval and tolerance, falling back on the defaults of the
    /// chosen function.
    fn problem(&self) -> (f64, f64, f64) {
        let (a, b, epsilon) = match self.function {
            Function::Quintic => (1., 2., 1e-14),
            Function::Sqrt => (0., self.value.max(1.), 1e-10),
        };
        (self.a.unwrap_or(a), self.b.unwrap_or(b),
         self.epsilon.unwrap_or(epsilon))
    }
}

fn print_usage() {
    println!("Usage: bisect1d [OPTIONS]");
    println!();
    println!("Find a root of a function by bisection.");
    println!();
    println!("Options:");
    println!("  --function F     quintic (x^5 - x^3 + 3x - 5, default) or sqrt (x^2 - C)");
    println!("  --value C        Constant C of the sqrt function (default 10)");
    println!("  -a A             Lower bound of the interval");
    println!("  -b B             Upper bound of the interval");
    println!("  --epsilon E      Tolerance on the step and residual errors");
    println!("  --maxiter N      Maximum number of iterations (default 10000)");
    println!("  --time           Print the time taken by the solve");
    println!("  --trace          Print x, step error and residual at each iteration");
    println!("  --verbose, -v    Log the solver progress");
    println!("  --help, -h       Show this help message");
}

fn value<T: std::str::FromStr>(
    option: &str, args: &mut impl Iterator<Item = String>,
) -> Result<T, ArgError> {
    let v = args.next()
        .ok_or_else(|| ArgError::MissingValue(option.to_string()))?;
    v.parse().map_err(|_| ArgError::InvalidValue {
        option: option.to_string(),  value: v })
}

/// Parse the command line.  Return `None` if the help was requested.
fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<Option<Options>, ArgError> {
    let mut opt = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--function" => {
                let f: String = value(&arg, &mut args)?;
                opt.function = match f.as_str() {
                    "quintic" => Function::Quintic,
                    "sqrt" => Function::Sqrt,
                    _ => return Err(ArgError::UnknownFunction(f)),
                }
            }
            "--value" => opt.value = value(&arg, &mut args)?,
            "-a" => opt.a = Some(value(&arg, &mut args)?),
            "-b" => opt.b = Some(value(&arg, &mut args)?),
            "--epsilon" => opt.epsilon = Some(value(&arg, &mut args)?),
            "--maxiter" => opt.maxiter = value(&arg, &mut args)?,
            "--time" => opt.time = true,
            "--trace" => opt.trace = true,
            "--verbose" | "-v" => opt.verbose = true,
            _ => return Err(ArgError::UnknownOption(arg)),
        }
    }
    Ok(Some(opt))
}

/// Print the trace of the iterations in columns.
struct Trace {
    last_iter: usize,
}

impl Observer<f64> for Trace {
    fn step(&mut self, s: &Step<f64>) {
        self.last_iter = s.iter;
        println!("{:.15}\t{:.15}\t{:.15}",
                 s.x, s.err_x.unwrap_or(f64::NAN), s.err_r);
    }
}

/// Run the solve and return the root (NaN on failure) together with
/// the elapsed time in seconds.
fn run(opt: &Options, trace: Option<&mut Trace>) -> (f64, f64) {
    let sqrt = square_root_of(opt.value);
    let f = |x: f64| match opt.function {
        Function::Quintic => quintic(x),
        Function::Sqrt => sqrt(x),
    };
    let (a, b, epsilon) = opt.problem();
    let now = Instant::now();
    let r = match trace {
        Some(t) => bisect(f, a, b).epsilon(epsilon).maxiter(opt.maxiter)
            .observe(|s: &Step<f64>| t.step(s)).root(),
        None => bisect(f, a, b).epsilon(epsilon).maxiter(opt.maxiter).root(),
    };
    let elapsed = now.elapsed().as_secs_f64();
    let root = r.unwrap_or_else(|e| {
        log::error!("{e}");
        f64::NAN
    });
    (root, elapsed)
}

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let opt = match parse_args(env::args().skip(1)) {
        Ok(Some(opt)) => opt,
        Ok(None) => {
            print_usage();
            return Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2)
        }
    };
    let level = if opt.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    SimpleLogger::new().with_level(level).env().init()?;
    log::debug!("{opt:?}");

    let mut trace = Trace { last_iter: 0 };
    let (root, elapsed) = run(&opt, opt.trace.then_some(&mut trace));
    if opt.trace {
        println!("Total Iterations: {}", trace.last_iter);
    }
    println!("Result = {root:.15}");
    if opt.time {
        println!("Time {elapsed:.9}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> impl Iterator<Item = String> + '_ {
        s.split_whitespace().map(String::from)
    }

    #[test]
    fn defaults_are_the_reference_problem() {
        let opt = parse_args(args("")).unwrap().unwrap();
        assert_eq!(opt.function, Function::Quintic);
        assert_eq!(opt.problem(), (1., 2., 1e-14));
        assert!(!opt.time && !opt.trace);
    }

    #[test]
    fn sqrt_defaults() {
        let opt = parse_args(args("--function sqrt")).unwrap().unwrap();
        assert_eq!(opt.problem(), (0., 10., 1e-10));
        let opt = parse_args(args("--function sqrt --value 0.25 -b 2"))
            .unwrap().unwrap();
        assert_eq!(opt.problem(), (0., 2., 1e-10));
    }

    #[test]
    fn parse_all_options() {
        let opt = parse_args(args("-a 0.5 -b 3 --epsilon 1e-6 --maxiter 20 \
                                   --time --trace -v"))
            .unwrap().unwrap();
        assert_eq!(opt.problem(), (0.5, 3., 1e-6));
        assert_eq!(opt.maxiter, 20);
        assert!(opt.time && opt.trace && opt.verbose);
    }

    #[test]
    fn help() {
        assert!(parse_args(args("--time -h")).unwrap().is_none());
    }

    #[test]
    fn bad_arguments() {
        assert!(matches!(parse_args(args("--bogus")),
                         Err(ArgError::UnknownOption(_))));
        assert!(matches!(parse_args(args("--epsilon")),
                         Err(ArgError::MissingValue(_))));
        assert!(matches!(parse_args(args("-a one")),
                         Err(ArgError::InvalidValue { .. })));
        assert!(matches!(parse_args(args("--function cos")),
                         Err(ArgError::UnknownFunction(_))));
    }

    #[test]
    fn run_reference_problem() {
        let opt = Options::default();
        let (root, _) = run(&opt, None);
        assert!((root - 1.2640875224411197).abs() <= 1e-13);
    }

    #[test]
    fn run_failure_is_nan() {
        let opt = Options { a: Some(2.), b: Some(3.), ..Options::default() };
        let (root, _) = run(&opt, None);
        assert!(root.is_nan());
    }

    #[test]
    fn run_with_trace_counts_iterations() {
        let opt = Options::default();
        let mut trace = Trace { last_iter: 0 };
        let (root, _) = run(&opt, Some(&mut trace));
        assert!(!root.is_nan());
        assert!(trace.last_iter > 0);
    }
}
