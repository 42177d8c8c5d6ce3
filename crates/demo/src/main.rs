// File: crates/demo/src/main.rs
// Summary: Demo computes axis tics from CLI arguments and prints the layout and tic values.
//
// Usage:
//   tics-demo <x1> <x2> <dtic>               explicit major interval
//   tics-demo <x1> <x2> --max <ntic>         at most ntic major tics
//   ... --custom                             attach primary/secondary key tics

use anyhow::{Context, Result};
use log::info;
use tics_core::{AxisTicsEngine, TicDirective};

const PRIMARY_KEY_LABEL: &str = "Primary Key";
const SECONDARY_KEY_LABEL: &str = "Secondary Key";

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let custom = take_flag(&mut args, "--custom");

    // Fall back to the sampled slow axis (n=151, d=0.03, f=-1.3) with half-unit tics
    let (x1, x2, directive) = if args.is_empty() {
        (-1.3, -1.3 + 150.0 * 0.03, TicDirective::Interval(0.5))
    } else {
        parse_args(&args)?
    };
    info!("axis [{}, {}] with {:?}", x1, x2, directive);

    let mut engine = AxisTicsEngine::new(x1, x2, directive)
        .with_context(|| format!("failed to compute tics for [{x1}, {x2}]"))?;

    if custom {
        let primary: Vec<f64> = (0..11).map(|i| i as f64 + 0.1).collect();
        let secondary: Vec<f64> = (0..101).map(|i| i as f64 + 1.0).collect();
        engine.set_custom_tics_primary(primary, PRIMARY_KEY_LABEL);
        engine.set_custom_tics_secondary(secondary, SECONDARY_KEY_LABEL);
    }

    print!("{}", engine.debug_dump());

    let tics = engine.tics();
    let majors: Vec<String> = tics.major().values().map(|v| format!("{v}")).collect();
    println!("major: [{}]", majors.join(", "));
    let minors: Vec<String> = tics
        .minor()
        .values()
        .enumerate()
        .map(|(i, v)| if tics.is_major(i) { format!("*{v:.6}") } else { format!("{v:.6}") })
        .collect();
    println!("minor: [{}]", minors.join(", "));
    Ok(())
}

fn parse_args(args: &[String]) -> Result<(f64, f64, TicDirective)> {
    match args {
        [x1, x2, flag, n] if flag == "--max" => {
            let ntic = n.parse::<usize>().with_context(|| format!("invalid tic count '{n}'"))?;
            Ok((parse_f64(x1)?, parse_f64(x2)?, TicDirective::MaxCount(ntic)))
        }
        [x1, x2, d] => Ok((parse_f64(x1)?, parse_f64(x2)?, TicDirective::Interval(parse_f64(d)?))),
        _ => anyhow::bail!("usage: tics-demo <x1> <x2> (<dtic> | --max <ntic>) [--custom]"),
    }
}

fn parse_f64(s: &str) -> Result<f64> {
    s.trim().parse::<f64>().with_context(|| format!("invalid number '{s}'"))
}

/// Remove every occurrence of `flag`, returning whether it was present.
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}
