use nbabel::{bench_gravity, bench_steps};
use nbabel::{load_from_path, Engine, Parameters, Scenario, ScenarioConfig, Validation};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Direct-summation N-body leapfrog integrator")]
struct Args {
    /// Initial conditions, one `mass x y z vx vy vz` record per line
    #[arg(required_unless_present_any = ["file_name", "bench"])]
    input: Option<PathBuf>,

    /// YAML scenario; looked up under `scenarios/` if not found as given
    ///
    /// Run settings come from the file, so the run flags below conflict with it
    #[arg(
        short,
        long,
        conflicts_with_all = ["input", "t_end", "time_step", "energy_check_interval", "strict"]
    )]
    file_name: Option<PathBuf>,

    #[arg(long, default_value_t = 10.0)]
    t_end: f64,

    #[arg(long, default_value_t = 0.001)]
    time_step: f64,

    #[arg(long, default_value_t = 100)]
    energy_check_interval: usize,

    /// Abort when the energy becomes NaN/inf
    #[arg(long)]
    strict: bool,

    /// Run the timing benchmarks instead of a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &Path) -> Result<Scenario> {
    let config_path = if file_name.exists() {
        file_name.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    let file = File::open(&config_path)
        .with_context(|| format!("cannot open scenario {}", config_path.display()))?;
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse scenario {}", config_path.display()))?;

    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    Ok(Scenario::build_scenario(scenario_cfg, base_dir)?)
}

fn scenario_from_args(args: &Args, input: &Path) -> Result<Scenario> {
    let particles = load_from_path(input)
        .with_context(|| format!("cannot load initial conditions from {}", input.display()))?;
    let validation = if args.strict {
        Validation::Strict
    } else {
        Validation::Baseline
    };
    let parameters = Parameters::from_t_end(args.t_end, args.time_step)?
        .with_energy_check_interval(args.energy_check_interval)
        .with_validation(validation);
    Ok(Scenario { parameters, particles })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_steps()?;
        return Ok(());
    }

    let t_start = Instant::now();

    let scenario = match (&args.file_name, &args.input) {
        (Some(file_name), _) => load_scenario_from_yaml(file_name)?,
        (None, Some(input)) => scenario_from_args(&args, input)?,
        (None, None) => anyhow::bail!("no input file or scenario given"),
    };
    let nb_steps = scenario.parameters.nb_steps;

    let mut engine: Engine = scenario.into_engine()?;
    let summary = engine.run()?;

    println!("Final dE/E = {:.6e}", summary.relative_drift());
    println!("{} time steps run in {:?}", nb_steps, t_start.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::{CommandFactory, Parser};

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn scenario_file_rejects_run_flags() {
        for flag in ["--t-end=5", "--time-step=0.01", "--energy-check-interval=10", "--strict"] {
            let parsed = Args::try_parse_from(["nbabel", "-f", "kepler.yaml", flag]);
            assert!(parsed.is_err(), "{flag} accepted together with -f");
        }
    }

    #[test]
    fn scenario_file_alone_uses_defaults() {
        let args = Args::try_parse_from(["nbabel", "-f", "kepler.yaml"]).unwrap();
        assert!(args.input.is_none());
        assert_eq!(args.t_end, 10.0);
    }

    #[test]
    fn input_file_takes_run_flags() {
        let args = Args::try_parse_from(["nbabel", "input16", "--t-end=2", "--strict"]).unwrap();
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("input16")));
        assert_eq!(args.t_end, 2.0);
        assert!(args.strict);
    }
}
