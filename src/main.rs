//! Command-line driver for the Izhikevich hybrid simulation.
//!
//! Parses the initial state from the command line, runs the fixed-horizon
//! integration, and dumps the trajectory as CSV. All diagnostics go through
//! the `log` facade; the core library itself never logs.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use hivp::{Float, Izhikevich, Settings, Status, simulate, write_trajectory_csv};

/// Integrate the Izhikevich neuron with fixed-step RK4 and spike resets
#[derive(Parser, Debug)]
#[command(name = "hivp")]
#[command(about = "Fixed-step RK4 integration of a hybrid spiking-neuron ODE", long_about = None)]
#[command(version)]
struct Args {
    /// Initial membrane potential v(0)
    #[arg(allow_hyphen_values = true)]
    v0: Float,

    /// Initial recovery variable u(0)
    #[arg(allow_hyphen_values = true)]
    u0: Float,

    /// Nominal step size
    #[arg(long, default_value_t = 1e-3, value_name = "H")]
    step_size: Float,

    /// Number of trajectory samples, initial condition included
    #[arg(long, default_value_t = 1_000_000, value_name = "N")]
    steps: usize,

    /// Injected current I
    #[arg(long, default_value_t = 0.0, value_name = "I")]
    current: Float,

    /// Recovery time scale a
    #[arg(long, default_value_t = 0.02)]
    a: Float,

    /// Recovery sensitivity b
    #[arg(long, default_value_t = 2.0)]
    b: Float,

    /// After-spike membrane reset value c
    #[arg(long, default_value_t = -30.0, allow_hyphen_values = true)]
    c: Float,

    /// After-spike recovery increment d
    #[arg(long, default_value_t = 4.0)]
    d: Float,

    /// Spike threshold
    #[arg(long, default_value_t = 30.0)]
    threshold: Float,

    /// Accepted overshoot above the threshold when localizing a spike
    #[arg(long, default_value_t = 1e-5)]
    precision: Float,

    /// Maximum step halvings per localized spike
    #[arg(long, default_value_t = 100)]
    max_halvings: usize,

    /// Output CSV path
    #[arg(short, long, default_value = "rk_out.csv", value_name = "FILE")]
    output: PathBuf,

    /// Append diagnostics to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    log::info!("hivp v{} starting up", env!("CARGO_PKG_VERSION"));
    log::info!("v0 = {}, u0 = {}", args.v0, args.u0);
    log::info!(
        "I = {}, a = {}, b = {}, c = {}, d = {}",
        args.current,
        args.a,
        args.b,
        args.c,
        args.d
    );
    log::info!(
        "h = {}, steps = {}, threshold = {}, precision = {}, max halvings = {}",
        args.step_size,
        args.steps,
        args.threshold,
        args.precision,
        args.max_halvings
    );

    let model = Izhikevich::builder()
        .i(args.current)
        .a(args.a)
        .b(args.b)
        .c(args.c)
        .d(args.d)
        .build();
    let settings = Settings::builder()
        .h(args.step_size)
        .nsteps(args.steps)
        .threshold(args.threshold)
        .precision(args.precision)
        .max_halvings(args.max_halvings)
        .build();

    log::info!("running Runge-Kutta fourth order method");
    let started = Instant::now();
    let trajectory = simulate(&model, &[args.v0, args.u0], &settings)?;
    log::info!(
        "done in {:.3?}: {} steps, {} rhs evaluations, {} resets, {} spikes localized",
        started.elapsed(),
        trajectory.nstep,
        trajectory.nfev,
        trajectory.nreset,
        trajectory.nevent
    );
    if trajectory.status == Status::PrecisionNotMet {
        log::warn!(
            "{} spike(s) still above the threshold band after {} halvings; best candidates kept",
            trajectory.nunresolved,
            settings.max_halvings
        );
    }

    log::info!("saving to {}", args.output.display());
    let started = Instant::now();
    write_trajectory_csv(&args.output, &trajectory, &model, &settings)?;
    log::info!(
        "done in {:.3?}: wrote {} samples",
        started.elapsed(),
        trajectory.len()
    );

    Ok(())
}

fn init_logging(log_file: Option<&std::path::Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(path) = log_file {
        let file = std::fs::File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file (path={:?})", path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
