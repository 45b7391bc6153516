use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::{ArgAction, Parser, Subcommand};

use ledge_launch::core::trajectory::{contact_time, peak_height};
use ledge_launch::plot::{render_trajectory_svg, resolve_plot_path};
use ledge_launch::sweep::{angle_range, best_range, sweep_angles};
use ledge_launch::{
    LaunchParameters, Result, RunReport, SimError, SimulationConfig, SimulationStatus, logging,
    simulate,
};

#[derive(Parser, Debug)]
#[command(name = "ledge_launch")]
#[command(about = "Launch a body off a ledge and measure its flight", long_about = None)]
struct Cli {
    /// YAML file overriding step size, thresholds, viewport and defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Repeat for more detail (-v info, -vv debug, -vvv every tick)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a single launch
    Run {
        /// Ledge height (m)
        height_m: f64,

        /// Launch speed (m/s)
        speed_mps: f64,

        /// Launch angle (degrees, positive is upwards)
        #[arg(allow_negative_numbers = true)]
        angle_deg: f64,

        /// Write an SVG plot of the flight to this file or directory
        #[arg(long, value_name = "PATH")]
        plot: Option<PathBuf>,

        /// Print every sampled position
        #[arg(long)]
        trace: bool,
    },
    /// Simulate a range of launch angles and compare ranges
    Sweep {
        /// Ledge height (m), defaults to the configured launch height
        #[arg(long)]
        height: Option<f64>,

        /// Launch speed (m/s), defaults to the configured launch speed
        #[arg(long)]
        speed: Option<f64>,

        #[arg(long, default_value = "-90", allow_negative_numbers = true)]
        from: f64,

        #[arg(long, default_value = "90", allow_negative_numbers = true)]
        to: f64,

        #[arg(long, default_value = "5")]
        step: f64,
    },
}

fn read_f64(prompt: &str) -> Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| SimError::Input(format!("Failed to flush stdout: {e}")))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| SimError::Input(format!("Could not read input: {e}")))?;

        if bytes == 0 {
            return Err(SimError::Input("Input ended unexpectedly (EOF).".to_string()));
        }

        match line.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => eprintln!("Please enter a valid number (e.g., 30 or 2.5)."),
        }
    }
}

fn get_params_from_user() -> Result<LaunchParameters> {
    Ok(LaunchParameters {
        height_m: read_f64("Ledge height (m): ")?,
        speed_mps: read_f64("Launch speed (m/s): ")?,
        angle_deg: read_f64("Launch angle (degrees): ")?,
    })
}

fn print_report(report: &RunReport, time_step_s: f64, show_trace: bool) {
    if show_trace {
        println!("{:>8}  {:>10}  {:>10}", "t (s)", "x (m)", "h (m)");
        for (t, sample) in report.timed_path(time_step_s) {
            println!("{:>8.3}  {:>10.4}  {:>10.4}", t, sample.x_m, sample.height_m);
        }
    }

    println!("\nOutcome: {}", report.status.label());
    match &report.result {
        Some(result) => {
            println!("Time of flight: {:.4} s", result.time_of_flight_s);
            println!("Range: {:.4} m", result.range_m);
            println!(
                "Peak height: {:.4} m (closed form {:.4} m)",
                result.peak_height_m,
                peak_height(report.params).max(0.0)
            );
            println!("{}", result.safety.message);
        }
        None => println!(
            "Left the visible area after {:.4} s; no measurements available.",
            report.elapsed_s
        ),
    }
}

fn run_single(
    params: LaunchParameters,
    config: &SimulationConfig,
    plot: Option<PathBuf>,
    show_trace: bool,
) -> Result<()> {
    let report = simulate(params, &config.driver_config(), config.tick_limit)?;
    print_report(&report, config.time_step_s, show_trace);

    if report.status == SimulationStatus::LandedOnGround {
        if let Some(exact) = contact_time(params, config.body_radius_m) {
            log::info!(
                "exact contact at {exact:.4} s, sampled {:.4} s",
                report.elapsed_s
            );
        }
    }

    if let Some(requested) = plot {
        let path = resolve_plot_path(&requested, Local::now());
        render_trajectory_svg(&report, &path)?;
        println!("Plot written to {}", path.display());
    }
    Ok(())
}

fn run_sweep(
    base: LaunchParameters,
    config: &SimulationConfig,
    from: f64,
    to: f64,
    step: f64,
) -> Result<()> {
    let angles = angle_range(from, to, step)?;
    let rows = sweep_angles(base, &angles, &config.driver_config(), config.tick_limit);

    println!(
        "{:>8}  {:>16}  {:>10}  {:>10}  {:>8}  {:>7}",
        "angle", "outcome", "range", "peak", "time", "adverse"
    );
    for row in &rows {
        match &row.report {
            Ok(report) => match &report.result {
                Some(result) => println!(
                    "{:>8.1}  {:>16}  {:>10.3}  {:>10.3}  {:>8.3}  {:>7}",
                    row.angle_deg,
                    report.status.label(),
                    result.range_m,
                    result.peak_height_m,
                    result.time_of_flight_s,
                    if result.safety.is_adverse { "yes" } else { "no" }
                ),
                None => println!(
                    "{:>8.1}  {:>16}  {:>10}  {:>10}  {:>8}  {:>7}",
                    row.angle_deg,
                    report.status.label(),
                    "--",
                    "--",
                    "--",
                    "--"
                ),
            },
            Err(err) => println!("{:>8.1}  {err}", row.angle_deg),
        }
    }

    if let Some(best) = best_range(&rows) {
        println!("\nLongest landed range at {:.1} deg", best.angle_deg);
    }
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for_verbosity(cli.verbose));

    let config = match &cli.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    match cli.command {
        None => {
            let params = get_params_from_user()?;
            run_single(params, &config, None, false)
        }
        Some(Commands::Run {
            height_m,
            speed_mps,
            angle_deg,
            plot,
            trace,
        }) => run_single(
            LaunchParameters::new(height_m, speed_mps, angle_deg),
            &config,
            plot,
            trace,
        ),
        Some(Commands::Sweep {
            height,
            speed,
            from,
            to,
            step,
        }) => {
            let base = LaunchParameters {
                height_m: height.unwrap_or(config.launch.height_m),
                speed_mps: speed.unwrap_or(config.launch.speed_mps),
                ..config.launch
            };
            run_sweep(base, &config, from, to, step)
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
