mod input;
mod report;

use clap::{Args, Parser, Subcommand, ValueEnum};
use isoline_solver::{CornerPointSolver, Goal, PlotData, Problem, ProblemError, Solution, DEFAULT_SAMPLES};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use report::Report;

#[derive(Parser)]
#[command(name = "isoline")]
#[command(about = "Solve two-variable linear programs by corner-point enumeration", long_about = None)]
struct Cli {
    /// Log solver decisions to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Maximize Z subject to two <= constraints
    Maximize(ModeArgs),
    /// Minimize Z subject to two >= constraints
    Minimize(ModeArgs),
    /// Find both extrema of Z subject to one <= and one >= constraint
    Optimize(ModeArgs),
    /// Solve a problem described in a JSON file
    Solve {
        /// The problem file
        file: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct ModeArgs {
    /// First constraint coefficients a,b,c
    #[arg(long, value_parser = parse_coefficients::<3>, allow_hyphen_values = true)]
    first: [f64; 3],
    /// Second constraint coefficients a,b,c
    #[arg(long, value_parser = parse_coefficients::<3>, allow_hyphen_values = true)]
    second: [f64; 3],
    /// Objective coefficients g,h for Z = g*x + h*y
    #[arg(long, value_parser = parse_coefficients::<2>, allow_hyphen_values = true)]
    objective: [f64; 2],
    /// Upper bound of the x-axis
    #[arg(long)]
    x_max: f64,
    /// Upper bound of the y-axis
    #[arg(long)]
    y_max: f64,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
    format: Format,
    /// Include plot data (lines, feasible band, isolines) in JSON output
    #[arg(long)]
    plot_data: bool,
    /// Number of x samples for plot data
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    goal: Goal,
    problem: &'a Problem,
    solution: &'a Solution,
    #[serde(skip_serializing_if = "Option::is_none")]
    plot: Option<PlotData>,
}

fn parse_coefficients<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| format!("{:?}: {}", part.trim(), e)))
        .collect::<Result<Vec<_>, _>>()?;
    let count = values.len();
    values
        .try_into()
        .map_err(|_| format!("expected {} comma-separated numbers, got {}", N, count))
}

type Constructor = fn([f64; 3], [f64; 3], [f64; 2], [f64; 2]) -> Result<Problem, ProblemError>;

fn from_args(args: ModeArgs, goal: Goal, make: Constructor) -> Result<(Goal, Problem, OutputArgs), String> {
    make(args.first, args.second, args.objective, [args.x_max, args.y_max])
        .map(|problem| (goal, problem, args.output))
        .map_err(|e| format!("Invalid problem: {}", e))
}

fn build(command: Commands) -> Result<(Goal, Problem, OutputArgs), String> {
    match command {
        Commands::Maximize(args) => from_args(args, Goal::Maximize, Problem::maximize),
        Commands::Minimize(args) => from_args(args, Goal::Minimize, Problem::minimize),
        Commands::Optimize(args) => from_args(args, Goal::Both, Problem::optimize),
        Commands::Solve { file, output } => input::load(&file)
            .map(|(goal, problem)| (goal, problem, output))
            .map_err(|e| e.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    if cli.verbose > 0 {
        let level = if cli.verbose > 1 { Level::TRACE } else { Level::DEBUG };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to set tracing subscriber: {}", e);
            std::process::exit(1);
        }
    }

    let (goal, problem, output) = match build(cli.command) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let solver = CornerPointSolver::new();
    let solution = solver.solve(&problem, goal);

    match output.format {
        Format::Pretty => {
            print!("{}", Report { problem: &problem, solution: &solution });
        }
        Format::Json => {
            let plot = output
                .plot_data
                .then(|| PlotData::build(&problem, &solution, goal, output.samples));
            let json = JsonOutput {
                goal,
                problem: &problem,
                solution: &solution,
                plot,
            };
            match serde_json::to_string_pretty(&json) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error serializing output: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    if !solution.is_optimal() {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_coefficients() {
        assert_eq!(parse_coefficients::<3>("2,1,300"), Ok([2.0, 1.0, 300.0]));
        assert_eq!(parse_coefficients::<2>(" -1.5, 4 "), Ok([-1.5, 4.0]));
        assert!(parse_coefficients::<3>("1,2").is_err());
        assert!(parse_coefficients::<2>("1,x").is_err());
    }

    #[test]
    fn test_mode_arguments() {
        let cli = Cli::try_parse_from([
            "isoline", "minimize", "--first", "5,3,30", "--second", "4,3,24",
            "--objective", "20000,16000", "--x-max", "15", "--y-max", "15",
        ])
        .unwrap();
        let (goal, problem, output) = build(cli.command).unwrap();

        assert_eq!(goal, Goal::Minimize);
        assert_eq!(problem.constraints()[0].c, 30.0);
        assert!(output.format == Format::Pretty);

        let solution = CornerPointSolver::new().solve(&problem, goal);
        let min = solution.minimum.expect("minimum");
        assert!((min.objective_value - 120000.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_coefficients_and_bad_bounds() {
        let cli = Cli::try_parse_from([
            "isoline", "maximize", "--first", "-1,1,2", "--second", "1,1,6",
            "--objective", "1,1", "--x-max", "0", "--y-max", "5", "-f", "json",
        ])
        .unwrap();
        let err = build(cli.command).err().expect("zero bound is rejected");
        assert!(err.contains("x bound must be a positive finite number"), "{}", err);
    }
}
