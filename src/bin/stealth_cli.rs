use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use tracing_subscriber::EnvFilter;

use stealth_engine::{
    composite_performance, run_monte_carlo, sweep_candidates, upgrade_leading_edge,
    AdversaryParams, MonteCarloParams, PlaneParams, UpgradeResult,
};

#[derive(Parser)]
#[command(name = "stealth")]
#[command(version = "0.1.0")]
#[command(about = "Leading-edge angle and stealth upgrade calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(clap::Args, Debug)]
struct PlaneArgs {
    /// Plane mass (kg)
    #[arg(long, default_value = "20000.0")]
    mass: f64,

    /// Specific impulse (s)
    #[arg(long, default_value = "300.0")]
    isp: f64,

    /// Gravitational acceleration (m/s²)
    #[arg(long, default_value = "9.81")]
    gravity: f64,

    /// Unswept base radar cross section (m²)
    #[arg(long, default_value = "0.1")]
    base_rcs: f64,

    /// Shape factor (dimensionless)
    #[arg(long, default_value = "5.0")]
    shape_factor: f64,

    /// Material factor (dimensionless)
    #[arg(long, default_value = "8.0")]
    material_factor: f64,

    /// Radar frequency band (GHz)
    #[arg(long, default_value = "10.0")]
    frequency_band: f64,

    /// Adversary mass (kg)
    #[arg(long, default_value = "15000.0")]
    adversary_mass: f64,
}

impl PlaneArgs {
    fn to_params(&self) -> (PlaneParams, AdversaryParams) {
        (
            PlaneParams {
                mass: self.mass,
                isp: self.isp,
                gravity: self.gravity,
                base_rcs: self.base_rcs,
                shape_factor: self.shape_factor,
                material_factor: self.material_factor,
                frequency_band: self.frequency_band,
            },
            AdversaryParams { mass: self.adversary_mass },
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a full leading-edge upgrade
    Upgrade {
        #[command(flatten)]
        plane: PlaneArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Sweep candidate angles and list every score
    Sweep {
        #[command(flatten)]
        plane: PlaneArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Evaluate the raw performance metric on two comma-separated lists
    Score {
        /// Residues: "mi,mf" or "mi,thrust,isp"
        #[arg(long, value_delimiter = ',')]
        residues: Vec<f64>,

        /// Moduli: "isp,g" or "mf,burn_time,g"
        #[arg(long, value_delimiter = ',')]
        moduli: Vec<f64>,
    },

    /// Dispersion analysis over perturbed plane parameters
    MonteCarlo {
        #[command(flatten)]
        plane: PlaneArgs,

        /// Number of simulations
        #[arg(short = 'n', long, default_value = "1000")]
        num_sims: usize,

        /// Plane mass standard deviation (kg)
        #[arg(long, default_value = "200.0")]
        mass_std: f64,

        /// Specific impulse standard deviation (s)
        #[arg(long, default_value = "5.0")]
        isp_std: f64,

        /// Base RCS standard deviation (m²)
        #[arg(long, default_value = "0.005")]
        base_rcs_std: f64,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Upgrade { plane, output } => {
            let (plane, adversary) = plane.to_params();
            let result = upgrade_leading_edge(&plane, &adversary)?;
            display_upgrade_result(&result, output)?;
        }

        Commands::Sweep { plane, output } => {
            let (plane, adversary) = plane.to_params();
            let candidates = sweep_candidates(&plane, &adversary);
            display_sweep_candidates(&candidates, output)?;
        }

        Commands::Score { residues, moduli } => {
            let score = composite_performance(&residues, &moduli);
            println!("{score}");
        }

        Commands::MonteCarlo {
            plane,
            num_sims,
            mass_std,
            isp_std,
            base_rcs_std,
            seed,
            output,
        } => {
            let (plane, adversary) = plane.to_params();
            let params = MonteCarloParams { num_sims, mass_std, isp_std, base_rcs_std, seed };
            let results = run_monte_carlo(&plane, &adversary, &params)?;

            match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                }
                OutputFormat::Csv => {
                    println!("metric,mean,std,min,max");
                    let s = &results.combined_score;
                    println!("combined_score,{:.6},{:.6},{:.6},{:.6}", s.mean, s.std, s.min, s.max);
                    let e = &results.stealth_improvement;
                    println!(
                        "stealth_improvement,{:.8},{:.8},{:.8},{:.8}",
                        e.mean, e.std, e.min, e.max
                    );
                }
                OutputFormat::Table => {
                    println!("╔════════════════════════════════════════╗");
                    println!("║       DISPERSION ANALYSIS              ║");
                    println!("║       {:>6} valid / {:>6} failed     ║", results.valid_runs, results.failed_runs);
                    println!("╠════════════════════════════════════════╣");
                    println!("║ COMBINED SCORE                         ║");
                    println!("║ Mean:              {:>12.4}        ║", results.combined_score.mean);
                    println!("║ Std Dev:           {:>12.4}        ║", results.combined_score.std);
                    println!("║ Min:               {:>12.4}        ║", results.combined_score.min);
                    println!("║ Max:               {:>12.4}        ║", results.combined_score.max);
                    println!("╠════════════════════════════════════════╣");
                    println!("║ OPTIMAL ANGLE HISTOGRAM                ║");
                    for (angle, count) in &results.angle_histogram {
                        println!("║ {:>3}°:              {:>12}        ║", angle, count);
                    }
                    println!("╚════════════════════════════════════════╝");
                }
            }
        }
    }

    Ok(())
}

fn display_upgrade_result(result: &UpgradeResult, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }

        OutputFormat::Csv => {
            println!("optimal_angle_deg,combined_score,stealth_improvement");
            let angle = result
                .optimal_angle
                .map(|a| a.to_string())
                .unwrap_or_else(|| "none".to_string());
            println!("{},{:.6},{:.8}", angle, result.combined_score, result.stealth_improvement);
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         UPGRADE EVALUATION             ║");
            println!("╠════════════════════════════════════════╣");
            match result.optimal_angle {
                Some(angle) => println!("║ Optimal Angle:     {angle:>8}°          ║"),
                None => println!("║ Optimal Angle:         none            ║"),
            }
            println!("║ Combined Score:    {:>12.4}        ║", result.combined_score);
            println!("║ Stealth Ratio:     {:>12.8}      ║", result.stealth_improvement);
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_sweep_candidates(
    candidates: &[stealth_engine::CandidateScore],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(candidates)?);
        }

        OutputFormat::Csv => {
            println!("angle_deg,rcs,performance,score");
            for c in candidates {
                println!("{},{:.8},{:.6},{:.6}", c.angle_deg, c.rcs, c.performance, c.score);
            }
        }

        OutputFormat::Table => {
            println!("┌───────────┬────────────┬──────────────┬──────────────┐");
            println!("│ Angle (°) │  RCS (m²)  │ Performance  │    Score     │");
            println!("├───────────┼────────────┼──────────────┼──────────────┤");
            for c in candidates {
                println!(
                    "│ {:>9} │ {:>10.6} │ {:>12.4} │ {:>12.6} │",
                    c.angle_deg, c.rcs, c.performance, c.score
                );
            }
            println!("└───────────┴────────────┴──────────────┴──────────────┘");
        }
    }

    Ok(())
}
