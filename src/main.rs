use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use compound_interest::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "compound-interest")]
#[command(about = "A compound interest calculator with periodic deposits", long_about = None)]
struct Cli {
    //log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //run one calculation from command line arguments
    Run {
        //starting principal
        #[arg(long)]
        initial: f64,

        //yearly interest percentage
        #[arg(long)]
        rate: f64,

        //number of years
        #[arg(long)]
        years: u32,

        //deposit interval (D, W, M, Y or Daily, Weekly, Monthly, Yearly)
        #[arg(long, default_value = "M")]
        interval: Interval,

        //amount deposited every interval
        #[arg(long, default_value = "0")]
        deposit: f64,

        //write csv, json and chart data to a results folder
        #[arg(long)]
        save: bool,

        //base directory for the results folder (overrides config)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        //print the year-by-year table
        #[arg(long)]
        show_table: bool,

        //path to a json configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    //ask for inputs interactively
    Interactive {
        //path to a json configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    //write the default configuration to a json file
    InitConfig {
        //destination path
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Commands::Run {
            initial,
            rate,
            years,
            interval,
            deposit,
            save,
            output_dir,
            show_table,
            config,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            config.show_yearly_table |= show_table;

            let params = SimulationParameters::new(initial, rate, years, interval, deposit);
            run_calculation(&params, &config, save)?;
        }
        Commands::Interactive { config } => {
            let config = load_config(config.as_deref())?;
            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
            InteractiveSession::new(&config)
                .run(&mut prompter, || chrono::Local::now().naive_local())?;
        }
        Commands::InitConfig { path } => {
            CalculatorConfiguration::default()
                .to_json_file(&path)
                .context(format!("Failed to write configuration to {:?}", path))?;
            println!("Default configuration written to {:?}", path);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CalculatorConfiguration> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            CalculatorConfiguration::from_json_file(path)
                .context(format!("Failed to load configuration from {:?}", path))
        }
        None => Ok(CalculatorConfiguration::default()),
    }
}

fn run_calculation(
    params: &SimulationParameters,
    config: &CalculatorConfiguration,
    save: bool,
) -> Result<()> {
    params.validate(&config.limits)?;

    println!("Compound Interest Calculator");
    println!("============================\n");
    println!("Initial amount: {}", format_currency(params.initial_amount));
    println!("Yearly interest: {}%", params.annual_rate_percent);
    println!(
        "Deposit: {} {}",
        format_currency(params.deposit_per_period),
        params.interval
    );
    println!("Years: {}\n", params.years);

    let records = simulate(params);

    println!("Investment Results");
    println!("==================\n");
    match summarize(&records) {
        Ok(summary) => summary.pretty_print_table(),
        Err(err) => {
            warn!(error = %err, "summary unavailable");
            println!("No summary available: {}", err);
        }
    }

    if config.show_yearly_table {
        println!();
        yearly_table(&records).printstd();
    }

    if save {
        let files = save_results(
            &records,
            params,
            &config.output_dir,
            chrono::Local::now().naive_local(),
        )?;

        println!("\nData saved in folder: {:?}", files.folder);
        println!("  - {:?}", files.csv);
        println!("  - {:?}", files.json);
        if let Some(chart_data) = files.chart_data {
            println!("  - {:?}", chart_data);
        }
    }

    Ok(())
}
