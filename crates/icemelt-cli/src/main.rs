use anyhow::Result;
use clap::Parser;
use icemelt_core::{Controller, IceThickness, MeltConfig, Scenario, WeatherWindow};
use serde_json::json;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod render;

use cli::{Cli, Commands, OutputFormat};

/// Thicknesses shown by `icemelt matrix` [cm].
const MATRIX_THICKNESSES: [i32; 7] = [10, 15, 20, 25, 30, 35, 40];

fn run_project(thickness: IceThickness, scenario: Scenario, format: OutputFormat) -> Result<()> {
    let controller = Controller::with_inputs(WeatherWindow::forecast(), thickness, scenario);
    info!(thickness_cm = thickness.cm(), %scenario, "projecting forecast window");

    match format {
        OutputFormat::Table => {
            println!(
                "Ice melt projection: {} cm start, {} ({})\n",
                thickness.cm(),
                scenario.label(),
                scenario.description()
            );
            println!("{}", render::headlines(&controller));
            print!("{}", render::day_table(&controller)?);
        }
        OutputFormat::Json => {
            let doc = json!({
                "scenario": scenario,
                "thickness_cm": thickness,
                "config": MeltConfig::default(),
                "headlines": {
                    "unsafe": controller.unsafe_headline(),
                    "ice_gone": controller.ice_gone_headline(),
                },
                "projection": controller.projection(),
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn run_matrix() -> Result<()> {
    let mut controller = Controller::default();
    println!("{:<6} {:>6}   {:<12} {:<12}", "Scen.", "Ice", "Unsafe", "Gone");
    for scenario in Scenario::ALL {
        controller.set_scenario(scenario);
        for cm in MATRIX_THICKNESSES {
            controller.set_thickness(IceThickness::new(cm)?);
            println!(
                "{:<6} {:>3} cm   {:<12} {:<12}",
                scenario.key(),
                cm,
                controller.unsafe_headline(),
                controller.ice_gone_headline()
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Project {
            thickness,
            scenario,
            format,
        } => run_project(thickness, scenario, format),
        Commands::Scenarios => {
            print!("{}", render::scenario_list()?);
            Ok(())
        }
        Commands::Matrix => run_matrix(),
        Commands::Explain => {
            print!("{}", render::EXPLAIN);
            Ok(())
        }
    }
}
