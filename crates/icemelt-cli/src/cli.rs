use clap::{Parser, Subcommand, ValueEnum};
use icemelt_core::{IceThickness, Scenario};

#[derive(Parser, Debug)]
#[command(name = "icemelt", author, version, about = "Lake ice melt projection over a 14-day forecast", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project the ice day by day and print the headline days
    Project {
        /// Starting ice thickness in cm (10-40)
        #[arg(long, default_value = "25", value_parser = parse_thickness)]
        thickness: IceThickness,
        /// Melt scenario: low, mid or high
        #[arg(long, default_value = "mid")]
        scenario: Scenario,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List the melt scenario presets
    Scenarios,
    /// Headline days for every scenario across the thickness range
    Matrix,
    /// Explain how the projection is computed
    Explain,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_thickness(s: &str) -> Result<IceThickness, String> {
    let cm: i32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a whole number of centimetres"))?;
    IceThickness::new(cm).map_err(|e| e.to_string())
}
