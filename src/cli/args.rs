use crate::readers::RowPolicy;
use crate::utils::constants::DEFAULT_BIND_ADDR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-dashboard")]
#[command(about = "Interactive dashboard of historical land temperatures")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "What to do with malformed rows: abort or skip [default: abort]"
    )]
    pub row_policy: Option<RowPolicy>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the dashboard and write it as an HTML page
    Render {
        #[arg(
            short,
            long,
            help = "Directory holding the two temperature CSV files [default: data]"
        )]
        data_dir: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/climate-dashboard-{YYMMDD}.html]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, default_value = "false", help = "Write the chart descriptions as JSON instead")]
        json: bool,
    },

    /// Serve the dashboard over HTTP
    Serve {
        #[arg(
            short,
            long,
            help = "Directory holding the two temperature CSV files [default: data]"
        )]
        data_dir: Option<PathBuf>,

        #[arg(short, long, default_value = DEFAULT_BIND_ADDR)]
        bind: String,
    },

    /// Print statistics about the input tables
    Summary {
        #[arg(
            short,
            long,
            help = "Directory holding the two temperature CSV files [default: data]"
        )]
        data_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "climate-dashboard",
            "render",
            "--data-dir",
            "fixtures",
            "--json",
            "--row-policy",
            "skip",
        ]);

        assert_eq!(cli.row_policy, Some(RowPolicy::Skip));
        match cli.command {
            Commands::Render {
                data_dir,
                json,
                output_file,
            } => {
                assert_eq!(data_dir, Some(PathBuf::from("fixtures")));
                assert!(json);
                assert_eq!(output_file, None);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_serve_default_bind() {
        let cli = Cli::parse_from(["climate-dashboard", "serve"]);
        match cli.command {
            Commands::Serve { bind, .. } => assert_eq!(bind, "127.0.0.1:8501"),
            _ => panic!("expected serve"),
        }
    }
}
