use crate::analyzers::DatasetAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::pipeline::{Dashboard, DashboardData};
use crate::readers::{DatasetLoader, Datasets};
use crate::server::DashboardServer;
use crate::settings::DashboardSettings;
use crate::utils::filename::{
    generate_default_dashboard_filename, generate_default_figures_filename,
};
use crate::utils::progress::ProgressReporter;
use crate::writers::{write_figures_json, HtmlWriter};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let settings = DashboardSettings::load(cli.config.as_deref())?.with_row_policy(cli.row_policy);
    debug!("Settings: {:?}", settings);

    match cli.command {
        Commands::Render {
            data_dir,
            output_file,
            json,
        } => {
            let settings = settings.with_data_dir(data_dir);
            let progress = ProgressReporter::new_spinner("Loading datasets...", cli.quiet);
            let datasets = load_datasets(&settings, &progress)?;

            progress.set_message("Building charts...");
            let dashboard = Dashboard::build(&datasets, &settings);

            let output_file = output_file.unwrap_or_else(|| default_output(json));
            progress.set_message("Writing output...");
            if json {
                write_figures_json(&dashboard, &output_file)?;
            } else {
                HtmlWriter::new().write(&dashboard, &output_file)?;
            }

            progress.finish_with_message(&format!("Wrote {}", output_file.display()));
            if progress.is_silent() {
                println!("{}", output_file.display());
            }
        }

        Commands::Serve { data_dir, bind } => {
            let settings = settings.with_data_dir(data_dir);
            let progress = ProgressReporter::new_spinner("Loading datasets...", cli.quiet);
            let datasets = load_datasets(&settings, &progress)?;
            progress.finish_with_message(&format!(
                "Loaded {} country rows and {} global rows",
                datasets.countries.len(),
                datasets.global.len()
            ));

            DashboardServer::new(datasets, settings, &bind).start().await?;
        }

        Commands::Summary { data_dir } => {
            let settings = settings.with_data_dir(data_dir);
            let progress = ProgressReporter::new_spinner("Loading datasets...", cli.quiet);
            let datasets = load_datasets(&settings, &progress)?;

            progress.set_message("Aggregating...");
            let data = DashboardData::compute(&datasets, &settings);
            let stats = DatasetAnalyzer::new().analyze(&datasets, &data);
            progress.finish_with_message("Analysis complete");

            println!("\n{}", stats.summary());
        }
    }

    Ok(())
}

fn load_datasets(settings: &DashboardSettings, progress: &ProgressReporter) -> Result<Datasets> {
    info!("Loading datasets from {}", settings.data_dir.display());
    DatasetLoader::new(&settings.data_dir)
        .with_row_policy(settings.row_policy)
        .load(Some(progress))
}

fn default_output(json: bool) -> PathBuf {
    if json {
        generate_default_figures_filename()
    } else {
        generate_default_dashboard_filename()
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    // A subscriber may already be installed when embedded, keep that one
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        debug!("Tracing subscriber already installed");
    }
}
