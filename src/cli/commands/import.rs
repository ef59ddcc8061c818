//! Import command implementation
//!
//! Orchestrates the import workflow: argument validation, store bootstrap,
//! batch import and summary reporting.

use std::time::Instant;

use tracing::{debug, info};

use super::shared::{create_progress_bar, report_human, report_json, setup_logging, ImportReport};
use crate::app::services::importer::{BatchImporter, DiscardSink, ImportStats};
use crate::app::services::mpc_parser::ParserOptions;
use crate::app::services::ssystem_store::{SolarSystemStore, StoreLayout};
use crate::cli::args::{ImportArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};

/// Import command runner
///
/// 1. Set up logging and validate arguments
/// 2. Ensure a writable per-user store exists (unless dry-running)
/// 3. Run the batch import with one flush at the end
/// 4. Report aggregate counts; an import that accepts nothing is an error
pub fn run_import(args: ImportArgs) -> Result<ImportStats> {
    setup_logging(args.get_log_level(), args.quiet);

    info!("Starting MPC comet-element import");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = build_config(&args);
    config.validate()?;

    let options = ParserOptions {
        variable_precision: config.parser.variable_precision,
    };
    let mut importer = BatchImporter::new(options);
    if args.show_progress() {
        importer = importer.with_progress(create_progress_bar("importing comet elements"));
    }

    let start_time = Instant::now();
    let (stats, store_path) = if args.dry_run {
        info!("Dry run - parsing without touching the store");
        let mut sink = DiscardSink::default();
        let stats = importer.import_file(&args.elements_file, &mut sink)?;
        (stats, None)
    } else {
        let layout = StoreLayout::from_config(&config);
        layout.ensure_user_store()?;

        let mut store = SolarSystemStore::open(layout.user_store())?;
        let stats = run_batch(&importer, &args, &mut store)?;
        (stats, Some(layout.user_store().display().to_string()))
    };
    let duration = start_time.elapsed();

    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                report_human(&stats, store_path.as_deref(), args.dry_run, duration);
            }
        }
        OutputFormat::Json => {
            report_json(&ImportReport {
                source: args.elements_file.display().to_string(),
                store: store_path.clone(),
                dry_run: args.dry_run,
                duration_secs: duration.as_secs_f64(),
                stats: &stats,
            })?;
        }
    }

    if !stats.is_successful() {
        return Err(Error::empty_import(
            args.elements_file.display().to_string(),
            stats.lines_rejected,
        ));
    }

    if !args.dry_run {
        info!("Reload the host's solar-system bodies to pick up the imported elements");
    }

    Ok(stats)
}

fn run_batch(
    importer: &BatchImporter,
    args: &ImportArgs,
    store: &mut SolarSystemStore,
) -> Result<ImportStats> {
    let sections_before = store.len();
    let stats = importer.import_file(&args.elements_file, store)?;
    debug!(
        "Store grew from {} to {} sections",
        sections_before,
        store.len()
    );
    Ok(stats)
}

fn build_config(args: &ImportArgs) -> Config {
    let mut config = Config::default();
    if let Some(user_data_dir) = &args.user_data_dir {
        config = config.with_user_data_dir(user_data_dir.clone());
    }
    if let Some(default_store) = &args.default_store {
        config = config.with_default_store(default_store.clone());
    }
    if args.variable_precision {
        config = config.with_variable_precision();
    }
    config
}
