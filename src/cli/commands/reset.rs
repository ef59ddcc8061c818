//! Reset command implementation
//!
//! Removes the per-user solar-system store copy so the next import starts
//! from the installation default again. The installation store itself is
//! never touched.

use tracing::info;

use super::shared::setup_logging;
use crate::app::services::ssystem_store::StoreLayout;
use crate::cli::args::ResetArgs;
use crate::config::Config;
use crate::Result;

/// Reset command runner
pub fn run_reset(args: ResetArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false);

    let mut config = Config::default();
    if let Some(user_data_dir) = &args.user_data_dir {
        config = config.with_user_data_dir(user_data_dir.clone());
    }

    let layout = StoreLayout::from_config(&config);
    info!("Resetting user store at {}", layout.user_store().display());

    if layout.reset_user_store()? {
        println!("Removed user store: {}", layout.user_store().display());
    } else {
        println!(
            "No user store to remove at {}",
            layout.user_store().display()
        );
    }

    Ok(())
}
