use clap::Parser;
use mpc_importer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("MPC Importer - Comet Orbital-Element Importer");
    println!("=============================================");
    println!();
    println!("Import comet orbital elements published in the Minor Planet Center");
    println!("one-line format into a per-user solar-system configuration store.");
    println!();
    println!("USAGE:");
    println!("    mpc-importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Import comet elements from an MPC element file (main command)");
    println!("    reset       Remove the per-user solar-system store copy");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Import the MPC's observable-comets file:");
    println!("    mpc-importer import Soft00Cmt.txt");
    println!();
    println!("    # Accept real-world records with fewer fractional digits:");
    println!("    mpc-importer import Soft00Cmt.txt --variable-precision");
    println!();
    println!("    # Preview without touching the store:");
    println!("    mpc-importer import Soft00Cmt.txt --dry-run");
    println!();
    println!("For detailed help on any command, use:");
    println!("    mpc-importer <COMMAND> --help");
}
