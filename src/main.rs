use bench_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Bench Processor - Lab Measurement Compiler");
    println!("==========================================");
    println!();
    println!("Compile lab bench measurement exports (CSV/TXT) into a");
    println!("tolerance-checked result table.");
    println!();
    println!("USAGE:");
    println!("    bench-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Process a measurement directory into a results table");
    println!("    scan        List the measurement-type labels each text log exposes");
    println!("    decode      Decode test metadata from every filename in a directory");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process the current directory with defaults:");
    println!("    bench-processor process");
    println!();
    println!("    # Process with tolerance windows and a type selection:");
    println!("    bench-processor process --input /data/run1 --tolerances windows.json \\");
    println!("                            --measurement-type Voltage");
    println!();
    println!("    # List the labels that need a selection first:");
    println!("    bench-processor scan --input /data/run1");
    println!();
    println!("For detailed help on any command, use:");
    println!("    bench-processor <COMMAND> --help");
}
