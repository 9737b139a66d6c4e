use clap::Parser;
use android_layout_ids::ToolError;
use android_layout_ids::cli::commands::{InjectFlags, cmd_diff, cmd_inject};
use android_layout_ids::cli::config::{Cli, Commands, load_config};
use android_layout_ids::trace::logger::TraceLogger;

fn main() {
    let code = match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32, ToolError> {
    let config = load_config(cli.config.as_deref());

    // Trace path: CLI > config
    let trace_path = cli.trace.as_deref().or(config.trace.path.as_deref());
    let tracer = TraceLogger::from_option(trace_path);

    match cli.command {
        Commands::Inject {
            roots,
            dry_run,
            keep_going,
            unique,
        } => {
            let flags = InjectFlags {
                dry_run,
                keep_going,
                unique,
            };
            let all_ok = cmd_inject(&roots, flags, &config, &tracer, cli.verbose)?;
            Ok(if all_ok { 0 } else { 1 })
        }
        Commands::Diff { files, program } => {
            cmd_diff(&files, program.as_deref(), &config, &tracer, cli.verbose)
        }
    }
}
