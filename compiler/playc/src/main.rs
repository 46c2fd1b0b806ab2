//! Play CLI
//!
//! Runs a function of a JSON block document against an in-memory request.

use playc::{init_tracing, parse_run_args, run};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    init_tracing();

    match args[1].as_str() {
        "run" => {
            if args.len() < 3 {
                print_run_usage();
                std::process::exit(1);
            }

            let options = match parse_run_args(&args[2..]) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("error: {err}");
                    print_run_usage();
                    std::process::exit(1);
                }
            };

            match run(&options) {
                Ok(report) => {
                    println!("{report}");
                    if let Some(err) = report.outcome.error() {
                        if let Some(backtrace) = &err.backtrace {
                            eprint!("{backtrace}");
                        }
                        std::process::exit(1);
                    }
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("play {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Play block interpreter");
    println!();
    println!("Usage: play <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <doc.json>   Run a document against an in-memory request");
    println!("  help             Show this message");
    println!("  version          Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG              Enable logging (e.g. play_eval=debug)");
    println!("  PLAY_LOG_TREE         Render log spans as a call tree");
    println!("  PLAY_POOL_CAPACITY    Idle environments kept for reuse");
    println!("  PLAY_MAX_CALL_DEPTH   Nested call limit (0 = unlimited)");
}

fn print_run_usage() {
    eprintln!("Usage: play run <doc.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --namespace=<ns>         Namespace of the document (default: main)");
    eprintln!("  --method=<method>        Request method (default: GET)");
    eprintln!("  --function=<name>        Entry function (default: the method)");
    eprintln!("  --param=<name>=<value>   Request parameter, repeatable");
    eprintln!("  --module=<ns>=<path>     Additional module, repeatable");
}
