use std::any::Any;
use std::panic;
use std::process::ExitCode;

use clap::Parser;
use landio::cli::Cli;
use landio::commands::run;

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Quietly exit when downstream closes the pipe (e.g. piping to `head`).
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

fn main() -> ExitCode {
    install_broken_pipe_handler();

    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            let msg = format!("{:?}", e);
            if msg.contains("Broken pipe") || msg.contains("os error 32") {
                ExitCode::SUCCESS
            } else {
                eprintln!("[landio] Error: {:#}", e);
                ExitCode::FAILURE
            }
        }
    }
}
