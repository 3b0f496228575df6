use std::process::ExitCode;

use clap::Parser;
use log::error;

#[derive(Parser)]
#[command(author, version, about = "Print k tokens from stdin, chosen uniformly at random", long_about = None)]
struct CliArgument {
    /// How many tokens to print
    k: usize,
}

fn main() -> ExitCode {
    let args = CliArgument::parse();
    yyqueue::init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match yyqueue::subset::run(args.k, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_empty_container() => {
            error!("Asked for {} tokens but the input ran out: {}", args.k, err);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("Subset failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
