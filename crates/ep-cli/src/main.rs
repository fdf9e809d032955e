use clap::Parser;
use tracing::error;

use ep_cli::{commands, logging, Cli, ExitCode};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    let mut stdout = std::io::stdout().lock();
    let code = match commands::run(&cli, &mut stdout) {
        Ok(code) => code,
        Err(err) => {
            error!(code = err.code(), "{err}");
            ExitCode::from_error(&err)
        }
    };
    std::process::exit(code.as_i32());
}
