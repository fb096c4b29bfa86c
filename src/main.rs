mod cli;
use std::process::ExitCode;

use log::error;
use yourlibrary_html::library::Error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Error::Usage { message } = &err {
                print!("{message}");
                eprint!("{}", cli::usage());
            } else {
                error!("{err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
