use clap::Parser;
use docextract::{Cli, DocExtract};
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    // clap exits with its own code on parse failure; map every usage error
    // to exit code 1 and keep the usage text.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    let docextract = DocExtract::from_cli(&cli);

    match docextract.run(&cli.input_file, &cli.output_file, &cli.config_file) {
        Ok(_) => 0,
        Err(e) => {
            docextract.handle_error(&e);
            1
        }
    }
}
