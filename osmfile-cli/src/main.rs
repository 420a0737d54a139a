//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = osmfile_cli::run() {
        eprintln!("osmfile: {err}");
        std::process::exit(1);
    }
}
