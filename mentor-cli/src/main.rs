//! Entry point for the `mentor-match` command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "the binary reports fatal errors on stderr")]
fn main() {
    mentor_cli::init_logging();
    if let Err(err) = mentor_cli::run() {
        eprintln!("mentor-match: {err}");
        std::process::exit(1);
    }
}
