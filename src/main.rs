use std::process::ExitCode;

fn main() -> ExitCode {
    // Delegate to the console framework entry point.
    dezhnev::run()
}
