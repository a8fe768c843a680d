use std::process::ExitCode;

fn main() -> ExitCode {
    kitbag_cli::run()
}
