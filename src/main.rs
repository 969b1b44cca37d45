// main.rs - CLI entry point

use std::io::Write;

use resume_merge::cli;
use resume_merge::status::ExitStatus;

fn main() -> ExitStatus {
    // Lossy conversion: a mangled path simply fails to open and is reported as a merge failure
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let outcome = cli::run(&argv);

    let mut stdout = std::io::stdout().lock();
    // If stdout is gone there is nobody left to tell; the exit status still carries the result
    let _ = writeln!(stdout, "{}", outcome.stdout);
    let _ = stdout.flush();

    outcome.exit_status
}
