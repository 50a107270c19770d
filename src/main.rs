use std::process::ExitCode;

fn main() -> ExitCode {
    // A second subscriber is the only failure mode, and logging is optional here
    let _ = fzf_preview::utils::init_tracing();
    fzf_preview::cli::run()
}
