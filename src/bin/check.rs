//! gearminder-check: unattended reminder run, meant for cron or task schedulers.
//!
//! Takes no arguments. Exits 0 whether or not anything was due (a failed email
//! is logged and retried on the next run); exits 1 only when the store is unusable.

use gearminder::run_check;

fn main() {
    if let Err(e) = run_check() {
        tracing::error!(error = %e, "reminder check aborted");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
