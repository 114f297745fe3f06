use imgfetch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; a read-only state dir must not stop the run.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Every failure is reported on stdout; the process always exits 0.
    let line = Cli::run_from_args();
    println!("{}", line);
}
