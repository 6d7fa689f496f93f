//! hoslogger main entrypoint.

use hoslogger::run;
use hoslogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
