//! timepunch main entrypoint.

use timepunch::run;
use timepunch::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
