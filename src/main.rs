//! convtrack main entrypoint.

use convtrack::run;
use convtrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
