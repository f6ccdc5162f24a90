//! racetable main entrypoint.

use racetable::run;
use racetable::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
