//! wsflow main entrypoint.

use wsflow::run;
use wsflow::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
