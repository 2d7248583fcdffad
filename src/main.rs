//! harvestgraph main entrypoint.

use harvestgraph::run;
use harvestgraph::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
