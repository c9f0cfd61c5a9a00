//! interlock-fixtures main entrypoint.

use interlock_fixtures::run;
use interlock_fixtures::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
