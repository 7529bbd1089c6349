use std::io::{self, BufRead, Write};
use std::panic::AssertUnwindSafe;

use gigboard_core::{logging, protocol};

fn main() {
    let verbose = std::env::args().skip(1).any(|a| a == "-v" || a == "--verbose");
    logging::init(verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => continue,
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
            runtime.block_on(protocol::handle(&line))
        }));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                log::error!("handler panicked on request: {line}");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }
}
