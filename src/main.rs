use befast_status::cli::{internal_error, is_internal, run};

fn main() {
    if let Err(e) = run() {
        if is_internal(&e) {
            // Broken catalog or alias table: show the full chain
            let mut message = e.to_string();
            for cause in e.chain().skip(1) {
                message.push_str(&format!("\n  caused by: {}", cause));
            }
            internal_error(&message);
        } else {
            // User error (bad input, bad config, unreadable file)
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
