//! Tracing setup for the `jlex` binary
//!
//! The subscriber is only installed when `JLEX_LOG` (or `RUST_LOG`) is set.
//! Output goes to stderr so it never mixes with the token listing.
//!
//! ```bash
//! JLEX_LOG=debug jlex Main.java         # one line per error token
//! JLEX_LOG=jlex::lexer=trace jlex -e 'int x = 1'
//! ```

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `JLEX_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("JLEX_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `JLEX_LOG` nor `RUST_LOG` is set. Calling it
/// twice is harmless; the second install attempt is ignored.
pub fn init_tracing() {
    let has_jlex_log = std::env::var("JLEX_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_jlex_log && !has_rust_log {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
