//! Logging setup
//!
//! Everything goes to stderr through env_logger so stdout stays clean for
//! suggestions and destinations that other programs consume.

use ::log::LevelFilter;

/// Crates whose debug output `--verbose` turns on
///
/// Note: crate names use underscores, not hyphens!
const OWN_CRATES: &[&str] = &["goto", "goto_store", "goto_completion"];

/// Initialize the logger
///
/// This should be called once at startup before any logging occurs.
///
/// # Default Behavior
///
/// Only warnings and errors are printed. With `verbose`, debug logs from
/// goto's own crates are shown as well.
///
/// # Filtering with RUST_LOG
///
/// When RUST_LOG is set it replaces the defaults entirely:
///
/// - `RUST_LOG=debug`: All Debug+ logs from all modules
/// - `RUST_LOG=goto_store=debug`: Only store activity
pub fn init_logger(verbose: bool) {
    let mut builder = if std::env::var("RUST_LOG").is_ok() {
        env_logger::Builder::from_default_env()
    } else {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Warn);
        if verbose {
            for name in OWN_CRATES {
                builder.filter_module(name, LevelFilter::Debug);
            }
        }
        builder
    };

    builder.format_timestamp(None).target(env_logger::Target::Stderr);

    // Only fails if a logger is already installed, which keeps the first one
    let _ = builder.try_init();
}
