//! The main entry point for the vcp-coolant operator panel.
mod app;
mod logging;

use anyhow::Result;

/// The main function of the application.
///
/// Builds the panel from command-line arguments and runs it on a single
/// thread, since widgets and their bindings are not shareable across
/// threads.
///
/// # Errors
///
/// Returns an error if the panel layout cannot be loaded.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    app::launch().await
}
