pub mod args;
mod layout;
mod panel;
mod setup;

pub use args::AppArgs;

use anyhow::Result;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let app = setup::prepare(args)?;
    panel::run(app).await
}
