use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "vcp-coolant")]
#[command(about = "Operator panel for flood and mist coolant on a simulated machine")]
pub struct AppArgs {
    #[arg(long, help = "Panel layout file (JSON); built-in layout if not specified")]
    pub config: Option<String>,

    #[arg(long, help = "Start with the machine powered ON")]
    pub machine_on: bool,

    #[arg(long, default_value = "info", help = "Log level for vcp_coolant")]
    pub log_level: String,

    #[arg(long, default_value_t = 100, help = "Status poll interval in milliseconds")]
    pub poll_ms: u64,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
