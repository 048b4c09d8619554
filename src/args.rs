use clap::Parser;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the display server to
    #[arg(long, value_name = "ADDR", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to bind the display server to
    #[arg(short, long, default_value_t = 8082)]
    pub port: u16,

    /// Render players in the order the backend delivers them instead of
    /// keeping the stable per-match display order
    #[arg(long)]
    pub server_order: bool,

    /// Show player cards instead of the table for X01 and Gotcha
    #[arg(long)]
    pub card_view: bool,
}
