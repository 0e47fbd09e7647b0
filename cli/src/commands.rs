use clap::Parser;

#[derive(Parser)]
#[command(name = "arpseek")]
#[command(about = "Finds the IP address bound to a MAC address on a local subnet.")]
pub struct CommandLine {
    /// Subnet to sweep, in CIDR notation (e.g. 192.168.0.0/24)
    #[arg(short, long)]
    pub subnet: String,

    /// Hardware address to look up (e.g. ab:cd:ef:12:34:56)
    #[arg(short, long)]
    pub mac: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
