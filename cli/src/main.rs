mod commands;
mod terminal;

use arpseek_core::scanner::ArpScan;
use commands::CommandLine;

use crate::terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    // The scanner needs raw sockets and reports its own privilege failures.
    let scanner = ArpScan::default();

    match scanner.scan(&commands.subnet, &commands.mac).await? {
        Some(record) => println!("{}", record.ip),
        None => println!("Did not find ip for {}", commands.mac),
    }

    Ok(())
}
