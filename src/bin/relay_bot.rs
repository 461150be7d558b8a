use book_relay::bot::command;
use book_relay::config::Config;
use book_relay::utils::logger::setup_logger;
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let config = Config::new();
    info!("Bot started (depth {})", config.depth);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if let Some(reply) = command::respond(&line, &config).await {
                            println!("{reply}");
                        }
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}
