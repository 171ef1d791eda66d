#[tokio::main]
async fn main() {
    if let Err(e) = lava_burn_stats::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
