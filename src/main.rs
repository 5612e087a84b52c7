#[tokio::main]
async fn main() {
    if let Err(err) = fitclub_api::run().await {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
