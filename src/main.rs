#[tokio::main]
async fn main() {
    futureos::start_server().await;
}
