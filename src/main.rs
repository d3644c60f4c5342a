#[tokio::main]
async fn main() {
    garage_billing_server::axum().await;
}
