pub async fn hello_world() -> &'static str {
    "Billing backend running"
}
