#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vibepoint_lib::run().await
}
