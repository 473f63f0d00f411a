//! Entry point for the content backend HTTP server.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}
