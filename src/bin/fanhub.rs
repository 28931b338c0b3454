use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    fanhub::cli::run().await?;
    Ok(())
}
