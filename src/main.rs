#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = job_services::run().await {
        eprintln!("job-services fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
