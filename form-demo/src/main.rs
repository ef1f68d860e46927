#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = server_support::get_configuration("FORM_DEMO")?;
    server_support::init_tracing(&settings.log_level);

    let listener = server_support::bind(&settings.server).await?;
    form_demo::run(listener).await?;
    Ok(())
}
