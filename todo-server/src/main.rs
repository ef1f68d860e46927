#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = server_support::get_configuration("TODO_SERVER")?;
    server_support::init_tracing(&settings.log_level);

    let listener = server_support::bind(&settings.server).await?;
    todo_server::run(listener).await?;
    Ok(())
}
