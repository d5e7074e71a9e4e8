use ecommerce_api::{configuration::Settings, startup::Application, telemetry::{get_subscriber, init_subscriber}};

#[actix_web::main]
async fn main() -> anyhow::Result<()>{
    let subscriber = get_subscriber("Ecommerce".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = Settings::get();

    let application = Application::new(config).await?;
    tracing::info!(host = %application.host, port = application.port, "Serving ecommerce api");

    application.run_until_stopped().await?;
    Ok(())
}
