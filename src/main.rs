use regform::configuration::get_configuration;
use regform::startup::Application;
use regform::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("regform".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    //Panic if we can't read configuration
    let configuration = get_configuration().expect("Failed to read configuration");
    let application = Application::build(configuration).await?;
    tracing::info!(
        "Registration page available on http://127.0.0.1:{}",
        application.port()
    );
    application.run_until_stopped().await?;

    Ok(())
}
