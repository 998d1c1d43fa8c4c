use engine::{settings::Settings, startup::App};
use tracing::{Level, event};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let settings = Settings::new().unwrap();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(Level::from(&settings.log_level))
            .finish(),
    )
    .unwrap();

    event!(Level::INFO, "starting the port demand engine...");

    let app = App::build(settings).await;

    app.run().await.unwrap();
}
