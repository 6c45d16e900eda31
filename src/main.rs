use classifier_client::app::{to_home, AppContext};
use classifier_client::domain::FilteringQuery;
use classifier_client::infrastructure::Config;
use classifier_client::util::mime_to_icon;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=debug,classifier_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();
    info!(
        base_url = %config.api_base_url,
        use_mock = config.use_mock,
        "Starting classifier client"
    );

    let ctx = AppContext::new(&config);

    let view = ctx.router.navigate(&to_home()).await?;
    info!(view = %view.title, "Rendered initial view");

    let listing = ctx
        .api
        .list_documents(&FilteringQuery::new().with_page(1, 10))
        .await?;
    info!(
        count = listing.items.len(),
        total = ?listing.total,
        "Fetched document listing"
    );
    for doc in &listing.items {
        let icon = mime_to_icon(&doc.mime);
        info!(
            id = doc.id,
            name = %doc.name,
            icon = icon.icon,
            indexed = doc.indexed,
            "Document"
        );
    }

    Ok(())
}
