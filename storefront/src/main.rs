use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

mod api;
mod state;
mod view;

use crate::api::ApiClient;
use crate::state::Storefront;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let base_url =
        std::env::var("SHOP_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let api = ApiClient::new(base_url);
    info!(base_url = api.base_url(), "Storefront starting");

    let mut store = Storefront::new();
    print!("{}", view::render(&store));

    store.load(&api).await;
    print!("{}", view::render(&store));

    println!();
    println!("Commands: add <id> | reload | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("add"), Some(raw)) => {
                let added = raw
                    .parse::<u32>()
                    .map(|id| store.add_to_cart(id))
                    .unwrap_or(false);
                if !added {
                    println!("No such product: {}", raw);
                }
            }
            (Some("reload"), None) => store.load(&api).await,
            (Some("quit"), None) | (Some("exit"), None) => break,
            (None, None) => {}
            _ => {
                println!("Commands: add <id> | reload | quit");
            }
        }
        print!("{}", view::render(&store));
    }

    Ok(())
}
