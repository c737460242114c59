use anyhow::Context;
use koreax::core::config::ExchangeConfig;
use koreax::{ExchangeFacade, ExchangeType, TickerRequest};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    // First argument picks the exchange
    let exchange = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "upbit".to_string());
    let exchange_type = exchange
        .parse::<ExchangeType>()
        .with_context(|| format!("unknown exchange '{}'", exchange))?;

    // Keys from .env or the environment when present, public data otherwise
    let config = ExchangeConfig::from_env_file(exchange_type.as_str()).unwrap_or_else(|e| {
        warn!("No credentials loaded ({}); using public endpoints only", e);
        ExchangeConfig::read_only(exchange_type)
    });
    let facade = ExchangeFacade::from_config(&config)?;

    info!("Fetching {} markets...", exchange_type);
    let markets = facade.get_markets(false).await.context("fetching markets")?;
    info!("Found {} markets", markets.len());

    let krw_markets = markets
        .iter()
        .map(|market| market.market().to_string())
        .filter(|market| market.starts_with("KRW-"))
        .take(5)
        .collect::<Vec<_>>();

    let tickers = facade
        .get_tickers(TickerRequest {
            markets: krw_markets,
        })
        .await
        .context("fetching tickers")?;

    for ticker in tickers {
        info!(
            "{}: {} ({:?} {})",
            ticker.market, ticker.trade_price, ticker.change, ticker.signed_change_rate
        );
    }

    Ok(())
}
