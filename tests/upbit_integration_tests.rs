mod common;

use common::{capture_one, claims_from_header, test_config, ACCESS_KEY};
use koreax::core::config::ExchangeConfig;
use koreax::core::kernel::query_hash;
use koreax::core::types::{
    CandleRequest, OrderLookup, OrderSide, OrdType, PlaceOrderRequest, TickerRequest,
};
use koreax::exchanges::upbit::types::{CancelOrderListRequest, OrderListRequest};
use koreax::exchanges::upbit::{build_connector, UpbitConnector};
use koreax::{ExchangeError, ExchangeType};
use koreax::core::kernel::ReqwestRest;
use mockito::{Matcher, Server};
use rust_decimal::Decimal;
use std::time::Duration;

const ORDER_JSON: &str = r#"{
    "uuid": "cdd92199-2897-4e14-9448-f923320408ad",
    "side": "bid",
    "ord_type": "limit",
    "price": "100.0",
    "state": "wait",
    "market": "KRW-BTC",
    "created_at": "2024-01-01T00:00:00+09:00",
    "volume": "0.01",
    "remaining_volume": "0.01",
    "reserved_fee": "0.0015",
    "remaining_fee": "0.0015",
    "paid_fee": "0.0",
    "locked": "1.0015",
    "executed_volume": "0.0",
    "trades_count": 0
}"#;

fn connector(server_url: &str) -> UpbitConnector<ReqwestRest> {
    build_connector(test_config(ExchangeType::Upbit, server_url)).unwrap()
}

fn dec(raw: &str) -> Decimal {
    raw.parse().unwrap()
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_private_call_carries_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/accounts")
            .match_header("authorization", Matcher::Regex("^Bearer .+".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"currency":"KRW","balance":"1000.0","locked":"0","avg_buy_price":"0",
                     "avg_buy_price_modified":false,"unit_currency":"KRW"}]"#,
            )
            .create_async()
            .await;

        let accounts = connector(&server.url()).rest().get_accounts().await.unwrap();

        mock.assert_async().await;
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].balance, dec("1000.0"));
        println!("✅ Upbit accounts signed and parsed");
    }

    #[tokio::test]
    async fn test_public_call_has_no_authorization() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/market/all")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(r#"[{"market":"KRW-BTC","korean_name":"비트코인","english_name":"Bitcoin"}]"#)
            .create_async()
            .await;

        let markets = connector(&server.url()).rest().get_markets(false).await.unwrap();

        mock.assert_async().await;
        assert_eq!(markets[0].market, "KRW-BTC");
        assert!(markets[0].market_event.is_none());
    }

    #[tokio::test]
    async fn test_tickers_join_markets() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/ticker")
            .match_query(Matcher::UrlEncoded(
                "markets".to_string(),
                "KRW-BTC,KRW-ETH".to_string(),
            ))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let tickers = connector(&server.url())
            .rest()
            .get_tickers(&TickerRequest {
                markets: vec!["KRW-BTC".to_string(), "KRW-ETH".to_string()],
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(tickers.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_requests_never_reach_the_server() {
        let mut server = Server::new_async().await;
        let gets = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let posts = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let deletes = server
            .mock("DELETE", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let connector = connector(&server.url());
        let rest = connector.rest();

        let price_ask = PlaceOrderRequest::new("KRW-BTC", OrderSide::Ask, OrdType::Price)
            .with_price(dec("10000"));
        assert!(matches!(
            rest.place_order(&price_ask).await,
            Err(ExchangeError::Validation { .. })
        ));

        let market_ask_with_price = PlaceOrderRequest::market_sell("KRW-BTC", Decimal::ONE)
            .with_price(dec("100"));
        match rest.place_order(&market_ask_with_price).await {
            Err(ExchangeError::Validation { field, .. }) => assert_eq!(field, "price"),
            other => panic!("expected validation error, got {:?}", other),
        }

        match rest
            .get_minute_candles(7, &CandleRequest::new("KRW-BTC"))
            .await
        {
            Err(ExchangeError::Validation { field, .. }) => assert_eq!(field, "unit"),
            other => panic!("expected validation error, got {:?}", other),
        }

        let too_many = OrderListRequest {
            uuids: (0..101).map(|i| format!("uuid-{}", i)).collect(),
            market: Some("KRW-BTC".to_string()),
            ..OrderListRequest::default()
        };
        assert!(matches!(
            rest.get_orders_by_ids(&too_many).await,
            Err(ExchangeError::Validation { .. })
        ));

        assert!(matches!(
            rest.cancel_order(&OrderLookup::default()).await,
            Err(ExchangeError::Validation { .. })
        ));
        assert!(matches!(
            rest.cancel_orders_by_ids(&CancelOrderListRequest::default())
                .await,
            Err(ExchangeError::Validation { .. })
        ));

        gets.assert_async().await;
        posts.assert_async().await;
        deletes.assert_async().await;
        println!("✅ Invalid requests rejected locally");
    }

    #[tokio::test]
    async fn test_remote_error_message_is_surfaced() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/accounts")
            .with_status(401)
            .with_body(r#"{"error":{"name":"invalid_access_key","message":"잘못된 엑세스 키입니다."}}"#)
            .create_async()
            .await;

        match connector(&server.url()).rest().get_accounts().await {
            Err(ExchangeError::RemoteRejection { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "잘못된 엑세스 키입니다.");
            }
            other => panic!("expected remote rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unexpected_body_is_deserialization_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/accounts")
            .with_status(200)
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        assert!(matches!(
            connector(&server.url()).rest().get_accounts().await,
            Err(ExchangeError::Deserialization(_))
        ));
    }

    #[tokio::test]
    async fn test_read_only_connector_cannot_sign() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/accounts")
            .expect(0)
            .create_async()
            .await;

        let config = ExchangeConfig::read_only(ExchangeType::Upbit).server_url(server.url());
        let connector = build_connector(config).unwrap();

        assert!(matches!(
            connector.rest().get_accounts().await,
            Err(ExchangeError::CredentialError(_))
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_query_hash_matches_bytes_on_the_wire() {
        let (url, captured) = capture_one("[]").await;

        let request = OrderListRequest {
            uuids: vec!["a b".to_string(), "c&d".to_string()],
            market: Some("KRW-BTC".to_string()),
            ..OrderListRequest::default()
        };
        let orders = connector(&url)
            .rest()
            .get_orders_by_ids(&request)
            .await
            .unwrap();
        assert!(orders.is_empty());

        let request = captured.await.unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/v1/orders/uuids");
        assert!(request.query.contains("uuids[]="));

        let claims = claims_from_header(request.header("authorization").unwrap());
        assert_eq!(claims.access_key, ACCESS_KEY);
        assert_eq!(claims.query_hash, Some(query_hash(&request.query)));
        assert_eq!(claims.query_hash_alg.as_deref(), Some("SHA512"));
        assert!(claims.timestamp.is_none());
        println!("✅ query_hash bound to {}", request.query);
    }

    #[tokio::test]
    async fn test_post_body_is_hashed_in_query_form() {
        let (url, captured) = capture_one(ORDER_JSON).await;

        let order = PlaceOrderRequest::limit("KRW-BTC", OrderSide::Bid, dec("0.01"), dec("100.0"))
            .with_identifier("my-order-1");
        let placed = connector(&url).rest().place_order(&order).await.unwrap();
        assert_eq!(placed.market, "KRW-BTC");
        assert_eq!(placed.price, Some(dec("100.0")));

        let request = captured.await.unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/v1/orders");
        assert!(request.query.is_empty());
        assert!(request
            .header("content-type")
            .unwrap()
            .starts_with("application/json"));

        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["market"], "KRW-BTC");
        assert_eq!(body["ord_type"], "limit");
        assert_eq!(body["volume"], "0.01");

        let expected =
            "market=KRW-BTC&side=bid&volume=0.01&price=100.0&ord_type=limit&identifier=my-order-1";
        let claims = claims_from_header(request.header("authorization").unwrap());
        assert_eq!(claims.query_hash, Some(query_hash(expected)));
    }

    #[tokio::test]
    async fn test_unresponsive_server_times_out() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let config = test_config(ExchangeType::Upbit, &url).timeout(Duration::from_millis(200));
        let connector = build_connector(config).unwrap();

        let result = connector.rest().get_markets(false).await;
        assert!(
            matches!(result, Err(ExchangeError::Timeout(_))),
            "expected timeout, got {:?}",
            result
        );
        drop(listener);
    }
}
