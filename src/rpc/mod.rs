use crate::types::Commitment;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::future::Future;
#[cfg(test)]
use std::str::FromStr;
use std::time::{Duration, SystemTime};

mod client;
mod error;
mod rpc_call;

pub use client::Client;
pub use error::Error;
use rpc_call::RpcCall;

pub type Result<T = ()> = std::result::Result<T, Error>;

/// Anything that can answer "how many lamports does this account hold".
pub trait BalanceSource {
    fn get_balance(&self, pubkey: &Pubkey) -> impl Future<Output = Result<u64>> + Send;
}

impl BalanceSource for Client {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64> {
        get_balance(self, pubkey).await
    }
}

pub async fn get_balance(client: &Client, pubkey: &Pubkey) -> Result<u64> {
    #[derive(Deserialize, Debug)]
    struct Response {
        pub value: u64,
    }

    let json = RpcCall::get_balance(pubkey, client.commitment());
    let response: Response = client.post(&json).await?;
    Ok(response.value)
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};
    use tokio::test;

    /// Serves `response` to every POST on an ephemeral localhost port.
    pub(crate) async fn mock_node(response: Value) -> String {
        let app = Router::new().route(
            "/",
            post(move || {
                let response = response.clone();
                async move { Json(response) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}")
    }

    fn pubkey() -> Pubkey {
        Pubkey::from_str("7rfeigr8txwz8z1juPKPZBA3Spk6mFQU6DTxPZaz5x9h").unwrap()
    }

    #[test]
    async fn test_get_balance() {
        let url = mock_node(json!({
            "jsonrpc": "2.0",
            "result": { "context": { "apiVersion": "1.18.0", "slot": 42 }, "value": 2_500_000_000u64 },
            "id": "1"
        }))
        .await;
        let client = Client::new_with_base_url(url, Commitment::Processed).unwrap();
        let balance = get_balance(&client, &pubkey()).await.unwrap();
        assert_eq!(balance, 2_500_000_000);
    }

    #[test]
    async fn test_get_balance_through_trait() {
        let url = mock_node(json!({
            "jsonrpc": "2.0",
            "result": { "context": { "slot": 1 }, "value": 0 },
            "id": 7
        }))
        .await;
        let client = Client::new_with_base_url(url, Commitment::Confirmed).unwrap();
        let balance = BalanceSource::get_balance(&client, &pubkey()).await.unwrap();
        assert_eq!(balance, 0);
    }

    #[test]
    async fn test_node_error() {
        let url = mock_node(json!({
            "jsonrpc": "2.0",
            "error": { "code": -32602, "message": "Invalid param: WrongSize" },
            "id": "1"
        }))
        .await;
        let client = Client::new_with_base_url(url, Commitment::Processed).unwrap();
        match get_balance(&client, &pubkey()).await {
            Err(Error::NodeError {
                code,
                msg,
                request_json,
            }) => {
                assert_eq!(code, -32602);
                assert_eq!(msg, "Invalid param: WrongSize");
                assert!(request_json.contains("getBalance"));
            }
            other => panic!("expected node error, got {other:?}"),
        }
    }

    #[test]
    async fn test_bare_error_string() {
        let url = mock_node(json!({ "error": "rate limited" })).await;
        let client = Client::new_with_base_url(url, Commitment::Processed).unwrap();
        match get_balance(&client, &pubkey()).await {
            Err(Error::NodeError { code, msg, .. }) => {
                assert_eq!(code, -1);
                assert_eq!(msg, "rate limited");
            }
            other => panic!("expected node error, got {other:?}"),
        }
    }

    #[test]
    async fn test_malformed_response() {
        let url = mock_node(json!({ "jsonrpc": "2.0", "result": { "value": "lots" }, "id": "1" })).await;
        let client = Client::new_with_base_url(url, Commitment::Processed).unwrap();
        let result = get_balance(&client, &pubkey()).await;
        assert!(matches!(result, Err(Error::JsonDeserialization { .. })));
    }

    #[test]
    async fn test_unreachable_node() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client =
            Client::new_with_base_url(format!("http://{addr}"), Commitment::Processed).unwrap();
        let result = get_balance(&client, &pubkey()).await;
        assert!(matches!(result, Err(Error::Reqwest(_))));
    }
}
