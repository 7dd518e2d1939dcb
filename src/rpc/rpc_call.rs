use super::*;
use serde::Serializer;

/// JSON RPC version
pub const JSON_RPC: &str = "2.0";

#[derive(Clone, Debug, Serialize)]
pub(crate) struct RpcCall<'se> {
    jsonrpc: String,
    id: String,
    #[serde(flatten)]
    method: Method<'se>,
}

/// Pubkeys go over the wire as base58 strings.
#[derive(Clone, Debug)]
struct InnerPubkey<'se> {
    pubkey: &'se Pubkey,
}

impl<'se> Serialize for InnerPubkey<'se> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.pubkey.to_string())
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "method")]
#[serde(rename_all = "camelCase")]
enum Method<'se> {
    GetBalance { params: Vec<GetBalanceParam<'se>> },
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
enum GetBalanceParam<'se> {
    Pubkey(InnerPubkey<'se>),
    Config(CommitmentConfig),
}

#[derive(Clone, Debug, Serialize)]
struct CommitmentConfig {
    commitment: Commitment,
}

impl<'se> RpcCall<'se> {
    fn new(request: Method) -> RpcCall {
        RpcCall {
            jsonrpc: JSON_RPC.to_string(),
            id: now_millis(),
            method: request,
        }
    }

    pub(crate) fn get_balance(address: &'se Pubkey, commitment: Commitment) -> Self {
        Self::new(Method::GetBalance {
            params: vec![
                GetBalanceParam::Pubkey(InnerPubkey { pubkey: address }),
                GetBalanceParam::Config(CommitmentConfig { commitment }),
            ],
        })
    }
}

fn now_millis() -> String {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
        .to_string()
}
