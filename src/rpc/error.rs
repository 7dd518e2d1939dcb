use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("error code {code} from node: {msg}")]
    NodeError {
        code: isize,
        msg: String,
        request_json: String,
    },
    #[error("error deserializing JSON response: {source}; body: {body}")]
    JsonDeserialization {
        source: serde_json::Error,
        body: String,
        request_json: String,
    },
    #[error("error serializing JSON request: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl Error {
    pub fn json_deser(source: serde_json::Error, body: String, request_json: String) -> Self {
        Self::JsonDeserialization {
            source,
            body,
            request_json,
        }
    }
}
