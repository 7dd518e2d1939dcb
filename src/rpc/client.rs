use super::*;

/// The default timeout for API requests
pub const DEFAULT_TIMEOUT: u64 = 120;

#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    client: reqwest::Client,
    commitment: Commitment,
}

impl Client {
    /// Create a new client using a given base URL and a default
    /// timeout. Every call is a POST to this base_url.
    pub fn new_with_base_url(base_url: String, commitment: Commitment) -> Result<Self> {
        Self::new_with_timeout(base_url, commitment, DEFAULT_TIMEOUT)
    }

    /// Create a new client using a given base URL, commitment level
    /// and request timeout value.
    pub fn new_with_timeout(
        base_url: String,
        commitment: Commitment,
        timeout: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(timeout))
            .build()?;
        Ok(Self {
            base_url,
            client,
            commitment,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// Single attempt; node errors are returned to the caller as-is.
    pub(crate) async fn post<T: DeserializeOwned, D: Serialize>(&self, data: &D) -> Result<T> {
        #[derive(Clone, Serialize, Deserialize, Debug)]
        #[serde(untagged)]
        enum AllResponse<T> {
            Ok(FullResponse<T>),
            Err { error: String },
        }

        #[derive(Clone, Serialize, Deserialize, Debug)]
        struct FullResponse<T> {
            jsonrpc: String,
            #[serde(flatten)]
            response: Response<T>,
            id: Option<serde_json::Value>,
        }
        #[derive(Clone, Serialize, Deserialize, Debug)]
        #[serde(untagged)]
        #[serde(rename_all = "lowercase")]
        enum Response<T> {
            Result { result: T },
            Error { error: ErrorResponse },
        }
        #[derive(Clone, Serialize, Deserialize, Debug)]
        struct ErrorResponse {
            code: isize,
            message: String,
        }

        let request_json = serde_json::to_string(data)?;
        tracing::debug!(url = %self.base_url, request = %request_json, "rpc request");
        let request = self.client.post(&self.base_url).json(data);
        let response = request.send().await?;
        let body = response.text().await?;
        let response: AllResponse<T> = serde_json::from_str(&body)
            .map_err(|e| Error::json_deser(e, body, request_json.clone()))?;

        match response {
            AllResponse::Ok(response) => match response.response {
                Response::Result { result, .. } => Ok(result),
                Response::Error {
                    error: ErrorResponse { code, message },
                } => Err(Error::NodeError {
                    code,
                    msg: message,
                    request_json,
                }),
            },
            AllResponse::Err { error } => Err(Error::NodeError {
                code: -1,
                msg: error,
                request_json,
            }),
        }
    }
}
