//! Interpretation of Treezor HTTP responses.
//!
//! Non-2xx responses become [`Error::ApiError`], successful bodies are fed
//! through the envelope of the requested resource.

use crate::{
    envelope::{Envelope, Resource},
    error::ApiError,
    Error,
};

/// Reads a response expected to hold exactly one `T`.
///
/// Used by create, get, edit and delete operations.
#[tracing::instrument(name = "Read Single Resource", skip(res), fields(resource = T::KEY))]
pub async fn single<T: Resource>(res: reqwest::Response) -> Result<T, Error> {
    Envelope::decode_resource(&body(res).await?)?.into_single()
}

/// Reads a response holding any number of `T`, in the order they were sent.
#[tracing::instrument(name = "Read Resource List", skip(res), fields(resource = T::KEY))]
pub async fn list<T: Resource>(res: reqwest::Response) -> Result<Vec<T>, Error> {
    Ok(Envelope::decode_resource(&body(res).await?)?.into_items())
}

async fn body(res: reqwest::Response) -> Result<Vec<u8>, Error> {
    let status = res.status();
    let bytes = res.bytes().await?;

    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "Treezor returned an error response");
        return Err(ApiError::from_body(status.as_u16(), &bytes).into());
    }

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ERR_CODE_INSUFFICIENT_FUNDS, resources::Wallet, types::Amount};
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    async fn get(server: &MockServer, route: &str) -> reqwest::Response {
        reqwest::get(format!("{}{}", server.uri(), route)).await.unwrap()
    }

    #[tokio::test]
    async fn single_wallet() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/wallets/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "wallets": [{"walletId": 1, "solde": "10.5"}]
            })))
            .mount(&server)
            .await;

        let wallet: Wallet = single(get(&server, "/v1/wallets/1").await).await.unwrap();

        assert_eq!(wallet.solde, Some(Amount::new(10.5)));
    }

    #[tokio::test]
    async fn single_rejects_empty_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"wallets": []})))
            .mount(&server)
            .await;

        let res = single::<Wallet>(get(&server, "/v1/wallets/1").await).await;

        assert!(matches!(
            res,
            Err(Error::UnexpectedItemCount { count: 0, ref resource }) if resource == "wallets"
        ));
    }

    #[tokio::test]
    async fn list_wallets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "wallets": [{"walletId": 1}, {"walletId": 2}, {"walletId": 3}]
            })))
            .mount(&server)
            .await;

        let wallets: Vec<Wallet> = list(get(&server, "/v1/wallets").await).await.unwrap();

        assert_eq!(wallets.len(), 3);
    }

    #[tokio::test]
    async fn error_response_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errors": [{
                    "errorCode": ERR_CODE_INSUFFICIENT_FUNDS,
                    "errorMessage": "Insufficient funds",
                    "additionalInformation": []
                }]
            })))
            .mount(&server)
            .await;

        let res = reqwest::Client::new()
            .post(format!("{}/v1/transfers", server.uri()))
            .send()
            .await
            .unwrap();
        let err = single::<Wallet>(res).await.unwrap_err();

        match err {
            Error::ApiError(api_error) => {
                assert_eq!(api_error.status, 400);
                assert!(api_error.has_code(ERR_CODE_INSUFFICIENT_FUNDS));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
