use crate::common::init_tracing;
use chrono::{TimeZone, Utc};
use serde_json::json;
use treezor_rust::{
    error::ERR_CODE_CARD_BLOCKED,
    resources::{Card, Transfer, TransferBuilder},
    response,
    types::{Amount, Boolean, Identifier},
    Error,
};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn get_card() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/cards/99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cards": [{
                "cardId": "99",
                "isLive": "1",
                "expiryDate": "0000-00-00",
                "createdDate": "2022-07-01 09:15:00"
            }]
        })))
        .mount(&server)
        .await;

    let res = reqwest::get(format!("{}/v1/cards/99", server.uri()))
        .await
        .unwrap();
    let card: Card = response::single(res).await.unwrap();

    assert_eq!(card.card_id, Some(Identifier::new("99")));
    assert_eq!(card.is_live, Some(Boolean::new(true)));
    assert!(card.expiry_date.unwrap().is_absent());
    // card dates are London local time, BST in July
    assert_eq!(
        card.created_date.and_then(|d| d.instant()),
        Some(Utc.with_ymd_and_hms(2022, 7, 1, 8, 15, 0).unwrap())
    );
}

#[tokio::test]
async fn create_transfer_sends_treezor_encoding() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/transfers"))
        .and(body_json(json!({
            "walletId": "1",
            "beneficiaryWalletId": "2",
            "amount": "12.5",
            "currency": "EUR"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transfers": [{"transferId": 555, "transferStatus": "VALIDATED", "amount": "12.50"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TransferBuilder::default()
        .wallet_id(Identifier::new("1"))
        .beneficiary_wallet_id(Identifier::new("2"))
        .amount(Amount::new(12.5))
        .currency("EUR")
        .build()
        .unwrap();
    let res = reqwest::Client::new()
        .post(format!("{}/v1/transfers", server.uri()))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(serde_json::to_vec(&request).unwrap())
        .send()
        .await
        .unwrap();
    let transfer: Transfer = response::single(res).await.unwrap();

    assert_eq!(transfer.transfer_id, Some(Identifier::new("555")));
    assert_eq!(transfer.transfer_status.as_deref(), Some("VALIDATED"));
}

#[tokio::test]
async fn search_returns_every_item() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cards": [{"cardId": 1}, {"cardId": "2"}]
        })))
        .mount(&server)
        .await;

    let res = reqwest::get(format!("{}/v1/cards", server.uri()))
        .await
        .unwrap();
    let cards: Vec<Card> = response::list(res).await.unwrap();

    let ids: Vec<_> = cards.into_iter().filter_map(|c| c.card_id).collect();
    assert_eq!(ids, vec![Identifier::new("1"), Identifier::new("2")]);
}

#[tokio::test]
async fn single_resource_with_two_items_is_an_error() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cards": [{"cardId": 1}, {"cardId": 2}]
        })))
        .mount(&server)
        .await;

    let res = reqwest::get(format!("{}/v1/cards/1", server.uri()))
        .await
        .unwrap();
    let err = response::single::<Card>(res).await.unwrap_err();

    assert!(matches!(err, Error::UnexpectedItemCount { count: 2, .. }));
}

#[tokio::test]
async fn api_error_carries_codes() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{
                "errorCode": ERR_CODE_CARD_BLOCKED,
                "errorMessage": "Card is blocked"
            }]
        })))
        .mount(&server)
        .await;

    let res = reqwest::Client::new()
        .put(format!("{}/v1/cards/1/Activate", server.uri()))
        .send()
        .await
        .unwrap();
    let err = response::single::<Card>(res).await.unwrap_err();

    match err {
        Error::ApiError(api_error) => {
            assert_eq!(api_error.status, 400);
            assert!(api_error.has_code(ERR_CODE_CARD_BLOCKED));
            assert_eq!(api_error.errors[0].message, "Card is blocked");
        }
        other => panic!("unexpected error {:?}", other),
    }
}
