use crate::common::{delivery, init_tracing, signed_delivery, validator};
use chrono::{TimeZone, Utc};
use treezor_rust::{
    types::{Amount, Identifier, Integer, KycLevel},
    webhooks::{EventFamily, EventPayload, WebhookError},
    Error,
};

#[test]
fn user_create_is_validated_and_dispatched() {
    init_tracing();
    let payload = r#"{"users":[{"userId":"1234","userTypeId":"1","kycLevel":2,"email":"jane@example.com","createdDate":"2022-03-27 01:30:00"}]}"#;
    let body = signed_delivery("user.create", payload).unwrap();

    let event = validator()
        .unwrap()
        .validate_request(body.as_bytes(), "application/json; charset=utf-8")
        .unwrap();

    assert_eq!(event.event_type(), "user.create");
    assert_eq!(event.object_id(), Some(&Identifier::new("1234")));
    assert_eq!(event.raw_payload(), payload);

    let users = match event.dispatch().unwrap() {
        EventPayload::User(users) => users,
        other => panic!("unexpected payload {:?}", other),
    };
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].user_id, Some(Identifier::new("1234")));
    assert_eq!(users[0].kyc_level, Some(KycLevel::REGULAR));
    // still CET, one hour ahead of UTC
    assert_eq!(
        users[0].created_date.as_ref().and_then(|d| d.instant()),
        Some(Utc.with_ymd_and_hms(2022, 3, 27, 0, 30, 0).unwrap())
    );
}

#[test]
fn transfer_list_keeps_order() {
    init_tracing();
    let payload = r#"{"transfers":[{"transferId":"1","amount":"10.50"},{"transferId":"2","amount":3}]}"#;
    let body = signed_delivery("transfer.update", payload).unwrap();

    let event = validator()
        .unwrap()
        .validate_request(body.as_bytes(), "application/json")
        .unwrap();

    match event.dispatch().unwrap() {
        EventPayload::Transfer(transfers) => {
            let amounts: Vec<_> = transfers.iter().map(|t| t.amount).collect();
            assert_eq!(
                amounts,
                vec![Some(Amount::new(10.5)), Some(Amount::new(3.0))]
            );
        }
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn kyc_liveness_is_sent_as_text() {
    init_tracing();
    let payload = r#"{"started-at":"2022-01-10T09:00:00+01:00","kyc-status":"processed","user_id":"1234","score":1}"#;
    let body = signed_delivery("kycliveness.update", payload).unwrap();

    let event = validator()
        .unwrap()
        .validate_request(body.as_bytes(), "text/plain")
        .unwrap();

    match event.dispatch().unwrap() {
        EventPayload::KycLiveness(liveness) => {
            assert_eq!(liveness.kyc_status.as_deref(), Some("processed"));
            assert_eq!(liveness.score, Some(Integer::new(1)));
        }
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn unknown_event_type_is_untyped() {
    init_tracing();
    let payload = r#"{"somethings":[{"id":1}]}"#;
    let body = signed_delivery("something.new", payload).unwrap();

    let event = validator()
        .unwrap()
        .validate_request(body.as_bytes(), "application/json")
        .unwrap();

    assert_eq!(EventFamily::from_event_type(event.event_type()), None);
    match event.dispatch().unwrap() {
        EventPayload::Untyped(value) => assert_eq!(value["somethings"][0]["id"], 1),
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn tampered_payload_is_rejected() {
    init_tracing();
    let signed =
        signed_delivery("transfer.create", r#"{"transfers":[{"amount":"1.00"}]}"#).unwrap();
    let tampered = signed.replace("1.00", "9.00");

    let err = validator()
        .unwrap()
        .validate_request(tampered.as_bytes(), "application/json")
        .unwrap_err();

    assert!(matches!(err, Error::Webhook(WebhookError::SignatureMismatch)));
}

#[test]
fn signature_with_other_secret_is_rejected() {
    init_tracing();
    let body = delivery(
        "user.update",
        r#"{"users":[]}"#,
        "w6kv+eJ0zczieljBWnjsbcu9vQA4qH56EbrvICj9i/8=",
    );

    let err = validator()
        .unwrap()
        .validate_request(body.as_bytes(), "application/json")
        .unwrap_err();

    assert!(matches!(err, Error::Webhook(WebhookError::SignatureMismatch)));
}

#[test]
fn malformed_signature_is_rejected() {
    init_tracing();
    let body = delivery("user.update", r#"{"users":[]}"#, "not base64!");

    let err = validator()
        .unwrap()
        .validate_request(body.as_bytes(), "application/json")
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Webhook(WebhookError::InvalidSignatureEncoding { .. })
    ));
}

#[test]
fn payload_not_matching_event_shape_is_an_error() {
    init_tracing();
    let body = signed_delivery("wallet.create", r#"{"wallets":{"walletId":1}}"#).unwrap();

    let event = validator()
        .unwrap()
        .validate_request(body.as_bytes(), "application/json")
        .unwrap();

    assert!(matches!(
        event.dispatch(),
        Err(Error::Webhook(WebhookError::InvalidPayload { .. }))
    ));
}
