use crate::{
    envelope::Resource,
    types::{Amount, Boolean, Date, Identifier, Integer, TimestampParis},
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Money entering a wallet: card, SEPA transfer, direct debit or cheque.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Payin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_to_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributor_fee: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_accepted_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_refused_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_canceled_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban_fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban_bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban_tx_end_to_end_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban_tx_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<Amount>,
    #[serde(rename = "DbtrIBAN", skip_serializing_if = "Option::is_none")]
    pub debtor_iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_address_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_iban: Option<String>,
    #[serde(rename = "creditorBIC", skip_serializing_if = "Option::is_none")]
    pub creditor_bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_iban_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_iban_reference: Option<String>,
    /// Payment method specific details, kept as received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_status: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_status: Option<String>,
}

impl Resource for Payin {
    const KEY: &'static str = "payins";
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct PayinRefund {
    #[serde(rename = "payinrefundId", skip_serializing_if = "Option::is_none")]
    pub payin_refund_id: Option<Identifier>,
    #[serde(rename = "payinrefundTag", skip_serializing_if = "Option::is_none")]
    pub payin_refund_tag: Option<String>,
    #[serde(rename = "payinrefundStatus", skip_serializing_if = "Option::is_none")]
    pub payin_refund_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_id: Option<Identifier>,
    #[serde(rename = "payinrefundDate", skip_serializing_if = "Option::is_none")]
    pub payin_refund_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_tms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_status: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_status: Option<String>,
}

impl Resource for PayinRefund {
    const KEY: &'static str = "payinrefunds";
}

/// Money leaving a wallet towards an external bank account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Payout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_type_id: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(rename = "bankaccountId", skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_mandate_reference: Option<String>,
    #[serde(rename = "bankaccountIBAN", skip_serializing_if = "Option::is_none")]
    pub bank_account_iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_fee: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_status: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_status: Option<String>,
}

impl Resource for Payout {
    const KEY: &'static str = "payouts";
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct PayoutRefund {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_status: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_status: Option<String>,
}

impl Resource for PayoutRefund {
    const KEY: &'static str = "payoutRefunds";
}

/// SEPA direct debit mandate.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Mandate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_mandate_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa_creditor_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_signature_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_signature_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paper: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdd_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_ultimate_creditor: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_status: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_status: Option<String>,
}

impl Resource for Mandate {
    const KEY: &'static str = "mandates";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_single;
    use serde_json::json;

    #[test]
    fn decode_payin_keeps_additional_data() {
        let body = br#"{"payins":[{
            "payinId": "1234",
            "amount": 20,
            "DbtrIBAN": "FR76...",
            "creditorBIC": "TRZOFR21XXX",
            "additionalData": {"card": {"externalProvider": {"state": "authorized"}}}
        }]}"#;

        let payin: Payin = decode_single(body, Payin::KEY).unwrap();

        assert_eq!(payin.amount, Some(Amount::new(20.0)));
        assert_eq!(payin.debtor_iban.as_deref(), Some("FR76..."));
        assert_eq!(payin.creditor_bic.as_deref(), Some("TRZOFR21XXX"));
        assert_eq!(
            payin.additional_data.unwrap()["card"]["externalProvider"]["state"],
            "authorized"
        );
    }

    #[test]
    fn encode_payout_request() {
        let payout = PayoutBuilder::default()
            .wallet_id(12u64)
            .bank_account_id(34u64)
            .amount(99.99)
            .currency("EUR")
            .payout_tag("order-1")
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&payout).unwrap(),
            json!({
                "payoutTag": "order-1",
                "walletId": "12",
                "bankaccountId": "34",
                "amount": "99.99",
                "currency": "EUR"
            })
        );
    }

    #[test]
    fn decode_mandate_booleans() {
        let body = br#"{"mandates":[{"mandateId":5,"signed":1,"isPaper":false,"signatureDate":"2021-01-15"}]}"#;

        let mandate: Mandate = decode_single(body, Mandate::KEY).unwrap();

        assert_eq!(mandate.signed, Some(Boolean::new(true)));
        assert_eq!(mandate.is_paper, Some(Boolean::new(false)));
        assert_eq!(mandate.signature_date.unwrap().to_string(), "2021-01-15");
    }
}
