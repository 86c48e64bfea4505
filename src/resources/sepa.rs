use crate::{
    envelope::Resource,
    types::{Amount, Date, Identifier, TimestampParis},
};
use serde::{Deserialize, Serialize};

/// Returned SEPA credit transfer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct SepaSctr {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_iban_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interbank_settlement_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debitor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debitor_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debitor_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unstructured_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_reason_code: Option<String>,
}

impl Resource for SepaSctr {
    const KEY: &'static str = "sepaSctrs";
}

/// Returned or rejected SEPA direct debit.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct SepaSddr {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_iban_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interbank_settlement_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_collection_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa_creditor_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_signature: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debitor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debitor_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debitor_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unstructured_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bankaccount_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<Identifier>,
}

impl Resource for SepaSddr {
    const KEY: &'static str = "sepaSddrs";
}

/// Recall request received for an incoming SEPA credit transfer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct RecallR {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cxl_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_status_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_activation_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sctr_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sctr_tx_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sctr_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sctr_currency: Option<String>,
    // both spellings have been seen upstream
    #[serde(alias = "sctr_settelment_date", skip_serializing_if = "Option::is_none")]
    pub sctr_settlement_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sctr_dbtr_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payinrefund_id: Option<Identifier>,
}

impl Resource for RecallR {
    const KEY: &'static str = "recallrs";
}
