use crate::{
    envelope::Resource,
    types::{Amount, Date, Identifier, Integer, TimestampParis},
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Wallet to wallet transfer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Transfer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_type_id: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_type_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_wallet_type_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_fee: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_wallet_event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_wallet_alias: Option<String>,
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

impl Resource for Transfer {
    const KEY: &'static str = "transfers";
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct TransferRefund {
    #[serde(rename = "transferrefundId", skip_serializing_if = "Option::is_none")]
    pub transfer_refund_id: Option<Identifier>,
    #[serde(rename = "transferrefundTag", skip_serializing_if = "Option::is_none")]
    pub transfer_refund_tag: Option<String>,
    #[serde(rename = "transferrefundStatus", skip_serializing_if = "Option::is_none")]
    pub transfer_refund_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<Identifier>,
    #[serde(rename = "transferrefundDate", skip_serializing_if = "Option::is_none")]
    pub transfer_refund_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
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

impl Resource for TransferRefund {
    const KEY: &'static str = "transferrefunds";
}

/// Ledger movement between two wallets.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_debit_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_credit_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_debit_balance: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_credit_balance: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<Integer>,
}

impl Resource for Transaction {
    const KEY: &'static str = "transactions";
}
