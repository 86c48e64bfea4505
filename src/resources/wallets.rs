use crate::{
    envelope::Resource,
    types::{Amount, Boolean, Date, Identifier, Integer, TimestampParis},
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Wallet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_type_id: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_payin_start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_payin_end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_signed: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_count: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_count: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_count: Option<Integer>,
    /// Current balance, `solde` on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solde: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_balance: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_status: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_status: Option<String>,
}

impl Resource for Wallet {
    const KEY: &'static str = "wallets";
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Balance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_balance: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation_date: Option<TimestampParis>,
}

impl Resource for Balance {
    const KEY: &'static str = "balances";
}

/// External bank account registered for payouts.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct BankAccount {
    #[serde(rename = "bankaccountId", skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<Identifier>,
    #[serde(rename = "bankaccountTag", skip_serializing_if = "Option::is_none")]
    pub bank_account_tag: Option<String>,
    #[serde(rename = "bankaccountStatus", skip_serializing_if = "Option::is_none")]
    pub bank_account_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "bankaccountOwnerName", skip_serializing_if = "Option::is_none")]
    pub bank_account_owner_name: Option<String>,
    #[serde(rename = "bankaccountOwnerAddress", skip_serializing_if = "Option::is_none")]
    pub bank_account_owner_address: Option<String>,
    #[serde(rename = "bankaccountIBAN", skip_serializing_if = "Option::is_none")]
    pub bank_account_iban: Option<String>,
    #[serde(rename = "bankaccountBIC", skip_serializing_if = "Option::is_none")]
    pub bank_account_bic: Option<String>,
    #[serde(rename = "bankaccountType", skip_serializing_if = "Option::is_none")]
    pub bank_account_type: Option<String>,
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

impl Resource for BankAccount {
    const KEY: &'static str = "bankaccounts";
}

/// Counterparty of SEPA credit transfers and direct debits.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Beneficiary {
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa_creditor_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdd_core_blacklist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usable_for_sct: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdd_core_known_unique_mandate_reference: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<TimestampParis>,
}

impl Resource for Beneficiary {
    const KEY: &'static str = "beneficiaries";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_single;
    use serde_json::json;

    #[test]
    fn decode_wallet_balance_fields() {
        let body = br#"{"wallets":[{
            "walletId": "878",
            "walletTypeId": 9,
            "solde": "12.50",
            "authorizedBalance": 10,
            "contractSigned": 0,
            "eventPayinEndDate": "0000-00-00",
            "currency": "EUR"
        }]}"#;

        let wallet: Wallet = decode_single(body, Wallet::KEY).unwrap();

        assert_eq!(wallet.wallet_id, Some(Identifier::new("878")));
        assert_eq!(wallet.solde, Some(Amount::new(12.5)));
        assert_eq!(wallet.authorized_balance, Some(Amount::new(10.0)));
        assert_eq!(wallet.contract_signed, Some(Boolean::new(false)));
        assert_eq!(wallet.event_payin_end_date, Some(Date::absent()));
        assert_eq!(wallet.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn encode_bank_account_request() {
        let bank_account = BankAccountBuilder::default()
            .user_id(42u64)
            .bank_account_owner_name("Jane Doe")
            .bank_account_iban("FR7630001007941234567890185")
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&bank_account).unwrap(),
            json!({
                "userId": "42",
                "bankaccountOwnerName": "Jane Doe",
                "bankaccountIBAN": "FR7630001007941234567890185"
            })
        );
    }

    #[test]
    fn beneficiary_id_is_keyed_id() {
        let body = br#"{"beneficiaries":[{"id":7,"usableForSct":"1"}]}"#;

        let beneficiary: Beneficiary = decode_single(body, Beneficiary::KEY).unwrap();

        assert_eq!(beneficiary.beneficiary_id, Some(Identifier::new("7")));
        assert_eq!(beneficiary.usable_for_sct, Some(Boolean::new(true)));
    }
}
