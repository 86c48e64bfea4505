use crate::{
    envelope::Resource,
    types::{Amount, Boolean, Date, Identifier, Integer, TimestampLondon, TimestampParis},
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Payment card, physical or virtual.
///
/// Card dates are expressed in `Europe/London`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_cardtransaction_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc_restriction_group_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_restriction_group_id: Option<Identifier>,
    #[serde(rename = "countryRestrictionGroupID", skip_serializing_if = "Option::is_none")]
    pub country_restriction_group_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_live: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_try_exceeds: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embossed_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<Date>,
    #[serde(rename = "CVV", skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perms_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_design: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_converted: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_atm: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_foreign: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_online: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_nfc: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_atm_year: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_atm_month: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_atm_week: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_atm_day: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_atm_all: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_payment_year: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_payment_month: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_payment_week: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_payment_day: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_payment_all: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_daily_limit: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_atm_month: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_payment_month: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampLondon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<TimestampLondon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_number: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<Integer>,
}

impl Resource for Card {
    const KEY: &'static str = "cards";
}

/// Authorization or settlement of a card payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CardTransaction {
    #[serde(rename = "cardtransactionId", skip_serializing_if = "Option::is_none")]
    pub card_transaction_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_local_time: Option<TimestampLondon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_local_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_local_date: Option<Date>,
    #[serde(rename = "is3DS", skip_serializing_if = "Option::is_none")]
    pub is_3ds: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_cardholder_presence: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_terminal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_card_presence: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_entry_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_response_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_issuer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_issuer_time: Option<TimestampLondon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_mti: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_balance: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<Integer>,
}

impl Resource for CardTransaction {
    const KEY: &'static str = "cardtransactions";
}

/// Enrolment of a card in a mobile wallet, delivered flat without an envelope.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CardDigitalization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_requestor: Option<String>,
    #[serde(rename = "cardDigitalizationExternalId", skip_serializing_if = "Option::is_none")]
    pub card_digitalization_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Identifier>,
    // misspelled upstream
    #[serde(rename = "activactionCode", skip_serializing_if = "Option::is_none")]
    pub activation_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_code_expiry: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Date>,
}

/// Chargeback raised on an acquired card payin.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Chargeback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_refund_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_refunded: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargeback_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_refund_created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargeback_created_date: Option<TimestampParis>,
}

impl Resource for Chargeback {
    const KEY: &'static str = "chargebacks";
}

/// Shared shape of the country, MCC and merchant id restriction groups.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct RestrictionGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_whitelist: Option<Boolean>,
    /// Restricted values: country codes, MCCs or merchant ids depending on the group kind.
    #[serde(
        alias = "countries",
        alias = "mccs",
        skip_serializing_if = "Option::is_none"
    )]
    pub merchants: Option<Vec<Identifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<TimestampParis>,
}

macro_rules! restriction_group {
    ($(#[$doc:meta])* $name:ident, $key:literal) => {
        $(#[$doc])*
        #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
        #[serde(transparent)]
        pub struct $name(pub RestrictionGroup);

        impl Resource for $name {
            const KEY: &'static str = $key;
        }

        impl std::ops::Deref for $name {
            type Target = RestrictionGroup;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

restriction_group!(
    /// Countries a card may or may not be used in.
    CountryRestrictionGroup,
    "countryRestrictionGroups"
);
restriction_group!(
    /// Merchant category codes a card may or may not be used with.
    MccRestrictionGroup,
    "mccIdRestrictionGroups"
);
restriction_group!(
    /// Merchants a card may or may not be used with.
    MerchantIdRestrictionGroup,
    "merchantIdRestrictionGroups"
);
