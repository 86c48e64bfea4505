use crate::{
    envelope::{decode_items, Resource},
    resources::*,
    webhooks::WebhookError,
    Error,
};
use serde::de::DeserializeOwned;

/// Payload shape shared by a group of event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub enum EventFamily {
    Balance,
    BankAccount,
    Beneficiary,
    Card,
    CardDigitalization,
    CardTransaction,
    Chargeback,
    CountryRestrictionGroup,
    Document,
    KycLiveness,
    Mandate,
    MccRestrictionGroup,
    MerchantIdRestrictionGroup,
    Payin,
    PayinRefund,
    Payout,
    PayoutRefund,
    RecallR,
    SepaSctr,
    SepaSddr,
    Transaction,
    Transfer,
    TransferRefund,
    User,
    Wallet,
    /// Known event type without a documented payload.
    Untyped,
}

/// Every event type Treezor is known to send. Adding an event type only takes a new entry.
static EVENT_FAMILIES: &[(&str, EventFamily)] = &[
    ("balance.update", EventFamily::Balance),
    ("beneficiary.create", EventFamily::Beneficiary),
    ("beneficiary.update", EventFamily::Beneficiary),
    ("sepa.return_sctr", EventFamily::SepaSctr),
    ("card.requestphysical", EventFamily::Card),
    ("card.createvirtual", EventFamily::Card),
    ("card.convertvirtual", EventFamily::Card),
    ("card.changepin", EventFamily::Card),
    ("card.activate", EventFamily::Card),
    ("card.renew", EventFamily::Card),
    ("card.regenerate", EventFamily::Card),
    ("card.update", EventFamily::Card),
    ("card.limits", EventFamily::Card),
    ("card.options", EventFamily::Card),
    ("card.setpin", EventFamily::Card),
    ("card.unblockpin", EventFamily::Card),
    ("card.lockunlock", EventFamily::Card),
    ("card.register3DS", EventFamily::Card),
    ("cardDigitalization.create", EventFamily::CardDigitalization),
    ("cardDigitalization.update", EventFamily::CardDigitalization),
    ("cardDigitalization.activation", EventFamily::CardDigitalization),
    ("cardDigitalization.deactivation", EventFamily::CardDigitalization),
    ("cardDigitalization.complete", EventFamily::CardDigitalization),
    ("cardtransaction.create", EventFamily::CardTransaction),
    ("card.acquiring.chargeback.create", EventFamily::Chargeback),
    ("countryGroup.create", EventFamily::CountryRestrictionGroup),
    ("countryGroup.update", EventFamily::CountryRestrictionGroup),
    ("countryGroup.cancel", EventFamily::CountryRestrictionGroup),
    ("document.create", EventFamily::Document),
    ("document.update", EventFamily::Document),
    ("document.cancel", EventFamily::Document),
    ("mandate.create", EventFamily::Mandate),
    ("mandate.sign", EventFamily::Mandate),
    ("mandate.cancel", EventFamily::Mandate),
    ("mccGroup.create", EventFamily::MccRestrictionGroup),
    ("mccGroup.update", EventFamily::MccRestrictionGroup),
    ("mccGroup.cancel", EventFamily::MccRestrictionGroup),
    ("merchantIdGroup.create", EventFamily::MerchantIdRestrictionGroup),
    ("merchantIdGroup.update", EventFamily::MerchantIdRestrictionGroup),
    ("merchantIdGroup.cancel", EventFamily::MerchantIdRestrictionGroup),
    ("sepa.return_sddr", EventFamily::SepaSddr),
    ("sepa.reject_sddr_core", EventFamily::SepaSddr),
    ("sepa.reject_sddr_b2b", EventFamily::SepaSddr),
    ("recallR.need_response", EventFamily::RecallR),
    ("payin.create", EventFamily::Payin),
    ("payin.update", EventFamily::Payin),
    ("payin.cancel", EventFamily::Payin),
    ("payinrefund.create", EventFamily::PayinRefund),
    ("payinrefund.update", EventFamily::PayinRefund),
    ("payinrefund.cancel", EventFamily::PayinRefund),
    ("payout.create", EventFamily::Payout),
    ("payout.update", EventFamily::Payout),
    ("payout.cancel", EventFamily::Payout),
    ("payoutRefund.create", EventFamily::PayoutRefund),
    ("payoutRefund.update", EventFamily::PayoutRefund),
    ("payoutRefund.cancel", EventFamily::PayoutRefund),
    ("transaction.create", EventFamily::Transaction),
    ("transfer.create", EventFamily::Transfer),
    ("transfer.update", EventFamily::Transfer),
    ("transfer.cancel", EventFamily::Transfer),
    ("transferrefund.create", EventFamily::TransferRefund),
    ("transferrefund.update", EventFamily::TransferRefund),
    ("transferrefund.cancel", EventFamily::TransferRefund),
    ("user.create", EventFamily::User),
    ("user.update", EventFamily::User),
    ("user.cancel", EventFamily::User),
    ("user.kycrequest", EventFamily::User),
    ("user.kycreview", EventFamily::User),
    ("kycliveness.create", EventFamily::KycLiveness),
    ("kycliveness.update", EventFamily::KycLiveness),
    ("wallet.create", EventFamily::Wallet),
    ("wallet.update", EventFamily::Wallet),
    ("wallet.cancel", EventFamily::Wallet),
    ("bankaccount.create", EventFamily::BankAccount),
    ("bankaccount.update", EventFamily::BankAccount),
    ("bankaccount.cancel", EventFamily::BankAccount),
    ("sepa.reject_sdde", EventFamily::Untyped),
    ("oneclickcard.create", EventFamily::Untyped),
    ("oneclickcard.update", EventFamily::Untyped),
    ("oneclickcard.cancel", EventFamily::Untyped),
];

impl EventFamily {
    /// Looks up the family of an event type, `None` if the event type is unknown.
    ///
    /// Event types are case sensitive.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        EVENT_FAMILIES
            .iter()
            .find(|(name, _)| *name == event_type)
            .map(|(_, family)| *family)
    }

    /// All the event types belonging to this family.
    pub fn event_types(self) -> impl Iterator<Item = &'static str> {
        EVENT_FAMILIES
            .iter()
            .filter(move |(_, family)| *family == self)
            .map(|(name, _)| *name)
    }
}

/// Decoded webhook payload.
///
/// Enveloped payloads hold every item of the envelope, usually a single one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub enum EventPayload {
    Balance(Vec<Balance>),
    BankAccount(Vec<BankAccount>),
    Beneficiary(Vec<Beneficiary>),
    Card(Vec<Card>),
    CardDigitalization(CardDigitalization),
    CardTransaction(Vec<CardTransaction>),
    Chargeback(Vec<Chargeback>),
    CountryRestrictionGroup(Vec<CountryRestrictionGroup>),
    Document(Vec<Document>),
    KycLiveness(KycLiveness),
    Mandate(Vec<Mandate>),
    MccRestrictionGroup(Vec<MccRestrictionGroup>),
    MerchantIdRestrictionGroup(Vec<MerchantIdRestrictionGroup>),
    Payin(Vec<Payin>),
    PayinRefund(Vec<PayinRefund>),
    Payout(Vec<Payout>),
    PayoutRefund(Vec<PayoutRefund>),
    RecallR(Vec<RecallR>),
    SepaSctr(Vec<SepaSctr>),
    SepaSddr(Vec<SepaSddr>),
    Transaction(Vec<Transaction>),
    Transfer(Vec<Transfer>),
    TransferRefund(Vec<TransferRefund>),
    User(Vec<User>),
    Wallet(Vec<Wallet>),
    /// Payload of an unknown or undocumented event type.
    Untyped(serde_json::Value),
}

fn items<T: Resource>(payload: &[u8]) -> serde_json::Result<Vec<T>> {
    decode_items(payload, T::KEY)
}

fn flat<T: DeserializeOwned>(payload: &[u8]) -> serde_json::Result<T> {
    serde_json::from_slice(payload)
}

/// Decodes `payload` into the shape registered for `event_type`.
pub(crate) fn decode(event_type: &str, payload: &[u8]) -> Result<EventPayload, Error> {
    let family = EventFamily::from_event_type(event_type).unwrap_or_else(|| {
        tracing::warn!(event_type, "Unknown webhook event type, decoding untyped payload");
        EventFamily::Untyped
    });

    let decoded = match family {
        EventFamily::Balance => items(payload).map(EventPayload::Balance),
        EventFamily::BankAccount => items(payload).map(EventPayload::BankAccount),
        EventFamily::Beneficiary => items(payload).map(EventPayload::Beneficiary),
        EventFamily::Card => items(payload).map(EventPayload::Card),
        EventFamily::CardDigitalization => flat(payload).map(EventPayload::CardDigitalization),
        EventFamily::CardTransaction => items(payload).map(EventPayload::CardTransaction),
        EventFamily::Chargeback => items(payload).map(EventPayload::Chargeback),
        EventFamily::CountryRestrictionGroup => {
            items(payload).map(EventPayload::CountryRestrictionGroup)
        }
        EventFamily::Document => items(payload).map(EventPayload::Document),
        EventFamily::KycLiveness => flat(payload).map(EventPayload::KycLiveness),
        EventFamily::Mandate => items(payload).map(EventPayload::Mandate),
        EventFamily::MccRestrictionGroup => items(payload).map(EventPayload::MccRestrictionGroup),
        EventFamily::MerchantIdRestrictionGroup => {
            items(payload).map(EventPayload::MerchantIdRestrictionGroup)
        }
        EventFamily::Payin => items(payload).map(EventPayload::Payin),
        EventFamily::PayinRefund => items(payload).map(EventPayload::PayinRefund),
        EventFamily::Payout => items(payload).map(EventPayload::Payout),
        EventFamily::PayoutRefund => items(payload).map(EventPayload::PayoutRefund),
        EventFamily::RecallR => items(payload).map(EventPayload::RecallR),
        EventFamily::SepaSctr => items(payload).map(EventPayload::SepaSctr),
        EventFamily::SepaSddr => items(payload).map(EventPayload::SepaSddr),
        EventFamily::Transaction => items(payload).map(EventPayload::Transaction),
        EventFamily::Transfer => items(payload).map(EventPayload::Transfer),
        EventFamily::TransferRefund => items(payload).map(EventPayload::TransferRefund),
        EventFamily::User => items(payload).map(EventPayload::User),
        EventFamily::Wallet => items(payload).map(EventPayload::Wallet),
        EventFamily::Untyped => flat(payload).map(EventPayload::Untyped),
    };

    decoded.map_err(|source| {
        WebhookError::InvalidPayload {
            event_type: event_type.to_string(),
            source,
        }
        .into()
    })
}
