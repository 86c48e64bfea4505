use crate::{
    envelope::Resource,
    types::{Boolean, Date, Identifier, Integer, KycLevel, KycReview, Percentage, TimestampParis},
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A natural or legal person known to Treezor.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type_id: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controlling_person_type: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_type: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<Integer>,
    #[serde(rename = "specifiedUSPerson", skip_serializing_if = "Option::is_none")]
    pub specified_us_person: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_tva_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_registration_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_share_capital: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_beneficiary: Option<Percentage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_level: Option<KycLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_review: Option<KycReview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_review_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_frozen: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_in_mailing: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa_creditor_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_outside_eu: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economic_sanctions: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_countries_sanctions: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub involved_sanctions: Option<Boolean>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanctions_questionnaire_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<TimestampParis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_count: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payin_count: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_status: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_status: Option<String>,
}

impl Resource for User {
    const KEY: &'static str = "users";
}

/// KYC document uploaded for a user.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type_id: Option<Integer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_url_thumb: Option<String>,
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

impl Resource for Document {
    const KEY: &'static str = "documents";
}

/// Outcome of a KYC liveness check.
///
/// Delivered flat, without an envelope, with kebab-case keys and RFC 3339 dates.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct KycLiveness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<KycLivenessIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "user_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Integer>,
}

/// Identity detected during a liveness check.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct KycLivenessIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{decode_single, Envelope};
    use chrono::{NaiveDate, TimeZone};
    use serde_json::json;

    #[test]
    fn decode_user_with_lenient_scalars() {
        let body = br#"{"users":[{
            "userId": 123,
            "userTypeId": "1",
            "firstname": "Alex",
            "birthday": "0000-00-00",
            "isFrozen": "0",
            "specifiedUSPerson": 1,
            "effectiveBeneficiary": "",
            "walletCount": "",
            "kycLevel": "2",
            "kycReview": 1,
            "createdDate": "2021-03-28 01:30:00",
            "somethingNew": {"ignored": true}
        }]}"#;

        let user: User = decode_single(body, User::KEY).unwrap();

        assert_eq!(user.user_id, Some(Identifier::new("123")));
        assert_eq!(user.user_type_id, Some(Integer::new(1)));
        assert_eq!(user.firstname.as_deref(), Some("Alex"));
        assert!(user.birthday.unwrap().is_absent());
        assert_eq!(user.is_frozen, Some(Boolean::new(false)));
        assert_eq!(user.specified_us_person, Some(Boolean::new(true)));
        assert_eq!(user.effective_beneficiary, Some(Percentage::new(0.0)));
        assert_eq!(user.wallet_count, Some(Integer::new(0)));
        assert_eq!(user.kyc_level, Some(KycLevel::REGULAR));
        assert_eq!(user.kyc_review.map(|r| r.to_string()).as_deref(), Some("PENDING"));
        assert_eq!(
            user.created_date.unwrap().instant(),
            Some(Utc.with_ymd_and_hms(2021, 3, 28, 0, 30, 0).unwrap())
        );
        assert_eq!(user.lastname, None);
    }

    #[test]
    fn builder_skips_absent_fields() {
        let user = UserBuilder::default()
            .firstname("Alex")
            .specified_us_person(false)
            .birthday(NaiveDate::from_ymd_opt(1990, 1, 31).unwrap())
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "firstname": "Alex",
                "specifiedUSPerson": 0,
                "birthday": "1990-01-31"
            })
        );
    }

    #[test]
    fn decode_document_list() {
        let body = br#"{"documents":[
            {"documentId":"1","documentTypeId":9},
            {"documentId":"2","documentTypeId":"2"}
        ]}"#;

        let documents = Envelope::<Document>::decode_resource(body).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents.items()[1].document_type_id, Some(Integer::new(2)));
    }

    #[test]
    fn decode_kyc_liveness() {
        let payload = br#"{
            "started-at": "2021-06-01T10:00:00+02:00",
            "identity": {"last-name": "Doe", "first-name": "Jane"},
            "kyc-status": "processed",
            "user_id": "42",
            "score": "1"
        }"#;

        let liveness: KycLiveness = serde_json::from_slice(payload).unwrap();

        assert_eq!(
            liveness.started_at,
            Some(Utc.with_ymd_and_hms(2021, 6, 1, 8, 0, 0).unwrap())
        );
        assert_eq!(
            liveness.identity.unwrap().first_name.as_deref(),
            Some("Jane")
        );
        assert_eq!(liveness.user_id.as_deref(), Some("42"));
        assert_eq!(liveness.score, Some(Integer::new(1)));
    }
}
