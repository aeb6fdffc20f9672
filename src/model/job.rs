use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Validation failure for a job posting payload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{0}' must not be blank")]
    BlankField(&'static str),
    #[error("applicationLink is not a well-formed URL: {0}")]
    InvalidLink(String),
}

/// Sentinel some older clients send in place of an absent close date.
/// Accepted on input and normalized to `None`.
pub fn legacy_no_close_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).expect("valid calendar date")
}

/// A job posting as stored and served.
///
/// `id` is assigned by storage on creation and `owner` is stamped from the
/// authenticated caller; neither can be changed by a client afterwards.
/// `duration` is in months, 0 meaning unspecified / full-time. `monthly_pay`
/// is the compensation per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub post_date: NaiveDate,
    #[serde(default)]
    pub close_date: Option<NaiveDate>,
    pub location: String,
    pub duration: u32,
    pub employment_type: String,
    pub monthly_pay: u32,
    pub application_link: String,
    pub owner: String,
}

/// The client-suppliable fields of a posting. Anything else in the request
/// body (including `id` and `owner`) is silently dropped on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub post_date: NaiveDate,
    #[serde(default)]
    pub close_date: Option<NaiveDate>,
    pub location: String,
    pub duration: u32,
    pub employment_type: String,
    pub monthly_pay: u32,
    pub application_link: String,
}

impl JobPosting {
    pub fn from_draft(id: i64, owner: String, draft: JobDraft) -> Self {
        Self {
            id,
            title: draft.title,
            company: draft.company,
            post_date: draft.post_date,
            close_date: draft.close_date,
            location: draft.location,
            duration: draft.duration,
            employment_type: draft.employment_type,
            monthly_pay: draft.monthly_pay,
            application_link: draft.application_link,
            owner,
        }
    }

    pub fn has_close_date(&self) -> bool {
        self.close_date.is_some()
    }

    /// Fold the legacy sentinel into the optional representation.
    pub fn normalize(&mut self) {
        if self.close_date == Some(legacy_no_close_date()) {
            self.close_date = None;
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(
            &self.title,
            &self.company,
            &self.location,
            &self.employment_type,
            &self.application_link,
        )
    }
}

impl JobDraft {
    /// Fold the legacy sentinel into the optional representation.
    pub fn normalized(mut self) -> Self {
        if self.close_date == Some(legacy_no_close_date()) {
            self.close_date = None;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(
            &self.title,
            &self.company,
            &self.location,
            &self.employment_type,
            &self.application_link,
        )
    }
}

fn validate_fields(
    title: &str,
    company: &str,
    location: &str,
    employment_type: &str,
    application_link: &str,
) -> Result<(), ValidationError> {
    require_text("title", title)?;
    require_text("company", company)?;
    require_text("location", location)?;
    require_text("employmentType", employment_type)?;
    require_text("applicationLink", application_link)?;

    Url::parse(application_link).map_err(|e| ValidationError::InvalidLink(e.to_string()))?;

    Ok(())
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> JobDraft {
        JobDraft {
            title: "Backend Engineer".to_string(),
            company: "Initech".to_string(),
            post_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            close_date: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            location: "Toronto".to_string(),
            duration: 0,
            employment_type: "Full-time".to_string(),
            monthly_pay: 6500,
            application_link: "https://initech.example.com/careers/42".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes_validation() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::BlankField("title")));
    }

    #[test]
    fn malformed_application_link_is_rejected() {
        let mut d = draft();
        d.application_link = "not a url".to_string();
        assert!(matches!(d.validate(), Err(ValidationError::InvalidLink(_))));
    }

    #[test]
    fn sentinel_close_date_normalizes_to_none() {
        let mut d = draft();
        d.close_date = Some(legacy_no_close_date());
        let d = d.normalized();
        assert_eq!(d.close_date, None);

        let mut posting = JobPosting::from_draft(1, "miles1".to_string(), d);
        posting.close_date = Some(legacy_no_close_date());
        posting.normalize();
        assert!(!posting.has_close_date());
    }

    #[test]
    fn serde_round_trip_preserves_all_fields() {
        let posting = JobPosting::from_draft(7, "miles1".to_string(), draft());
        let wire = serde_json::to_string(&posting).unwrap();
        let back: JobPosting = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, posting);
    }

    #[test]
    fn wire_format_uses_camel_case_and_iso_dates() {
        let posting = JobPosting::from_draft(7, "miles1".to_string(), draft());
        let value = serde_json::to_value(&posting).unwrap();
        assert_eq!(value["postDate"], json!("2026-01-15"));
        assert_eq!(value["closeDate"], json!("2026-03-01"));
        assert_eq!(value["employmentType"], json!("Full-time"));
        assert_eq!(value["monthlyPay"], json!(6500));
        assert_eq!(value["applicationLink"], json!("https://initech.example.com/careers/42"));
    }

    #[test]
    fn missing_close_date_serializes_as_null() {
        let mut posting = JobPosting::from_draft(7, "miles1".to_string(), draft());
        posting.close_date = None;
        let value = serde_json::to_value(&posting).unwrap();
        assert!(value["closeDate"].is_null());

        let back: JobPosting = serde_json::from_value(value).unwrap();
        assert!(!back.has_close_date());
    }

    #[test]
    fn draft_ignores_client_supplied_id_and_owner() {
        let body = json!({
            "title": "Backend Engineer",
            "company": "Initech",
            "postDate": "2026-01-15",
            "closeDate": null,
            "location": "Toronto",
            "duration": 4,
            "employmentType": "Internship",
            "monthlyPay": 3000,
            "applicationLink": "https://initech.example.com/careers/42",
            "id": 9999,
            "owner": "mallory"
        });
        let d: JobDraft = serde_json::from_value(body).unwrap();
        assert_eq!(d.duration, 4);
        assert_eq!(d.close_date, None);
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        let body = json!({
            "title": "Backend Engineer",
            "postDate": "2026-01-15"
        });
        assert!(serde_json::from_value::<JobDraft>(body).is_err());
    }
}
