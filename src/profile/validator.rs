use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::model::user::BORN_DATE_FORMAT;

use super::avatar::{DEFAULT_AVATAR_TIMEOUT_SECS, ImageVerifier};
use super::{ProfileField, ProfileInput};

pub const MINIMUM_AGE: u32 = 18;

// Empty and all-space names are accepted.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ A-Za-z]*$").expect("name pattern compiles"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").expect("email pattern compiles"));
static BORN_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

/// A submission whose every field passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    pub born_date: NaiveDate,
}

/// Field alerts plus the submitted values, for redisplaying the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub alerts: BTreeMap<ProfileField, String>,
    pub inputs: ProfileInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accepted(ValidProfile),
    Rejected(Rejection),
}

pub fn validate_name(name: &str) -> Option<&str> {
    NAME_PATTERN.is_match(name).then_some(name)
}

pub fn validate_email(email: &str) -> Option<&str> {
    EMAIL_PATTERN.is_match(email).then_some(email)
}

/// Parses `yyyy-MM-dd` and requires at least [`MINIMUM_AGE`] whole years
/// between the date and `today`.
pub fn validate_born_date(born_date: &str, today: NaiveDate) -> Option<NaiveDate> {
    if !BORN_DATE_PATTERN.is_match(born_date) {
        return None;
    }
    let date = NaiveDate::parse_from_str(born_date, BORN_DATE_FORMAT).ok()?;
    let age = today.years_since(date)?;
    (age >= MINIMUM_AGE).then_some(date)
}

pub struct ProfileValidator<V> {
    verifier: V,
    today: NaiveDate,
    avatar_timeout: Duration,
}

impl<V: ImageVerifier> ProfileValidator<V> {
    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            today: Local::now().date_naive(),
            avatar_timeout: Duration::from_secs(DEFAULT_AVATAR_TIMEOUT_SECS),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_avatar_timeout(mut self, timeout: Duration) -> Self {
        self.avatar_timeout = timeout;
        self
    }

    /// Any failure, including a malformed URL or an expired timeout, is a
    /// plain rejection.
    pub async fn validate_avatar<'a>(&self, avatar: &'a str) -> Option<&'a str> {
        let url = match Url::parse(avatar) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => url,
            Ok(url) => {
                tracing::debug!(scheme = url.scheme(), "avatar url scheme not allowed");
                return None;
            }
            Err(err) => {
                tracing::debug!(error = %err, "avatar url does not parse");
                return None;
            }
        };

        match tokio::time::timeout(self.avatar_timeout, self.verifier.verify(&url)).await {
            Ok(true) => Some(avatar),
            Ok(false) => None,
            Err(_) => {
                tracing::debug!(%url, timeout = ?self.avatar_timeout, "avatar check timed out");
                None
            }
        }
    }

    pub async fn validate(&self, input: ProfileInput) -> Validation {
        let input = input.trimmed();
        let first_name = validate_name(&input.first_name).map(str::to_string);
        let last_name = validate_name(&input.last_name).map(str::to_string);
        let email = validate_email(&input.email).map(str::to_string);
        let avatar = self
            .validate_avatar(&input.avatar)
            .await
            .map(str::to_string);
        let born_date = validate_born_date(&input.born_date, self.today);

        match (first_name, last_name, email, avatar, born_date) {
            (Some(first_name), Some(last_name), Some(email), Some(avatar), Some(born_date)) => {
                Validation::Accepted(ValidProfile {
                    first_name,
                    last_name,
                    email,
                    avatar,
                    bio: input.bio,
                    born_date,
                })
            }
            (first_name, last_name, email, avatar, born_date) => {
                let failed = [
                    (ProfileField::FirstName, first_name.is_none()),
                    (ProfileField::LastName, last_name.is_none()),
                    (ProfileField::Email, email.is_none()),
                    (ProfileField::Avatar, avatar.is_none()),
                    (ProfileField::BornDate, born_date.is_none()),
                ];
                let alerts = failed
                    .into_iter()
                    .filter(|(_, failed)| *failed)
                    .map(|(field, _)| (field, field.alert().to_string()))
                    .collect::<BTreeMap<_, _>>();

                tracing::info!(
                    fields = ?alerts.keys().collect::<Vec<_>>(),
                    "profile submission rejected"
                );
                Validation::Rejected(Rejection { alerts, inputs: input })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct FixedVerifier(bool);

    #[async_trait]
    impl ImageVerifier for FixedVerifier {
        async fn verify(&self, _url: &Url) -> bool {
            self.0
        }
    }

    struct StalledVerifier;

    #[async_trait]
    impl ImageVerifier for StalledVerifier {
        async fn verify(&self, _url: &Url) -> bool {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            true
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    fn input() -> ProfileInput {
        ProfileInput {
            first_name: "Jo".to_string(),
            last_name: "Lee".to_string(),
            email: "jo@x.com".to_string(),
            avatar: "http://img/a.png".to_string(),
            bio: "hi".to_string(),
            born_date: "2000-01-01".to_string(),
        }
    }

    #[test]
    fn names_allow_letters_and_spaces_only() {
        assert_eq!(validate_name("John Smith"), Some("John Smith"));
        assert_eq!(validate_name("John3"), None);
        assert_eq!(validate_name("Zoë"), None);
        assert_eq!(validate_name(""), Some(""));
        assert_eq!(validate_name("   "), Some("   "));
    }

    #[test]
    fn emails_need_local_part_and_at_sign() {
        assert_eq!(validate_email("a@b"), Some("a@b"));
        assert_eq!(validate_email("first.last+tag@example.org"), Some("first.last+tag@example.org"));
        assert_eq!(validate_email("a.b.com"), None);
        assert_eq!(validate_email("@b"), None);
        assert_eq!(validate_email("a@"), None);
        assert_eq!(validate_email("a b@c"), None);
    }

    #[test]
    fn born_date_requires_iso_format_and_adult_age() {
        let today = today();
        assert_eq!(
            validate_born_date("2000-01-01", today),
            NaiveDate::from_ymd_opt(2000, 1, 1)
        );
        assert_eq!(validate_born_date("not-a-date", today), None);
        assert_eq!(validate_born_date("01/01/2000", today), None);
        assert_eq!(validate_born_date("2030-01-01", today), None);
        assert_eq!(validate_born_date("2000-1-1", today), None);
        assert_eq!(validate_born_date("2000-01-1", today), None);
        assert_eq!(validate_born_date("+2000-01-01", today), None);
        assert_eq!(validate_born_date("2000-02-30", today), None);
    }

    #[test]
    fn born_date_boundary_is_exactly_eighteen_years() {
        let today = today();
        assert!(validate_born_date("2008-10-19", today).is_some());
        assert!(validate_born_date("2008-10-20", today).is_none());
    }

    #[tokio::test]
    async fn accepts_valid_submission_after_trimming() {
        let validator = ProfileValidator::new(FixedVerifier(true)).with_today(today());
        let mut raw = input();
        raw.first_name = "  Jo ".to_string();
        raw.bio = " hi there ".to_string();

        let Validation::Accepted(profile) = validator.validate(raw).await else {
            panic!("expected accepted submission");
        };
        assert_eq!(profile.first_name, "Jo");
        assert_eq!(profile.bio, "hi there");
        assert_eq!(profile.born_date, NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"));
    }

    #[tokio::test]
    async fn collects_every_failing_field() {
        let validator = ProfileValidator::new(FixedVerifier(false)).with_today(today());
        let raw = ProfileInput {
            first_name: "Jo3".to_string(),
            last_name: "Lee".to_string(),
            email: "bad".to_string(),
            avatar: "http://img/a.png".to_string(),
            bio: String::new(),
            born_date: "2015-02-02".to_string(),
        };

        let Validation::Rejected(rejection) = validator.validate(raw.clone()).await else {
            panic!("expected rejection");
        };
        let fields = rejection.alerts.keys().copied().collect::<Vec<_>>();
        assert_eq!(
            fields,
            [
                ProfileField::FirstName,
                ProfileField::Email,
                ProfileField::Avatar,
                ProfileField::BornDate
            ]
        );
        assert_eq!(
            rejection.alerts[&ProfileField::Email],
            "Email must be formatted correctly."
        );
        assert_eq!(rejection.inputs, raw);
    }

    #[tokio::test]
    async fn malformed_or_non_http_avatar_urls_are_rejected_without_fetching() {
        let validator = ProfileValidator::new(FixedVerifier(true));
        assert_eq!(validator.validate_avatar("not a url").await, None);
        assert_eq!(validator.validate_avatar("file:///etc/passwd").await, None);
        assert_eq!(
            validator.validate_avatar("https://img.example/a.png").await,
            Some("https://img.example/a.png")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn slow_avatar_check_times_out_as_invalid() {
        let validator =
            ProfileValidator::new(StalledVerifier).with_avatar_timeout(Duration::from_secs(2));
        assert_eq!(validator.validate_avatar("http://img/slow.png").await, None);
    }
}
