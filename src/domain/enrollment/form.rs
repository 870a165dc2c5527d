//! Enrollment form and its validation.

use serde::Deserialize;

use crate::domain::foundation::{MemberId, ValidationError};
use crate::domain::membership::{Member, MemberProfile, MeteredPlanMember, PrepaidMember};

use super::rules;

/// Raw enrollment input as typed at the front desk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnrollmentForm {
    pub id: String,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub date_of_birth: String,
    pub membership_start_date: String,
}

/// Which membership to enroll into, with its variant-specific field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnrollmentPlan {
    /// Regular membership; how the member heard about the gym.
    MeteredPlan { referral_source: String },

    /// Premium membership; the assigned trainer.
    Prepaid { personal_trainer: String },
}

impl EnrollmentForm {
    /// Checks every field and returns the member's id and profile.
    ///
    /// # Errors
    ///
    /// The first failing rule, checked in this order: required fields, id,
    /// phone, email, date of birth, start date, minimum age.
    pub fn validate(&self) -> Result<(MemberId, MemberProfile), ValidationError> {
        let required = [
            ("id", &self.id),
            ("name", &self.name),
            ("location", &self.location),
            ("phone", &self.phone),
            ("email", &self.email),
            ("gender", &self.gender),
            ("date_of_birth", &self.date_of_birth),
            ("membership_start_date", &self.membership_start_date),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| rules::is_blank(value)) {
            return Err(ValidationError::empty_field(*field));
        }

        let id: MemberId = self.id.parse()?;
        rules::check_phone(self.phone.trim())?;
        rules::check_email(self.email.trim())?;
        let born = rules::parse_date("date_of_birth", &self.date_of_birth)?;
        let start = rules::parse_date("membership_start_date", &self.membership_start_date)?;
        rules::check_minimum_age(born, start)?;

        let profile = MemberProfile {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            gender: self.gender.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            membership_start_date: self.membership_start_date.trim().to_string(),
        };
        Ok((id, profile))
    }

    /// Validates the form and builds a member of the chosen variant.
    ///
    /// # Errors
    ///
    /// Any [`validate`](Self::validate) failure, or an empty referral
    /// source / trainer name.
    pub fn into_member(&self, plan: &EnrollmentPlan) -> Result<Member, ValidationError> {
        let (id, profile) = self.validate()?;

        let member = match plan {
            EnrollmentPlan::MeteredPlan { referral_source } => {
                if referral_source.trim().is_empty() {
                    return Err(ValidationError::empty_field("referral_source"));
                }
                MeteredPlanMember::new(id, profile, referral_source.trim()).into()
            }
            EnrollmentPlan::Prepaid { personal_trainer } => {
                if personal_trainer.trim().is_empty() {
                    return Err(ValidationError::empty_field("personal_trainer"));
                }
                PrepaidMember::new(id, profile, personal_trainer.trim()).into()
            }
        };
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::MemberKind;

    fn form() -> EnrollmentForm {
        EnrollmentForm {
            id: "101".to_string(),
            name: "Nabin Shrestha".to_string(),
            location: "Biratnagar".to_string(),
            phone: "9845678901".to_string(),
            email: "nabin@example.com".to_string(),
            gender: "Male".to_string(),
            date_of_birth: "2001/09/30".to_string(),
            membership_start_date: "2024/01/15".to_string(),
        }
    }

    #[test]
    fn valid_form_produces_id_and_profile() {
        let (id, profile) = form().validate().unwrap();
        assert_eq!(id, MemberId::new(101));
        assert_eq!(profile.name, "Nabin Shrestha");
        assert_eq!(profile.date_of_birth, "2001/09/30");
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut f = form();
        f.location = String::new();
        f.email = String::new();
        assert_eq!(f.validate(), Err(ValidationError::empty_field("location")));
    }

    #[test]
    fn date_placeholder_counts_as_missing() {
        let mut f = form();
        f.membership_start_date = "YYYY/MM/DD".to_string();
        assert_eq!(
            f.validate(),
            Err(ValidationError::empty_field("membership_start_date"))
        );
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let mut f = form();
        f.id = "A-101".to_string();
        assert_eq!(f.validate().unwrap_err().field(), "id");
    }

    #[test]
    fn bad_phone_is_rejected_before_bad_email() {
        let mut f = form();
        f.phone = "12345".to_string();
        f.email = "nope".to_string();
        assert_eq!(f.validate().unwrap_err().field(), "phone");
    }

    #[test]
    fn too_young_member_is_rejected() {
        let mut f = form();
        f.date_of_birth = "2015/03/01".to_string();
        f.membership_start_date = "2025/02/28".to_string();
        assert_eq!(f.validate().unwrap_err().field(), "date_of_birth");
    }

    #[test]
    fn into_member_builds_requested_variant() {
        let regular = form()
            .into_member(&EnrollmentPlan::MeteredPlan {
                referral_source: "Newspaper".to_string(),
            })
            .unwrap();
        let premium = form()
            .into_member(&EnrollmentPlan::Prepaid {
                personal_trainer: "Coach Sunil".to_string(),
            })
            .unwrap();

        assert_eq!(regular.kind(), MemberKind::MeteredPlan);
        assert_eq!(premium.kind(), MemberKind::Prepaid);
        assert_eq!(
            premium.as_prepaid().map(|p| p.personal_trainer()),
            Some("Coach Sunil")
        );
    }

    #[test]
    fn empty_referral_source_is_rejected() {
        let result = form().into_member(&EnrollmentPlan::MeteredPlan {
            referral_source: "   ".to_string(),
        });
        assert_eq!(result, Err(ValidationError::empty_field("referral_source")));
    }

    #[test]
    fn empty_trainer_is_rejected() {
        let result = form().into_member(&EnrollmentPlan::Prepaid {
            personal_trainer: String::new(),
        });
        assert_eq!(result, Err(ValidationError::empty_field("personal_trainer")));
    }
}
