use crate::errors::{PortalError, Result};
use crate::models::FormFields;
use crate::utils::validate::validate_email;

/// 辅导课程复选框的字段前缀，例如 `course_3`
pub const COURSE_FIELD_PREFIX: &str = "course_";

// 辅导员编辑表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub course_ids: Vec<i64>,
}

impl TryFrom<&FormFields> for TutorForm {
    type Error = PortalError;

    fn try_from(fields: &FormFields) -> Result<Self> {
        let email = fields.require("email")?.to_lowercase();
        validate_email(&email).map_err(PortalError::validation)?;

        Ok(Self {
            email,
            first_name: fields.require("first_name")?.to_string(),
            last_name: fields.require("last_name")?.to_string(),
            is_active: fields.checked("is_active"),
            is_superuser: fields.checked("is_superuser"),
            course_ids: fields.checked_ids(COURSE_FIELD_PREFIX),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    #[test]
    fn test_tutor_form_collects_courses() {
        let form = TutorForm::try_from(&fields(&[
            ("email", "JDoe@unomaha.edu"),
            ("first_name", "Jane"),
            ("last_name", "Doe"),
            ("is_active", "on"),
            ("course_4", "on"),
            ("course_2", "on"),
        ]))
        .unwrap();
        assert_eq!(form.email, "jdoe@unomaha.edu");
        assert!(form.is_active);
        assert!(!form.is_superuser);
        assert_eq!(form.course_ids, vec![2, 4]);
    }

    #[test]
    fn test_tutor_form_rejects_bad_email() {
        let err = TutorForm::try_from(&fields(&[
            ("email", "not-an-email"),
            ("first_name", "Jane"),
            ("last_name", "Doe"),
        ]))
        .unwrap_err();
        assert_eq!(err.code(), "E006");
    }
}
