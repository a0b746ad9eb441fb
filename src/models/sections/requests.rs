use crate::errors::{PortalError, Result};
use crate::models::FormFields;

// 课程班级编辑表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionForm {
    pub number: String,
    pub course_id: i64,
    pub semester_id: i64,
    pub professor_id: Option<i64>,
}

impl TryFrom<&FormFields> for SectionForm {
    type Error = PortalError;

    fn try_from(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            number: fields.require("number")?.to_string(),
            course_id: fields.require_int("course_id")?,
            semester_id: fields.require_int("semester_id")?,
            professor_id: fields.optional_int("professor_id")?,
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
    fn test_professor_is_optional() {
        let form = SectionForm::try_from(&fields(&[
            ("number", "001"),
            ("course_id", "2"),
            ("semester_id", "5"),
            ("professor_id", ""),
        ]))
        .unwrap();
        assert_eq!(form.course_id, 2);
        assert_eq!(form.semester_id, 5);
        assert_eq!(form.professor_id, None);
    }

    #[test]
    fn test_malformed_professor_is_rejected() {
        let err = SectionForm::try_from(&fields(&[
            ("number", "001"),
            ("course_id", "2"),
            ("semester_id", "5"),
            ("professor_id", "smith"),
        ]))
        .unwrap_err();
        assert_eq!(err.code(), "E006");
    }
}
