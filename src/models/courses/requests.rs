use crate::errors::{PortalError, Result};
use crate::models::FormFields;

// 课程编辑表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseForm {
    pub number: String,
    pub name: String,
    pub on_display: bool,
}

impl TryFrom<&FormFields> for CourseForm {
    type Error = PortalError;

    fn try_from(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            number: fields.require("number")?.to_string(),
            name: fields.require("name")?.to_string(),
            on_display: fields.checked("on_display"),
        })
    }
}
