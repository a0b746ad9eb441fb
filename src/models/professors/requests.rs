use crate::errors::{PortalError, Result};
use crate::models::FormFields;

// 教授编辑表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessorForm {
    pub first_name: String,
    pub last_name: String,
}

impl TryFrom<&FormFields> for ProfessorForm {
    type Error = PortalError;

    fn try_from(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            first_name: fields.require("first_name")?.to_string(),
            last_name: fields.require("last_name")?.to_string(),
        })
    }
}
