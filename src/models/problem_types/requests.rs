use crate::errors::{PortalError, Result};
use crate::models::FormFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemTypeForm {
    pub description: String,
}

impl TryFrom<&FormFields> for ProblemTypeForm {
    type Error = PortalError;

    fn try_from(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            description: fields.require("description")?.to_string(),
        })
    }
}
