use chrono::NaiveDate;

use super::entities::Season;
use crate::errors::{PortalError, Result};
use crate::models::FormFields;

// 学期编辑表单
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterForm {
    pub year: i32,
    pub season: Season,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TryFrom<&FormFields> for SemesterForm {
    type Error = PortalError;

    fn try_from(fields: &FormFields) -> Result<Self> {
        let season = Season::try_from(fields.require_int::<i32>("season")?)
            .map_err(PortalError::validation)?;
        let form = Self {
            year: fields.require_int("year")?,
            season,
            start_date: fields.require_date("start_date")?,
            end_date: fields.require_date("end_date")?,
        };

        if form.end_date < form.start_date {
            return Err(PortalError::validation(
                "End date must not be before start date",
            ));
        }

        Ok(form)
    }
}
