use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 工单状态，数据库中以小写字符串存储，缺失表示尚未处理
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../static/js/types/portal.ts")]
pub enum TicketStatus {
    Open,
    Claimed,
    Closed,
}

impl TicketStatus {
    pub const OPEN: &'static str = "open";
    pub const CLAIMED: &'static str = "claimed";
    pub const CLOSED: &'static str = "closed";

    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => Self::OPEN,
            TicketStatus::Claimed => Self::CLAIMED,
            TicketStatus::Closed => Self::CLOSED,
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::OPEN => Ok(TicketStatus::Open),
            Self::CLAIMED => Ok(TicketStatus::Claimed),
            Self::CLOSED => Ok(TicketStatus::Closed),
            _ => Err(format!("Invalid ticket status: '{s}'")),
        }
    }
}

// 学生求助工单
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../static/js/types/portal.ts")]
pub struct Ticket {
    pub id: i64,
    pub student_email: String,
    pub student_name: String,
    pub section_id: i64,
    pub assignment: String,
    pub question: String,
    pub problem_type_id: Option<i64>,
    pub status: Option<TicketStatus>,
    pub tutor_id: Option<i64>,
    pub time_created: DateTime<Utc>,
    pub time_claimed: Option<DateTime<Utc>>,
    pub time_closed: Option<DateTime<Utc>>,
}
