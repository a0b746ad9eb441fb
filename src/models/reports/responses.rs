use serde::Serialize;
use ts_rs::TS;

use crate::models::courses::entities::Course;

// 课程辅导可用性统计
#[derive(Debug, Clone, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../static/js/types/portal.ts")]
pub struct CourseAvailability {
    pub course: Course,
    pub tickets: i64, // 未关闭的工单数
    pub tutors: i64,  // 可辅导该课程的在职辅导员数
}
