use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// 学期季节，数据库中以整数代码存储
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Winter = 0,
    Spring = 1,
    Summer = 2,
    Fall = 3,
}

impl Season {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn all() -> &'static [Season] {
        &[Season::Winter, Season::Spring, Season::Summer, Season::Fall]
    }
}

impl TryFrom<i32> for Season {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Season::Winter),
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            _ => Err(format!("Invalid season code: {code}")),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Winter => write!(f, "Winter"),
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Fall => write!(f, "Fall"),
        }
    }
}

// 学期实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Semester {
    pub id: i64,
    pub year: i32,
    pub season: Season,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Semester {
    /// 显示名称，例如 "Spring 2024"
    pub fn title(&self) -> String {
        format!("{} {}", self.season, self.year)
    }

    /// 给定日期是否落在学期内（含首尾）
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spring_2024() -> Semester {
        Semester {
            id: 1,
            year: 2024,
            season: Season::Spring,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        }
    }

    #[test]
    fn test_season_codes() {
        for season in Season::all() {
            assert_eq!(Season::try_from(season.code()), Ok(*season));
        }
        assert!(Season::try_from(4).is_err());
        assert!(Season::try_from(-1).is_err());
    }

    #[test]
    fn test_title() {
        assert_eq!(spring_2024().title(), "Spring 2024");
    }

    #[test]
    fn test_contains_is_inclusive() {
        let semester = spring_2024();
        assert!(semester.contains(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));
        assert!(semester.contains(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()));
        assert!(!semester.contains(NaiveDate::from_ymd_opt(2024, 5, 11).unwrap()));
    }
}
