use serde::Serialize;
use ts_rs::TS;

// JSON 列表接口的统一外层结构：{"d": [...]}
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../static/js/types/portal.ts")]
pub struct JsonList<T: TS> {
    pub d: Vec<T>,
}

impl<T: TS> JsonList<T> {
    pub fn new(d: Vec<T>) -> Self {
        Self { d }
    }
}

impl<T: TS> From<Vec<T>> for JsonList<T> {
    fn from(d: Vec<T>) -> Self {
        Self::new(d)
    }
}
