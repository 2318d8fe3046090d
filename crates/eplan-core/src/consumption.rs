//! 用電紀錄模型

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 每日用電紀錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    /// 紀錄ID
    pub id: Uuid,

    /// 設施ID
    pub facility_id: u32,

    /// 紀錄日期
    pub date: NaiveDate,

    /// 用電量（kWh）
    pub kwh: Decimal,

    /// 來源參照（如電表編號）
    pub source_ref: Option<String>,
}

impl ConsumptionRecord {
    /// 創建新的用電紀錄
    pub fn new(facility_id: u32, date: NaiveDate, kwh: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            facility_id,
            date,
            kwh,
            source_ref: None,
        }
    }

    /// 建構器模式：設置來源參照
    pub fn with_source_ref(mut self, source_ref: String) -> Self {
        self.source_ref = Some(source_ref);
        self
    }

    /// 檢查是否落在指定月份（不分年份）
    pub fn is_in_month(&self, month: u32) -> bool {
        self.date.month() == month
    }

    /// 檢查是否落在指定年月
    pub fn is_in_year_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// 紀錄日期在當月的第幾天（1-based）
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_record() {
        let record = ConsumptionRecord::new(
            1,
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            Decimal::from(120),
        );

        assert_eq!(record.facility_id, 1);
        assert_eq!(record.kwh, Decimal::from(120));
        assert_eq!(record.day_of_month(), 3);
        assert!(record.source_ref.is_none());
    }

    #[test]
    fn test_record_builder() {
        let record = ConsumptionRecord::new(
            2,
            NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
            Decimal::from(80),
        )
        .with_source_ref("METER-0042".to_string());

        assert_eq!(record.source_ref, Some("METER-0042".to_string()));
    }

    #[test]
    fn test_month_predicates() {
        let record = ConsumptionRecord::new(
            3,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            Decimal::from(55),
        );

        assert!(record.is_in_month(2));
        assert!(!record.is_in_month(3));
        assert!(record.is_in_year_month(2024, 2));
        assert!(!record.is_in_year_month(2025, 2));
    }
}
