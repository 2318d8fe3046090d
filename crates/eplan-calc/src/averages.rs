//! 月平均用電計算

use eplan_core::{ConsumptionRecord, EplanError, Facility};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一設施的月平均用電
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAverage {
    /// 設施ID
    pub facility_id: u32,

    /// 設施名稱
    pub facility_name: String,

    /// 當月紀錄筆數
    pub record_count: usize,

    /// 平均每日用電量（kWh）
    pub average_kwh: Decimal,
}

/// 月平均用電計算器
pub struct AverageCalculator;

impl AverageCalculator {
    /// 計算每座設施在選定月份的平均每日用電量
    ///
    /// 依原始資料語義以月份過濾（不分年份）。當月沒有任何紀錄的
    /// 設施會被跳過，不會出現在結果中。
    pub fn monthly_average(
        facilities: &[Facility],
        records: &[ConsumptionRecord],
        month: u32,
    ) -> eplan_core::Result<Vec<MonthlyAverage>> {
        if !(1..=12).contains(&month) {
            return Err(EplanError::InvalidMonth(month));
        }

        tracing::debug!(
            "計算月平均用電：{} 月，設施 {} 座，紀錄 {} 筆",
            month,
            facilities.len(),
            records.len()
        );

        // 每座設施獨立計算，結果維持輸入的設施順序
        let results: Vec<MonthlyAverage> = facilities
            .par_iter()
            .filter_map(|facility| {
                let mut count = 0usize;
                let mut total = Decimal::ZERO;

                for record in records
                    .iter()
                    .filter(|r| r.facility_id == facility.id && r.is_in_month(month))
                {
                    total += record.kwh;
                    count += 1;
                }

                if count == 0 {
                    // 當月無紀錄，無平均值可言
                    return None;
                }

                Some(MonthlyAverage {
                    facility_id: facility.id,
                    facility_name: facility.name.clone(),
                    record_count: count,
                    average_kwh: total / Decimal::from(count as u64),
                })
            })
            .collect();

        Ok(results)
    }
}
