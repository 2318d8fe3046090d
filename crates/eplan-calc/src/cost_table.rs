//! 成本表建構

use eplan_core::{ConsumptionRecord, EplanError, Facility};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 成本表：每座設施在規劃期間內逐日的用電成本
///
/// 每個條目的長度固定等於規劃天數；建構一次後在搜尋期間唯讀。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostTable {
    /// 規劃天數
    horizon_days: u32,

    /// 設施ID -> 逐日成本（索引 0 = 第 1 天）
    entries: HashMap<u32, Vec<Decimal>>,
}

impl CostTable {
    /// 創建空的成本表
    pub fn new(horizon_days: u32) -> Self {
        Self {
            horizon_days,
            entries: HashMap::new(),
        }
    }

    /// 設置某設施的逐日成本
    pub fn set_costs(&mut self, facility_id: u32, costs: Vec<Decimal>) {
        self.entries.insert(facility_id, costs);
    }

    /// 取得某設施的逐日成本
    pub fn costs_for(&self, facility_id: u32) -> Option<&[Decimal]> {
        self.entries.get(&facility_id).map(|costs| costs.as_slice())
    }

    /// 規劃天數
    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// 表中所有設施ID（升冪排序，確保分支順序可重現）
    pub fn facility_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// 表中設施數量
    pub fn num_facilities(&self) -> usize {
        self.entries.len()
    }

    /// 檢查表是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 成本表建構器
///
/// 從設施與用電紀錄建構指定年月前 `horizon_days` 天的成本表。
/// 缺少紀錄的日子以 0 計入；同一天的多筆紀錄累加。
pub struct CostTableBuilder;

impl CostTableBuilder {
    /// 建構成本表
    ///
    /// # 參數
    /// * `facilities` - 參與排程的設施；每座設施都會得到一個條目
    /// * `records` - 用電紀錄（會依年月與天數過濾）
    /// * `year` / `month` - 選定的年月
    /// * `horizon_days` - 取當月前幾天（本領域預設 7）
    pub fn build(
        facilities: &[Facility],
        records: &[ConsumptionRecord],
        year: i32,
        month: u32,
        horizon_days: u32,
    ) -> eplan_core::Result<CostTable> {
        if !(1..=12).contains(&month) {
            return Err(EplanError::InvalidMonth(month));
        }
        if horizon_days == 0 {
            return Err(EplanError::InvalidHorizon(horizon_days));
        }

        tracing::debug!(
            "建構成本表：{} 年 {} 月前 {} 天，設施 {} 座，紀錄 {} 筆",
            year,
            month,
            horizon_days,
            facilities.len(),
            records.len()
        );

        let mut table = CostTable::new(horizon_days);

        for facility in facilities {
            let mut daily = vec![Decimal::ZERO; horizon_days as usize];

            for record in records
                .iter()
                .filter(|r| r.facility_id == facility.id && r.is_in_year_month(year, month))
            {
                let day = record.day_of_month();
                if day >= 1 && day <= horizon_days {
                    // 同一天的多筆紀錄累加
                    daily[(day - 1) as usize] += record.kwh;
                }
            }

            table.set_costs(facility.id, daily);
        }

        Ok(table)
    }
}
