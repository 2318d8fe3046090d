//! 排程結果報表

use eplan_core::{EplanError, Facility};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// 排程結果報表器
///
/// 將最佳化輸出的設施ID序列轉成使用者可讀的逐日描述。
/// 只負責組字串，不做任何 I/O。
pub struct ScheduleReporter;

impl ScheduleReporter {
    /// 產生逐日描述，例如「第 1 天：北區電廠」
    ///
    /// 序列索引 0 對應第 1 天。序列中出現未知的設施ID時回傳錯誤，
    /// 不會靜默略過。
    pub fn describe(
        facility_sequence: &[u32],
        facilities: &[Facility],
    ) -> eplan_core::Result<Vec<String>> {
        let id_to_name: HashMap<u32, &str> = facilities
            .iter()
            .map(|facility| (facility.id, facility.name.as_str()))
            .collect();

        facility_sequence
            .iter()
            .enumerate()
            .map(|(index, facility_id)| {
                let name = id_to_name
                    .get(facility_id)
                    .ok_or(EplanError::FacilityNotFound(*facility_id))?;
                Ok(format!("第 {} 天：{}", index + 1, name))
            })
            .collect()
    }

    /// 產生總成本摘要行
    pub fn summary(total_cost: Decimal) -> String {
        format!("最佳服務序列總成本：{} kWh", total_cost)
    }
}
