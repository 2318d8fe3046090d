//! 從 JSON 載入用電紀錄的示例
//!
//! 所有資料模型都有 serde derive，資料來源可以是任何能產出
//! JSON 的系統（資料庫匯出、API 回應等）。

use eplan_calc::{CostTableBuilder, ScheduleReporter};
use eplan_core::{ConsumptionRecord, Facility, PlanningConfig};
use eplan_optimizer::SequenceOptimizer;

const FACILITIES_JSON: &str = r#"[
    { "id": 1, "name": "北區電廠", "location": "台北" },
    { "id": 2, "name": "中區電廠", "location": null }
]"#;

const RECORDS_JSON: &str = r#"[
    { "id": "f47ac10b-58cc-4372-a567-0e02b2c3d401", "facility_id": 1, "date": "2025-11-01", "kwh": 120, "source_ref": "METER-0001" },
    { "id": "f47ac10b-58cc-4372-a567-0e02b2c3d402", "facility_id": 1, "date": "2025-11-02", "kwh": 95, "source_ref": "METER-0001" },
    { "id": "f47ac10b-58cc-4372-a567-0e02b2c3d403", "facility_id": 1, "date": "2025-11-05", "kwh": 80, "source_ref": "METER-0001" },
    { "id": "f47ac10b-58cc-4372-a567-0e02b2c3d404", "facility_id": 2, "date": "2025-11-03", "kwh": 40, "source_ref": "METER-0002" },
    { "id": "f47ac10b-58cc-4372-a567-0e02b2c3d405", "facility_id": 2, "date": "2025-11-06", "kwh": 55 }
]"#;

fn main() -> anyhow::Result<()> {
    println!("=== JSON 資料載入示例 ===\n");

    let facilities: Vec<Facility> = serde_json::from_str(FACILITIES_JSON)?;
    let records: Vec<ConsumptionRecord> = serde_json::from_str(RECORDS_JSON)?;

    println!(
        "已載入設施 {} 座，用電紀錄 {} 筆",
        facilities.len(),
        records.len()
    );

    let config = PlanningConfig::new();
    let table = CostTableBuilder::build(&facilities, &records, 2025, 11, config.horizon_days)?;

    let plan = SequenceOptimizer::new(&config).find_optimal_sequence(&table, &facilities)?;

    println!("\n最佳服務序列:");
    for line in ScheduleReporter::describe(&plan.facility_sequence, &facilities)? {
        println!("  {}", line);
    }
    println!("\n{}", ScheduleReporter::summary(plan.total_cost));

    Ok(())
}
