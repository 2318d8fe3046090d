//! 週服務排程示例
//!
//! 從用電紀錄建構成本表，搜尋 7 天的最佳服務序列並輸出報表。

use chrono::NaiveDate;
use eplan_calc::{CostTableBuilder, ScheduleReporter};
use eplan_core::{ConsumptionRecord, Facility, PlanningConfig};
use eplan_optimizer::SequenceOptimizer;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== 週服務排程示例 ===\n");

    // 設施清單
    let facilities = vec![
        Facility::new(1, "北區電廠".to_string()).with_location("台北".to_string()),
        Facility::new(2, "中區電廠".to_string()).with_location("台中".to_string()),
        Facility::new(3, "南區電廠".to_string()).with_location("高雄".to_string()),
    ];

    // 2025 年 11 月第一週的用電紀錄
    let weekly_kwh: [(u32, [i64; 7]); 3] = [
        (1, [120, 95, 80, 150, 140, 60, 70]),
        (2, [90, 110, 85, 40, 55, 130, 95]),
        (3, [100, 100, 100, 100, 30, 30, 30]),
    ];

    let mut records = Vec::new();
    for (facility_id, daily) in weekly_kwh {
        for (index, kwh) in daily.into_iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2025, 11, index as u32 + 1)
                .expect("無效的示例日期");
            records.push(ConsumptionRecord::new(facility_id, date, Decimal::from(kwh)));
        }
    }

    println!("設施清單:");
    for facility in &facilities {
        println!(
            "  - {} ({})",
            facility.name,
            facility.location.as_deref().unwrap_or("未知地區")
        );
    }

    // 建構成本表並搜尋最佳序列
    let config = PlanningConfig::new();
    let table = CostTableBuilder::build(&facilities, &records, 2025, 11, config.horizon_days)?;

    let plan = SequenceOptimizer::new(&config).find_optimal_sequence(&table, &facilities)?;

    println!("\n最佳服務序列:");
    for line in ScheduleReporter::describe(&plan.facility_sequence, &facilities)? {
        println!("  {}", line);
    }

    println!("\n{}", ScheduleReporter::summary(plan.total_cost));
    println!(
        "切換次數: {}，展開節點: {}，剪枝分支: {}",
        plan.switch_count(),
        plan.stats.nodes_explored,
        plan.stats.branches_pruned
    );

    Ok(())
}
