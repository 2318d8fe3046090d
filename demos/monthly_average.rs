//! 月平均用電示例

use chrono::NaiveDate;
use eplan_calc::AverageCalculator;
use eplan_core::{ConsumptionRecord, Facility};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    println!("=== 月平均用電示例 ===\n");

    let facilities = vec![
        Facility::new(1, "北區電廠".to_string()),
        Facility::new(2, "中區電廠".to_string()),
        Facility::new(3, "南區電廠".to_string()),
    ];

    // 11 月的部分用電紀錄；南區電廠當月沒有紀錄
    let mut records = Vec::new();
    for (day, kwh) in [(1u32, 120i64), (2, 95), (3, 80), (15, 140)] {
        records.push(ConsumptionRecord::new(
            1,
            NaiveDate::from_ymd_opt(2025, 11, day).expect("無效的示例日期"),
            Decimal::from(kwh),
        ));
    }
    for (day, kwh) in [(5u32, 60i64), (20, 90)] {
        records.push(ConsumptionRecord::new(
            2,
            NaiveDate::from_ymd_opt(2025, 11, day).expect("無效的示例日期"),
            Decimal::from(kwh),
        ));
    }

    let averages = AverageCalculator::monthly_average(&facilities, &records, 11)?;

    println!("11 月平均每日用電:");
    for average in &averages {
        println!(
            "  - {}: {} kWh（{} 筆紀錄）",
            average.facility_name, average.average_kwh, average.record_count
        );
    }

    println!("\n註：當月沒有紀錄的設施不會出現在結果中");

    Ok(())
}
