//! # EPlan
//!
//! 設施能源服務排程引擎
//!
//! 彙整各子 crate 的主要類型，讓使用者只需依賴這一個 crate：
//! - `eplan-core`：資料模型、參數配置與錯誤類型
//! - `eplan-calc`：成本表建構、月平均用電與報表
//! - `eplan-optimizer`：最佳服務序列搜尋

pub use eplan_calc::{
    AverageCalculator, CostTable, CostTableBuilder, MonthlyAverage, ScheduleReporter,
};
pub use eplan_core::{ConsumptionRecord, EplanError, Facility, PlanningConfig, Result};
pub use eplan_optimizer::{OptimalSequence, SearchStats, SequenceOptimizer};
