//! 排程參數配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 服務序列規劃參數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// 規劃天數（預設 7 天）
    pub horizon_days: u32,

    /// 切換設施的固定成本（預設 5）
    /// 僅在連續兩天指派不同設施時計入
    pub switch_cost: Decimal,

    /// 是否啟用剪枝
    /// - true: 以現任最佳成本剪除不可能更優的分支（預設）
    /// - false: 完整枚舉所有序列；結果不變，僅供驗證與除錯
    pub pruning_enabled: bool,
}

impl PlanningConfig {
    /// 創建預設的規劃參數（7 天、切換成本 5、啟用剪枝）
    pub fn new() -> Self {
        Self {
            horizon_days: 7,
            switch_cost: Decimal::from(5),
            pruning_enabled: true,
        }
    }

    /// 建構器模式：設置規劃天數
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// 建構器模式：設置切換成本
    pub fn with_switch_cost(mut self, cost: Decimal) -> Self {
        self.switch_cost = cost;
        self
    }

    /// 建構器模式：設置是否啟用剪枝
    pub fn with_pruning_enabled(mut self, enabled: bool) -> Self {
        self.pruning_enabled = enabled;
        self
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self::new()
    }
}
