//! # EPlan Optimizer
//!
//! 最佳服務序列搜尋（branch and bound）

pub mod search;

// Re-export 主要類型
pub use search::SequenceOptimizer;

use rust_decimal::Decimal;

/// 搜尋統計
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// 進入遞迴的節點數
    pub nodes_explored: u64,

    /// 被剪除的分支數
    pub branches_pruned: u64,

    /// 搜尋過程中記錄過的完整序列數（含後來被取代的暫優解）
    pub solutions_found: u64,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

/// 最佳服務序列（搜尋結果）
#[derive(Debug, Clone)]
pub struct OptimalSequence {
    /// 每日指派的設施ID（索引 0 = 第 1 天）
    pub facility_sequence: Vec<u32>,

    /// 最小總成本（逐日用電成本 + 切換成本）
    pub total_cost: Decimal,

    /// 搜尋統計
    pub stats: SearchStats,
}

impl OptimalSequence {
    /// 規劃的天數
    pub fn horizon_days(&self) -> usize {
        self.facility_sequence.len()
    }

    /// 取得第 `day` 天（1-based）指派的設施ID
    pub fn facility_for_day(&self, day: u32) -> Option<u32> {
        if day == 0 {
            return None;
        }
        self.facility_sequence.get((day - 1) as usize).copied()
    }

    /// 序列中設施切換的次數
    pub fn switch_count(&self) -> usize {
        self.facility_sequence
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count()
    }
}
