//! 服務序列搜尋（branch and bound）
//!
//! 在固定的規劃天數內，為每一天指派一座設施，使「逐日用電成本 +
//! 切換成本」的總和最小。搜尋為深度優先的完整枚舉，佐以現任最佳
//! 成本的下界剪枝；因為所有成本皆非負，累積成本沿任何路徑單調不
//! 減，剪枝不影響結果。

use crate::{OptimalSequence, SearchStats};
use eplan_calc::CostTable;
use eplan_core::{EplanError, Facility, PlanningConfig};
use rust_decimal::Decimal;

/// 序列最佳化器
///
/// 僅持有規劃參數；所有搜尋狀態都建立在單次呼叫內，呼叫之間
/// 互不影響，同一個最佳化器可重複使用。
#[derive(Debug, Clone)]
pub struct SequenceOptimizer {
    horizon_days: u32,
    switch_cost: Decimal,
    pruning_enabled: bool,
}

/// 單次搜尋的內部狀態
struct SearchState {
    /// 已指派的前幾天（遞迴下降時 push，回溯時 pop）
    partial: Vec<u32>,

    /// 目前最佳的完整序列
    best_sequence: Vec<u32>,

    /// 目前最佳的總成本；None 表示尚未找到任何完整序列
    best_cost: Option<Decimal>,

    stats: SearchStats,
}

impl SearchState {
    fn new(horizon_days: usize) -> Self {
        Self {
            partial: Vec::with_capacity(horizon_days),
            best_sequence: Vec::new(),
            best_cost: None,
            stats: SearchStats::default(),
        }
    }
}

impl SequenceOptimizer {
    /// 依規劃參數創建最佳化器
    pub fn new(config: &PlanningConfig) -> Self {
        Self {
            horizon_days: config.horizon_days,
            switch_cost: config.switch_cost,
            pruning_enabled: config.pruning_enabled,
        }
    }

    /// 尋找成本最小的服務序列
    ///
    /// 對每一天依設施ID升冪嘗試每座設施；成本相同時保留先找到的
    /// 序列，因此結果對固定輸入完全可重現。所有驗證都在搜尋開始
    /// 前完成，一旦進入遞迴即不再失敗。
    pub fn find_optimal_sequence(
        &self,
        cost_table: &CostTable,
        facilities: &[Facility],
    ) -> eplan_core::Result<OptimalSequence> {
        let rows = self.validated_rows(cost_table, facilities)?;

        tracing::info!(
            "開始序列搜尋：設施 {} 座，規劃 {} 天，切換成本 {}",
            rows.len(),
            self.horizon_days,
            self.switch_cost
        );
        let start_time = std::time::Instant::now();

        let mut state = SearchState::new(self.horizon_days as usize);
        self.descend(&rows, 1, None, Decimal::ZERO, &mut state);

        // 回溯結束後暫存序列必須已清空
        debug_assert!(state.partial.is_empty(), "搜尋結束時暫存序列未清空");

        let total_cost = match state.best_cost {
            Some(cost) => cost,
            None => {
                return Err(EplanError::CalculationError(
                    "搜尋未產生任何完整序列".to_string(),
                ))
            }
        };

        state.stats.calculation_time_ms = Some(start_time.elapsed().as_millis());
        tracing::info!(
            "搜尋完成：最佳成本 {}，節點 {}，剪枝 {}",
            total_cost,
            state.stats.nodes_explored,
            state.stats.branches_pruned
        );

        Ok(OptimalSequence {
            facility_sequence: state.best_sequence,
            total_cost,
            stats: state.stats,
        })
    }

    /// 驗證輸入並建立固定分支順序的成本列
    ///
    /// 回傳 (設施ID, 該設施逐日成本) 的列表，依ID升冪排序。
    fn validated_rows<'a>(
        &self,
        cost_table: &'a CostTable,
        facilities: &[Facility],
    ) -> eplan_core::Result<Vec<(u32, &'a [Decimal])>> {
        if facilities.is_empty() {
            return Err(EplanError::EmptyFacilitySet);
        }
        if self.horizon_days == 0 {
            return Err(EplanError::InvalidHorizon(self.horizon_days));
        }
        if self.switch_cost < Decimal::ZERO {
            return Err(EplanError::NegativeSwitchCost(self.switch_cost));
        }

        // 固定分支順序：設施ID升冪
        let mut ids: Vec<u32> = facilities.iter().map(|facility| facility.id).collect();
        ids.sort_unstable();
        ids.dedup();

        let mut rows = Vec::with_capacity(ids.len());
        for id in ids {
            let costs = cost_table
                .costs_for(id)
                .ok_or(EplanError::MissingCostEntry(id))?;

            if costs.len() != self.horizon_days as usize {
                return Err(EplanError::CostLengthMismatch {
                    facility_id: id,
                    expected: self.horizon_days,
                    actual: costs.len(),
                });
            }

            for (day_index, cost) in costs.iter().enumerate() {
                if *cost < Decimal::ZERO {
                    // 剪枝依賴累積成本單調不減，負成本必須在搜尋前拒絕
                    return Err(EplanError::NegativeDayCost {
                        facility_id: id,
                        day: day_index as u32 + 1,
                        cost: *cost,
                    });
                }
            }

            rows.push((id, costs));
        }

        Ok(rows)
    }

    /// 遞迴步驟：為第 `day` 天（1-based）嘗試每座設施
    ///
    /// 進入時恆有 `state.partial.len() == day - 1`。
    fn descend(
        &self,
        rows: &[(u32, &[Decimal])],
        day: u32,
        last_facility: Option<u32>,
        running_cost: Decimal,
        state: &mut SearchState,
    ) {
        state.stats.nodes_explored += 1;

        // 剪枝：累積成本已不低於現任最佳，後續成本皆非負，不可能更優
        if self.pruning_enabled {
            if let Some(best) = state.best_cost {
                if running_cost >= best {
                    state.stats.branches_pruned += 1;
                    return;
                }
            }
        }

        // 終端條件：所有天數皆已指派
        if day > self.horizon_days {
            let improved = match state.best_cost {
                None => true,
                // 嚴格更優才取代，同分保留先找到的序列
                Some(best) => running_cost < best,
            };
            if improved {
                state.best_cost = Some(running_cost);
                // 必須複製：partial 在回溯時會被 pop 掉
                state.best_sequence = state.partial.clone();
                state.stats.solutions_found += 1;
            }
            return;
        }

        let day_index = (day - 1) as usize;
        for &(facility_id, costs) in rows {
            let switch = match last_facility {
                Some(last) if last != facility_id => self.switch_cost,
                _ => Decimal::ZERO,
            };
            let new_cost = running_cost + switch + costs[day_index];

            state.partial.push(facility_id);
            self.descend(rows, day + 1, Some(facility_id), new_cost, state);
            state.partial.pop();
        }
    }
}
