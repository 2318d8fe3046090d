//! # EPlan Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod consumption;
pub mod facility;

// Re-export 主要類型
pub use config::PlanningConfig;
pub use consumption::ConsumptionRecord;
pub use facility::Facility;

use rust_decimal::Decimal;

/// EPlan 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum EplanError {
    #[error("設施清單為空，無法進行排程")]
    EmptyFacilitySet,

    #[error("無效的規劃天數: {0}")]
    InvalidHorizon(u32),

    #[error("切換成本不可為負: {0}")]
    NegativeSwitchCost(Decimal),

    #[error("設施 {facility_id} 第 {day} 天的成本為負: {cost}")]
    NegativeDayCost {
        facility_id: u32,
        day: u32,
        cost: Decimal,
    },

    #[error("成本表缺少設施 {0} 的條目")]
    MissingCostEntry(u32),

    #[error("設施 {facility_id} 的成本條目長度不符: 預期 {expected} 天，實際 {actual} 天")]
    CostLengthMismatch {
        facility_id: u32,
        expected: u32,
        actual: usize,
    },

    #[error("找不到設施: {0}")]
    FacilityNotFound(u32),

    #[error("無效的月份: {0}")]
    InvalidMonth(u32),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

impl EplanError {
    /// 檢查是否為非法輸入（搜尋開始前即被拒絕的參數）
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EplanError::EmptyFacilitySet
                | EplanError::InvalidHorizon(_)
                | EplanError::NegativeSwitchCost(_)
                | EplanError::NegativeDayCost { .. }
                | EplanError::InvalidMonth(_)
        )
    }

    /// 檢查是否為資料不一致（成本表或設施清單彼此不相符）
    pub fn is_data_inconsistency(&self) -> bool {
        matches!(
            self,
            EplanError::MissingCostEntry(_)
                | EplanError::CostLengthMismatch { .. }
                | EplanError::FacilityNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EplanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EplanError::EmptyFacilitySet, true)]
    #[case(EplanError::InvalidHorizon(0), true)]
    #[case(EplanError::NegativeSwitchCost(Decimal::from(-5)), true)]
    #[case(EplanError::InvalidMonth(13), true)]
    #[case(EplanError::MissingCostEntry(3), false)]
    #[case(
        EplanError::CostLengthMismatch { facility_id: 1, expected: 7, actual: 6 },
        false
    )]
    #[case(EplanError::FacilityNotFound(9), false)]
    fn test_error_taxonomy(#[case] error: EplanError, #[case] invalid_input: bool) {
        assert_eq!(error.is_invalid_input(), invalid_input);
        assert_eq!(error.is_data_inconsistency(), !invalid_input);
    }

    #[test]
    fn test_error_messages_include_context() {
        let error = EplanError::CostLengthMismatch {
            facility_id: 2,
            expected: 7,
            actual: 5,
        };
        let message = error.to_string();
        assert!(message.contains('2'));
        assert!(message.contains('7'));
        assert!(message.contains('5'));
    }
}
