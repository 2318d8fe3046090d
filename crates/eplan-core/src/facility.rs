//! 設施模型

use serde::{Deserialize, Serialize};

/// 設施（擁有每日用電歷史的廠區）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    /// 設施ID（唯一且穩定；升冪排序即為搜尋時的固定分支順序）
    pub id: u32,

    /// 設施名稱
    pub name: String,

    /// 所在地區
    pub location: Option<String>,
}

impl Facility {
    /// 創建新的設施
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            location: None,
        }
    }

    /// 建構器模式：設置所在地區
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_facility() {
        let facility = Facility::new(1, "北區電廠".to_string());

        assert_eq!(facility.id, 1);
        assert_eq!(facility.name, "北區電廠");
        assert!(facility.location.is_none());
    }

    #[test]
    fn test_facility_builder() {
        let facility =
            Facility::new(2, "中區電廠".to_string()).with_location("台中".to_string());

        assert_eq!(facility.location, Some("台中".to_string()));
    }
}
