// ==========================================
// 地铁失物资源规划 - 站点目录
// ==========================================
// 站点抽样的全集,配置加载后不可变
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// 默认站点目录（德里地铁 40 站）
pub const DEFAULT_STATIONS: &[&str] = &[
    "VAISHALI",
    "BRIG. HOSHIAR SINGH",
    "RITHALA",
    "KAROL BAGH",
    "YASHOBHOOMI DWARKA SECTOR  - 25",
    "SAMAYPUR BADLI",
    "KASHMERE GATE",
    "IFFCO CHOWK",
    "DELHI CANTT.",
    "BOTANICAL GARDEN",
    "RAJIV CHOWK",
    "NEW DELHI (Yellow & Airport Line)",
    "MANDI HOUSE",
    "JHILMIL",
    "MOOLCHAND",
    "CHIRAG DELHI",
    "RAMAKRISHNA ASHRAM MARG",
    "LAJPAT NAGAR",
    "AIIMS",
    "DELHI AEROCITY",
    "DWARKA SECTOR - 21",
    "NOIDA ELECTRONIC CITY",
    "JAMIA MILLIA ISLAMIA",
    "SULTANPUR",
    "AIRPORT (T-3)",
    "BARAKHAMBA ROAD",
    "JAMA MASJID",
    "JANAKPURI EAST",
    "RAMESH NAGAR",
    "HARKESH NAGAR OKHLA",
    "PATEL NAGAR",
    "LAL QUILA",
    "CENTRAL SECRETARIAT",
    "JANPATH",
    "CHANDNI CHOWK",
    "MUNDKA",
    "TILAK NAGAR",
    "RAJOURI GARDEN",
    "JAHANGIRPURI",
    "ADARSH NAGAR",
];

/// 站点目录（有序、只读、可廉价克隆）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StationCatalog {
    names: Arc<[String]>,
}

impl StationCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// 第一个重复的站点名（无重复返回 None）
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.names
            .iter()
            .find(|n| !seen.insert(n.as_str()))
            .map(|n| n.as_str())
    }
}

impl Default for StationCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_STATIONS.iter().copied())
    }
}

impl From<Vec<String>> for StationCatalog {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<StationCatalog> for Vec<String> {
    fn from(catalog: StationCatalog) -> Self {
        catalog.names.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = StationCatalog::default();
        assert_eq!(catalog.len(), 40);
        assert!(catalog.contains("RAJIV CHOWK"));
        assert!(catalog.first_duplicate().is_none());
    }

    #[test]
    fn test_duplicate_detected() {
        let catalog = StationCatalog::new(["A", "B", "A"]);
        assert_eq!(catalog.first_duplicate(), Some("A"));
    }

    #[test]
    fn test_serde_as_plain_list() {
        let catalog: StationCatalog = serde_json::from_str(r#"["X","Y"]"#).unwrap();
        assert_eq!(catalog.names(), &["X".to_string(), "Y".to_string()]);
        assert_eq!(serde_json::to_string(&catalog).unwrap(), r#"["X","Y"]"#);
    }
}
