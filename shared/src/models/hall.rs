//! Hall Layout Model
//!
//! Static venue layout consumed by the table-selection step.
//! Reference data only: the booking core never mutates it.

use serde::{Deserialize, Serialize};

/// Table type (столик: VIP-комната, диван, у окна, барная стойка)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    Vip,
    Sofa,
    Window,
    Bar,
}

impl TableType {
    /// Human-readable label for info cards and handoff text.
    pub fn label(&self) -> &'static str {
        match self {
            TableType::Vip => "VIP Lounge",
            TableType::Sofa => "Диван",
            TableType::Window => "У окна",
            TableType::Bar => "Бар",
        }
    }
}

/// Hall table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallTable {
    pub id: i64,
    pub label: String,
    #[serde(rename = "type")]
    pub table_type: TableType,
    pub seats: i32,
    /// Position on the hall map, percent of hall width
    pub x: f32,
    /// Position on the hall map, percent of hall height
    pub y: f32,
    /// Minimum order in whole rubles
    #[serde(rename = "minOrder")]
    pub min_order: i64,
}

/// Static hall layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HallLayout {
    pub tables: Vec<HallTable>,
}

impl HallLayout {
    /// Look up a table by ID.
    pub fn table(&self, id: i64) -> Option<&HallTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.table(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        let layout = HallLayout {
            tables: vec![HallTable {
                id: 7,
                label: "VIP-7".to_string(),
                table_type: TableType::Vip,
                seats: 8,
                x: 50.0,
                y: 20.0,
                min_order: 5000,
            }],
        };

        assert!(layout.contains(7));
        assert_eq!(layout.table(7).unwrap().label, "VIP-7");
        assert!(layout.table(8).is_none());
    }

    #[test]
    fn test_table_type_serde() {
        // Frontend sends lowercase type tags ("vip", "sofa", ...)
        assert_eq!(
            serde_json::to_string(&TableType::Vip).unwrap(),
            "\"vip\""
        );
        let parsed: TableType = serde_json::from_str("\"window\"").unwrap();
        assert_eq!(parsed, TableType::Window);
    }
}
