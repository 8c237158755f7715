//! Family code → workload category lookup.

use serde::{Deserialize, Serialize};

/// Broad workload category a SKU family belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyCategory {
    General,
    Memory,
    Compute,
    Gpu,
    Hpc,
    Storage,
    Basic,
}

impl FamilyCategory {
    /// Category for a family code, case-insensitive. Unknown codes have none.
    pub fn of(family: &str) -> Option<Self> {
        let code = family.trim().to_ascii_uppercase();
        let category = match code.as_str() {
            "D" | "DS" | "DC" | "DA" | "DAS" | "DD" | "DDS" => Self::General,
            "E" | "ES" | "EA" | "EAS" | "EC" | "ED" | "EDS" | "M" | "MS" | "MV" => Self::Memory,
            "F" | "FS" | "FX" => Self::Compute,
            "NC" | "ND" | "NV" | "NG" | "N" => Self::Gpu,
            "H" | "HB" | "HC" | "HX" => Self::Hpc,
            "L" | "LS" => Self::Storage,
            "A" | "B" => Self::Basic,
            _ => return None,
        };
        Some(category)
    }
}
