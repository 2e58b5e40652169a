use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sensor {
    #[serde(rename = "C")]
    Combined,
    #[serde(rename = "O")]
    OliOnly,
    #[serde(rename = "T")]
    TirsOnly,
    #[serde(rename = "E")]
    EtmPlus,
}

impl Sensor {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(Self::Combined),
            'O' => Some(Self::OliOnly),
            'T' => Some(Self::TirsOnly),
            'E' => Some(Self::EtmPlus),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::Combined => 'C',
            Self::OliOnly => 'O',
            Self::TirsOnly => 'T',
            Self::EtmPlus => 'E',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Combined => "OLI/TIRS Combined",
            Self::OliOnly => "OLI-only",
            Self::TirsOnly => "TIRS-only",
            Self::EtmPlus => "ETM+",
        }
    }
}

impl Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessingLevel {
    L1GT,
    L1TP,
    L2SP,
    #[serde(rename = "ARD_CU")]
    ArdConus,
}

impl ProcessingLevel {
    /// Maps the second Collection ID token onto a level.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "L1GT" => Some(Self::L1GT),
            "L1TP" => Some(Self::L1TP),
            "L2SP" => Some(Self::L2SP),
            "CU" => Some(Self::ArdConus),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::L1GT => "L1GT",
            Self::L1TP => "L1TP",
            Self::L2SP => "L2SP",
            Self::ArdConus => "ARD_CU",
        }
    }

    pub fn is_ard(&self) -> bool {
        matches!(self, Self::ArdConus)
    }

    /// Value of the `product_type` catalog column.
    pub fn product_type(&self) -> &'static str {
        if self.is_ard() { "ARD" } else { self.name() }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::L1GT => "Collection 2, Level 1, Systematic Terrain Correction",
            Self::L1TP => "Collection 2, Level 1, Precision and Terrain Correction",
            Self::L2SP => "Collection 2, Level 2, Science Product",
            Self::ArdConus => "Analysis Ready Data (ARD), CONUS",
        }
    }
}

impl Display for ProcessingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Scene location. WRS-2 for level 1/2 products, the CONUS tile grid for ARD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridLocation {
    Wrs2 { path: u16, row: u16 },
    Ard { col: u16, row: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionIdentifier {
    pub(super) cid: String,
    pub(super) sensor: Sensor,
    pub(super) satellite: u8,
    pub(super) processing_level: ProcessingLevel,
    pub(super) grid: GridLocation,
    pub(super) acquisition_date: NaiveDate,
    pub(super) production_date: NaiveDate,
    pub(super) collection_number: u8,
}

impl CollectionIdentifier {
    pub fn cid(&self) -> &str {
        &self.cid
    }

    /// Name of the directory holding this collection's files.
    pub fn folder_name(&self) -> &str {
        &self.cid
    }

    pub fn sensor(&self) -> Sensor {
        self.sensor
    }

    pub fn satellite(&self) -> u8 {
        self.satellite
    }

    pub fn processing_level(&self) -> ProcessingLevel {
        self.processing_level
    }

    pub fn grid(&self) -> GridLocation {
        self.grid
    }

    pub fn wrs2_path(&self) -> Option<u16> {
        match self.grid {
            GridLocation::Wrs2 { path, .. } => Some(path),
            GridLocation::Ard { .. } => None,
        }
    }

    pub fn wrs2_row(&self) -> Option<u16> {
        match self.grid {
            GridLocation::Wrs2 { row, .. } => Some(row),
            GridLocation::Ard { .. } => None,
        }
    }

    pub fn ard_col(&self) -> Option<u16> {
        match self.grid {
            GridLocation::Ard { col, .. } => Some(col),
            GridLocation::Wrs2 { .. } => None,
        }
    }

    pub fn ard_row(&self) -> Option<u16> {
        match self.grid {
            GridLocation::Ard { row, .. } => Some(row),
            GridLocation::Wrs2 { .. } => None,
        }
    }

    pub fn acquisition_date(&self) -> NaiveDate {
        self.acquisition_date
    }

    pub fn production_date(&self) -> NaiveDate {
        self.production_date
    }

    pub fn collection_number(&self) -> u8 {
        self.collection_number
    }
}

impl Display for CollectionIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.cid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_descriptions() {
        let expected = [
            (Sensor::Combined, 'C', "OLI/TIRS Combined"),
            (Sensor::OliOnly, 'O', "OLI-only"),
            (Sensor::TirsOnly, 'T', "TIRS-only"),
            (Sensor::EtmPlus, 'E', "ETM+"),
        ];
        for (sensor, code, description) in expected {
            assert_eq!(Sensor::from_code(code), Some(sensor));
            assert_eq!(sensor.description(), description);
        }
    }

    #[test]
    fn processing_level_descriptions() {
        let expected = [
            (
                "L1GT",
                "Collection 2, Level 1, Systematic Terrain Correction",
                "L1GT",
            ),
            (
                "L1TP",
                "Collection 2, Level 1, Precision and Terrain Correction",
                "L1TP",
            ),
            ("L2SP", "Collection 2, Level 2, Science Product", "L2SP"),
            ("CU", "Analysis Ready Data (ARD), CONUS", "ARD"),
        ];
        for (token, description, product_type) in expected {
            let level = ProcessingLevel::from_token(token).unwrap();
            assert_eq!(level.description(), description);
            assert_eq!(level.product_type(), product_type);
        }
    }
}
