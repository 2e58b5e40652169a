use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArtifactKind {
    #[serde(rename = "ANG")]
    Ang,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
    B8,
    B9,
    B10,
    B11,
    #[serde(rename = "BT_B6")]
    BtB6,
    #[serde(rename = "ST_B6")]
    StB6,
    #[serde(rename = "ST_CDIST")]
    StCdist,
    #[serde(rename = "ST_EMIS")]
    StEmis,
    #[serde(rename = "ST_QA")]
    StQa,
    /// Everything else. Never stored in the catalog.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl ArtifactKind {
    /// Every kind that owns a catalog column, in column order.
    pub const CATALOGED: [ArtifactKind; 17] = [
        Self::Ang,
        Self::B1,
        Self::B2,
        Self::B3,
        Self::B4,
        Self::B5,
        Self::B6,
        Self::B7,
        Self::B8,
        Self::B9,
        Self::B10,
        Self::B11,
        Self::BtB6,
        Self::StB6,
        Self::StCdist,
        Self::StEmis,
        Self::StQa,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ang => "ANG",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::B3 => "B3",
            Self::B4 => "B4",
            Self::B5 => "B5",
            Self::B6 => "B6",
            Self::B7 => "B7",
            Self::B8 => "B8",
            Self::B9 => "B9",
            Self::B10 => "B10",
            Self::B11 => "B11",
            Self::BtB6 => "BT_B6",
            Self::StB6 => "ST_B6",
            Self::StCdist => "ST_CDIST",
            Self::StEmis => "ST_EMIS",
            Self::StQa => "ST_QA",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Case-sensitive lookup of a file type token. `UNKNOWN` is not a valid token.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::CATALOGED.into_iter().find(|k| k.name() == name)
    }

    /// Position of this kind's column, `None` for [`ArtifactKind::Unknown`].
    pub fn slot(&self) -> Option<usize> {
        Self::CATALOGED.iter().position(|k| k == self)
    }

    pub fn column_name(&self) -> String {
        format!("{}_path", self.name())
    }

    pub fn from_column_name(column: &str) -> Option<Self> {
        column.strip_suffix("_path").and_then(Self::from_name)
    }

    pub fn is_band(&self) -> bool {
        matches!(
            self,
            Self::B1
                | Self::B2
                | Self::B3
                | Self::B4
                | Self::B5
                | Self::B6
                | Self::B7
                | Self::B8
                | Self::B9
                | Self::B10
                | Self::B11
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Ang => "Angle coefficients",
            Self::B1 => "Band 1",
            Self::B2 => "Band 2",
            Self::B3 => "Band 3",
            Self::B4 => "Band 4",
            Self::B5 => "Band 5",
            Self::B6 => "Band 6",
            Self::B7 => "Band 7",
            Self::B8 => "Band 8",
            Self::B9 => "Band 9",
            Self::B10 => "Band 10",
            Self::B11 => "Band 11",
            Self::BtB6 => "Brightness temperature, band 6",
            Self::StB6 => "Surface temperature, band 6",
            Self::StCdist => "Surface temperature, distance to cloud",
            Self::StEmis => "Surface temperature, emissivity",
            Self::StQa => "Surface temperature, quality assessment",
            Self::Unknown => "Unrecognized file",
        }
    }
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `column` names an artifact path column. With `image_only` set,
/// only the spectral band columns qualify.
pub fn is_path_column(column: &str, image_only: bool) -> bool {
    match ArtifactKind::from_column_name(column) {
        Some(kind) => !image_only || kind.is_band(),
        None => false,
    }
}
