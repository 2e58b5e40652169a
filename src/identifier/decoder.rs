use super::types::*;
use crate::error::DecodeError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

pub const CID_GRAMMAR: &str =
    r"L[COTE][0-9]{2}_[A-Za-z0-9]{2,4}_[0-9]{6}_[0-9]{8}_[0-9]{8}_[0-9]{2}";

static CID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{CID_GRAMMAR}")).expect("Collection ID grammar is a valid regex")
});

/// Decodes the Collection ID at the start of the final segment of `path`.
///
/// The identifier may be followed by further `_` separated tokens or an
/// extension, so `LC08_..._01_T1_B4.TIF` files decode to the identifier of
/// the collection they belong to. Use [`decode_folder`] for collection folders.
pub fn decode(path: impl AsRef<Path>) -> Result<CollectionIdentifier, DecodeError> {
    decode_with(path.as_ref(), MatchMode::File)
}

/// Decodes a collection folder. The whole folder name must be the Collection
/// ID, so `<cid>_old` or `<cid>.bak` siblings are rejected.
pub fn decode_folder(path: impl AsRef<Path>) -> Result<CollectionIdentifier, DecodeError> {
    decode_with(path.as_ref(), MatchMode::Folder)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchMode {
    File,
    Folder,
}

fn decode_with(path: &Path, mode: MatchMode) -> Result<CollectionIdentifier, DecodeError> {
    let malformed = || DecodeError::MalformedIdentifier {
        path: path.to_path_buf(),
    };

    let name = path.file_name().ok_or_else(malformed)?.to_string_lossy();
    let cid = match_cid(&name, mode).ok_or_else(malformed)?;
    let tokens = CidTokens::new(cid);

    let sensor_code = tokens.mission().chars().nth(1).ok_or_else(malformed)?;
    let sensor = Sensor::from_code(sensor_code).ok_or_else(|| DecodeError::UnknownSensor {
        path: path.to_path_buf(),
        value: sensor_code,
    })?;
    let satellite = parse_number(&tokens.mission()[2..4]).ok_or_else(malformed)?;

    let processing_level = ProcessingLevel::from_token(tokens.processing_level()).ok_or_else(|| {
        DecodeError::UnsupportedProcessingLevel {
            path: path.to_path_buf(),
            value: tokens.processing_level().to_string(),
        }
    })?;

    let (first, second) = tokens.grid().split_at(3);
    let first = parse_number(first).ok_or_else(malformed)?;
    let second = parse_number(second).ok_or_else(malformed)?;
    let grid = if processing_level.is_ard() {
        GridLocation::Ard {
            col: first,
            row: second,
        }
    } else {
        GridLocation::Wrs2 {
            path: first,
            row: second,
        }
    };

    let acquisition_date = parse_date(path, tokens.acquisition_date())?;
    let production_date = parse_date(path, tokens.production_date())?;
    let collection_number = parse_number(tokens.collection_number()).ok_or_else(malformed)?;

    Ok(CollectionIdentifier {
        cid: cid.to_string(),
        sensor,
        satellite,
        processing_level,
        grid,
        acquisition_date,
        production_date,
        collection_number,
    })
}

/// Returns the grammar match when it ends on a token boundary. Folder names
/// must match in full.
fn match_cid(name: &str, mode: MatchMode) -> Option<&str> {
    let m = CID_PATTERN.find(name)?;
    match (mode, name[m.end()..].chars().next()) {
        (_, None) => Some(m.as_str()),
        (MatchMode::File, Some('_') | Some('.')) => Some(m.as_str()),
        _ => None,
    }
}

/// The six `_` separated fields of a canonical Collection ID.
struct CidTokens<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> CidTokens<'a> {
    fn new(cid: &'a str) -> Self {
        Self {
            tokens: cid.split('_').collect(),
        }
    }

    fn mission(&self) -> &'a str {
        self.tokens[0]
    }

    fn processing_level(&self) -> &'a str {
        self.tokens[1]
    }

    fn grid(&self) -> &'a str {
        self.tokens[2]
    }

    fn acquisition_date(&self) -> &'a str {
        self.tokens[3]
    }

    fn production_date(&self) -> &'a str {
        self.tokens[4]
    }

    fn collection_number(&self) -> &'a str {
        self.tokens[5]
    }
}

fn parse_number<T: std::str::FromStr>(digits: &str) -> Option<T> {
    digits.parse().ok()
}

fn parse_date(path: &Path, value: &str) -> Result<NaiveDate, DecodeError> {
    let malformed = || DecodeError::MalformedDate {
        path: path.to_path_buf(),
        value: value.to_string(),
    };

    let year = parse_number(&value[0..4]).ok_or_else(malformed)?;
    let month = parse_number(&value[4..6]).ok_or_else(malformed)?;
    let day = parse_number(&value[6..8]).ok_or_else(malformed)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn decodes_tiered_level1_name() {
        let id = decode("LC08_L1TP_042036_20130605_20170310_01_T1").unwrap();

        assert_eq!(id.cid(), "LC08_L1TP_042036_20130605_20170310_01");
        assert_eq!(id.satellite(), 8);
        assert_eq!(id.sensor(), Sensor::Combined);
        assert_eq!(id.processing_level(), ProcessingLevel::L1TP);
        assert_eq!(id.wrs2_path(), Some(42));
        assert_eq!(id.wrs2_row(), Some(36));
        assert_eq!(id.ard_col(), None);
        assert_eq!(id.ard_row(), None);
        assert_eq!(id.acquisition_date(), date(2013, 6, 5));
        assert_eq!(id.production_date(), date(2017, 3, 10));
        assert_eq!(id.collection_number(), 1);
    }

    #[test]
    fn ard_uses_tile_grid() {
        let id = decode("/data/LE07_CU_003008_20200101_20200110_02").unwrap();

        assert_eq!(id.sensor(), Sensor::EtmPlus);
        assert_eq!(id.satellite(), 7);
        assert!(id.processing_level().is_ard());
        assert_eq!(id.ard_col(), Some(3));
        assert_eq!(id.ard_row(), Some(8));
        assert_eq!(id.wrs2_path(), None);
        assert_eq!(id.wrs2_row(), None);
        assert_eq!(id.collection_number(), 2);
    }

    #[test]
    fn grid_fields_follow_processing_level() {
        for name in [
            "LC09_L1GT_001002_20220101_20220102_02",
            "LC08_L1TP_001002_20220101_20220102_02",
            "LC08_L2SP_001002_20220101_20220102_02",
            "LC08_CU_001002_20220101_20220102_02",
        ] {
            let id = decode(name).unwrap();
            let ard = id.processing_level().is_ard();
            assert_eq!(id.wrs2_path().is_some(), !ard, "{name}");
            assert_eq!(id.wrs2_row().is_some(), !ard, "{name}");
            assert_eq!(id.ard_col().is_some(), ard, "{name}");
            assert_eq!(id.ard_row().is_some(), ard, "{name}");
        }
    }

    #[test]
    fn only_final_segment_is_decoded() {
        let id = decode("LC08_L1TP_042036_20130605_20170310_01/B4.TIF");
        assert!(matches!(id, Err(DecodeError::MalformedIdentifier { .. })));

        let id = decode("/scenes/LC08_L1TP_042036_20130605_20170310_01/").unwrap();
        assert_eq!(id.wrs2_path(), Some(42));
    }

    #[test]
    fn file_names_decode_to_owning_identifier() {
        let id = decode("LC08_L1TP_042036_20130605_20170310_01_T1_B4.TIF").unwrap();
        assert_eq!(id.cid(), "LC08_L1TP_042036_20130605_20170310_01");
        assert_eq!(id.folder_name(), id.cid());
    }

    #[test]
    fn folder_names_must_be_the_whole_identifier() {
        let cid = "LC08_L1TP_042036_20130605_20170310_01";
        assert_eq!(decode_folder(format!("/scenes/{cid}")).unwrap().cid(), cid);

        for name in [format!("{cid}_old"), format!("{cid}.bak"), format!("{cid}_T1")] {
            assert!(decode(&name).is_ok(), "{name}");
            assert!(
                matches!(decode_folder(&name), Err(DecodeError::MalformedIdentifier { .. })),
                "{name}"
            );
        }
    }

    #[test]
    fn rejects_names_outside_grammar() {
        for name in [
            "README.txt",
            "LX08_L1TP_042036_20130605_20170310_01",
            "LC08_L1TP_42036_20130605_20170310_01",
            "xLC08_L1TP_042036_20130605_20170310_01",
            "LC08_L1TP_042036_20130605_20170310_012",
        ] {
            assert!(
                matches!(decode(name), Err(DecodeError::MalformedIdentifier { .. })),
                "{name}"
            );
        }
    }

    #[test]
    fn rejects_unknown_processing_level() {
        let err = decode("LC08_L2XX_042036_20130605_20170310_01").unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedProcessingLevel {
                path: "LC08_L2XX_042036_20130605_20170310_01".into(),
                value: "L2XX".to_string(),
            }
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        let err = decode("LC08_L1TP_042036_20130231_20170310_01").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedDate { value, .. } if value == "20130231"));

        let err = decode("LC08_L1TP_042036_20130605_20171310_01").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedDate { value, .. } if value == "20171310"));
    }
}
