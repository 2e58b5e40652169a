//! Maps files inside a Collection ID directory onto the artifact they hold.

mod kind;

pub use kind::{ArtifactKind, is_path_column};

use crate::identifier::{CollectionIdentifier, ProcessingLevel};
use std::path::Path;

/// Classifies `file_path` as one of the artifacts of `identifier`.
///
/// Names are expected as `<cid>_<tier?>_<type tokens>.<ext>`. ARD products
/// carry no tier token. Landsat 7 `B6_VCID_1` and `B6_VCID_2` thermal files
/// map to B6 and B10 outside ARD. Anything that does not map onto a known
/// artifact is [`ArtifactKind::Unknown`].
pub fn classify(file_path: &Path, identifier: &CollectionIdentifier) -> ArtifactKind {
    let Some(stem) = file_path.file_stem().and_then(|s| s.to_str()) else {
        return ArtifactKind::Unknown;
    };

    let tokens: Vec<&str> = stem.split('_').collect();
    let ard = identifier.processing_level().is_ard();
    let prefix_len = if ard { 6 } else { 7 };
    let Some(type_tokens) = tokens.get(prefix_len..) else {
        return ArtifactKind::Unknown;
    };

    let mut type_tokens: Vec<&str> = match (identifier.satellite(), type_tokens) {
        (7, ["B6", "VCID", "1"]) if !ard => vec!["B6"],
        (7, ["B6", "VCID", "2"]) if !ard => vec!["B10"],
        (_, rest) => rest.to_vec(),
    };

    if identifier.processing_level() == ProcessingLevel::L2SP && !type_tokens.is_empty() {
        type_tokens.remove(0);
    }

    if type_tokens.is_empty() {
        return ArtifactKind::Unknown;
    }

    ArtifactKind::from_name(&type_tokens.join("_")).unwrap_or(ArtifactKind::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::decode;

    fn classify_name(name: &str) -> ArtifactKind {
        let path = Path::new("/scenes").join(name);
        let id = decode(&path).unwrap();
        classify(&path, &id)
    }

    #[test]
    fn level1_names_skip_tier_token() {
        assert_eq!(
            classify_name("LC08_L1TP_042036_20130605_20170310_01_T1_B4.TIF"),
            ArtifactKind::B4
        );
        assert_eq!(
            classify_name("LC08_L1GT_042036_20130605_20170310_01_T2_ANG.txt"),
            ArtifactKind::Ang
        );
        assert_eq!(
            classify_name("LC09_L1TP_042036_20230605_20230610_02_T1_B11.TIF"),
            ArtifactKind::B11
        );
    }

    #[test]
    fn ard_names_have_no_tier_token() {
        assert_eq!(
            classify_name("LC08_CU_003008_20200101_20200110_02_ST_QA.tif"),
            ArtifactKind::StQa
        );
        assert_eq!(
            classify_name("LE07_CU_003008_20200101_20200110_02_BT_B6.tif"),
            ArtifactKind::BtB6
        );
        assert_eq!(
            classify_name("LC08_CU_003008_20200101_20200110_02_B3.tif"),
            ArtifactKind::B3
        );
    }

    #[test]
    fn landsat7_vcid_aliases() {
        assert_eq!(
            classify_name("LE07_L1TP_042036_20130605_20170310_01_T1_B6_VCID_1.TIF"),
            ArtifactKind::B6
        );
        assert_eq!(
            classify_name("LE07_L1TP_042036_20130605_20170310_01_T1_B6_VCID_2.TIF"),
            ArtifactKind::B10
        );
    }

    #[test]
    fn vcid_alias_only_applies_to_landsat7() {
        assert_eq!(
            classify_name("LC08_L1TP_042036_20130605_20170310_01_T1_B6_VCID_1.TIF"),
            ArtifactKind::Unknown
        );
    }

    #[test]
    fn vcid_alias_is_not_applied_to_ard() {
        assert_eq!(
            classify_name("LE07_CU_003008_20200101_20200110_02_B6_VCID_1.tif"),
            ArtifactKind::Unknown
        );
        assert_eq!(
            classify_name("LE07_CU_003008_20200101_20200110_02_B6_VCID_2.tif"),
            ArtifactKind::Unknown
        );
    }

    #[test]
    fn level2_drops_product_family_token() {
        assert_eq!(
            classify_name("LC08_L2SP_042036_20130605_20170310_02_T1_SR_B5.TIF"),
            ArtifactKind::B5
        );
        assert_eq!(
            classify_name("LC08_L2SP_042036_20130605_20170310_02_T1_ST_B10.TIF"),
            ArtifactKind::B10
        );
        assert_eq!(
            classify_name("LC08_L2SP_042036_20130605_20170310_02_T1_QA_PIXEL.TIF"),
            ArtifactKind::Unknown
        );
    }

    #[test]
    fn unmappable_names_are_unknown() {
        for name in [
            "LC08_L1TP_042036_20130605_20170310_01_T1_MTL.txt",
            "LC08_L1TP_042036_20130605_20170310_01_T1.tar",
            "LC08_L1TP_042036_20130605_20170310_01_T1_b4.TIF",
            "LC08_L1TP_042036_20130605_20170310_01_T1_BQA.TIF",
        ] {
            assert_eq!(classify_name(name), ArtifactKind::Unknown, "{name}");
        }
    }
}
