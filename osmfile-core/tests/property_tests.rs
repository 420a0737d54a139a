//! Property-based tests for the feature encoder.
//!
//! # Invariants tested
//!
//! - **Unique ids:** synthesized identifiers start at -1 and strictly decrease.
//! - **Version bump:** a record at version `v` is written as `v + 1`.
//! - **Stable output:** re-encoding a record with a fixed clock and id yields
//!   identical bytes.
//! - **Sanitize idempotence:** `sanitize(sanitize(x)) == sanitize(x)`.

use chrono::{TimeZone, Utc};
use osmfile_core::{FeatureEncoder, FixedClock, PathRecord, PointRecord, sanitize};
use proptest::prelude::*;

fn fixed_encoder() -> FeatureEncoder<FixedClock> {
    let instant = Utc
        .with_ymd_and_hms(2021, 7, 4, 8, 0, 0)
        .single()
        .expect("valid instant");
    FeatureEncoder::with_clock(FixedClock(instant))
}

fn attribute(element: &str, name: &str) -> Option<String> {
    let marker = format!(" {name}=\"");
    let start = element.find(&marker)? + marker.len();
    let rest = element.get(start..)?;
    let end = rest.find('"')?;
    rest.get(..end).map(str::to_owned)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn synthesized_ids_strictly_decrease(kinds in prop::collection::vec(any::<bool>(), 1..40)) {
        let encoder = FeatureEncoder::new();
        let mut ids = Vec::with_capacity(kinds.len());
        for is_point in &kinds {
            let xml = if *is_point {
                encoder.encode_point(&PointRecord::new("1", "2", "3", "u"))
            } else {
                encoder.encode_path(&PathRecord::new(["1", "2"], "3", "u"))
            }
            .expect("complete records encode");
            let id: i64 = attribute(&xml, "id")
                .expect("element has an id")
                .parse()
                .expect("id is numeric");
            ids.push(id);
        }
        prop_assert_eq!(ids.first().copied(), Some(-1));
        for pair in ids.windows(2) {
            if let [earlier, later] = pair {
                prop_assert_eq!(*later, *earlier - 1);
            }
        }
    }

    #[test]
    fn version_is_bumped_once(version in any::<u32>()) {
        let encoder = fixed_encoder();
        let point = encoder
            .encode_point(&PointRecord::new("1", "2", "3", "u").with_version(version))
            .expect("point encodes");
        let way = encoder
            .encode_path(&PathRecord::new(["1"], "3", "u").with_version(version))
            .expect("way encodes");
        let expected = (u64::from(version) + 1).to_string();
        prop_assert_eq!(attribute(&point, "version"), Some(expected.clone()));
        prop_assert_eq!(attribute(&way, "version"), Some(expected));
    }

    #[test]
    fn repeated_encoding_is_byte_identical(
        lat in "-?[0-9]{1,2}\\.[0-9]{1,6}",
        lon in "-?[0-9]{1,3}\\.[0-9]{1,6}",
        user in "[a-z]{1,12}",
        tags in prop::collection::btree_map("[a-z:]{1,8}", "[A-Za-z ]{0,12}", 0..5),
        modified in any::<bool>(),
    ) {
        let mut record = PointRecord::new(lat, lon, "17", user)
            .with_identifier(1000)
            .with_tags(tags);
        record.modified = modified;
        let encoder = fixed_encoder();
        let first = encoder.encode_point(&record).expect("point encodes");
        let second = encoder.encode_point(&record).expect("point encodes");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sanitize_is_idempotent(text in any::<String>()) {
        let once = sanitize(&text);
        prop_assert_eq!(sanitize(&once), once.clone());
        prop_assert!(!once.contains('&'));
        prop_assert!(!once.contains('"'));
    }
}
