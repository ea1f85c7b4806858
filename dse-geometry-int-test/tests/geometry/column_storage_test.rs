#[cfg(test)]
mod column_storage_tests {
    use std::collections::{BTreeMap, HashSet};

    use dse_geometry::{ErrorKind, Geometry, LineString, Point, Polygon};
    use dse_geometry_int_test::test_util::{
        line, point, polygon, Order, PayloadBuilder, CAPITOL_COURTYARD, CAPITOL_EXTERIOR,
    };

    fn stored_rows() -> BTreeMap<&'static str, Vec<u8>> {
        let mut rows = BTreeMap::new();
        rows.insert("tower", point(37.5, 21.1).serialize().unwrap());
        rows.insert(
            "road",
            PayloadBuilder::new(Order::Little, 2)
                .coords(&[(0.0, 0.0), (4.5, 2.0), (9.0, 9.0)])
                .build(),
        );
        rows.insert(
            "capitol",
            polygon(&[CAPITOL_EXTERIOR, CAPITOL_COURTYARD])
                .serialize()
                .unwrap(),
        );
        rows
    }

    #[test]
    fn test_mixed_column_decodes_by_type_code() {
        let decoded: BTreeMap<_, _> = stored_rows()
            .into_iter()
            .map(|(key, bytes)| (key, Geometry::deserialize(&bytes).unwrap()))
            .collect();

        assert_eq!(decoded["tower"], Geometry::from(point(37.5, 21.1)));
        assert_eq!(
            decoded["road"],
            Geometry::from(line(&[(0.0, 0.0), (4.5, 2.0), (9.0, 9.0)]))
        );
        assert_eq!(decoded["capitol"].type_code(), 3);
        assert_eq!(
            decoded["capitol"].class_name(),
            "org.apache.cassandra.db.marshal.PolygonType"
        );
    }

    #[test]
    fn test_reencoding_normalizes_to_big_endian() {
        let rows = stored_rows();
        let road = LineString::deserialize(&rows["road"]).unwrap();
        let reencoded = road.serialize().unwrap();
        assert_eq!(reencoded[0], 0x00);
        assert_ne!(reencoded, rows["road"]);
        assert_eq!(LineString::deserialize(&reencoded).unwrap(), road);
    }

    #[test]
    fn test_values_as_set_members() {
        let mut seen = HashSet::new();
        for wkt in [
            "POINT (1 2)",
            "POINT (1.0 2.0)",
            "LINESTRING (1 2, 3 4)",
            "LINESTRING (3 4, 1 2)",
            "POLYGON EMPTY",
        ] {
            seen.insert(Geometry::parse(wkt).unwrap());
        }
        assert_eq!(seen.len(), 4);
        assert!(seen.contains(&Geometry::from(Polygon::empty())));
    }

    #[test]
    fn test_corrupt_values_are_decoding_errors() {
        let truncated = {
            let mut bytes = line(&[(1.0, 1.0), (2.0, 2.0)]).serialize().unwrap();
            bytes.truncate(bytes.len() - 3);
            bytes
        };
        let huge_count = PayloadBuilder::new(Order::Big, 3).int32(u32::MAX).build();
        let wrong_code = PayloadBuilder::new(Order::Little, 9).build();

        for bytes in [truncated, huge_count, wrong_code, Vec::new()] {
            let err = Geometry::deserialize(&bytes).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DecodingError, "bytes: {:?}", bytes);
        }
    }

    #[test]
    fn test_typed_read_rejects_other_kinds() {
        let rows = stored_rows();
        assert!(Point::deserialize(&rows["road"]).is_err());
        assert!(Polygon::deserialize(&rows["tower"]).is_err());
        assert!(LineString::deserialize(&rows["capitol"]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_document_of_geometries() {
        let document: BTreeMap<String, Geometry> = serde_json::from_str(
            r#"{"tower": "POINT (37.5 21.1)", "area": "POLYGON ((0 0, 1 0, 1 1, 0 0))"}"#,
        )
        .unwrap();
        assert_eq!(document["tower"], Geometry::from(point(37.5, 21.1)));

        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(
            json,
            r#"{"area":"POLYGON ((0.0 0.0, 1.0 0.0, 1.0 1.0, 0.0 0.0))","tower":"POINT (37.5 21.1)"}"#
        );
    }
}
