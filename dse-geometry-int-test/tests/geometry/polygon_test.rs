#[cfg(test)]
mod polygon_tests {
    use dse_geometry::{ErrorKind, Geometry, LineString, Polygon};
    use dse_geometry_int_test::test_util::{
        line, polygon, Order, PayloadBuilder, CAPITOL_COURTYARD, CAPITOL_EXTERIOR,
    };

    #[test]
    fn test_parse_capitol() {
        let layout = Polygon::parse(
            "POLYGON ((0 0, 20 0, 26 26, 0 26, 0 0), (1 1, 1 5, 5 5, 5 1, 1 1))",
        )
        .unwrap();
        assert_eq!(layout.exterior_ring().unwrap().points().len(), 5);
        assert_eq!(layout.interior_rings().len(), 1);
        assert_eq!(layout.interior_rings()[0].points().len(), 5);
        assert_eq!(layout, polygon(&[CAPITOL_EXTERIOR, CAPITOL_COURTYARD]));
    }

    #[test]
    fn test_decomposition() {
        let ring0 = line(&[(0.0, 0.0), (9.0, 0.0), (9.0, 9.0), (0.0, 0.0)]);
        let ring1 = line(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
        let ring2 = line(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)]);
        let p = Polygon::new(vec![ring0.clone(), ring1.clone(), ring2.clone()]).unwrap();

        assert_eq!(p.exterior_ring(), Some(&ring0));
        assert_eq!(p.interior_rings(), &[ring1, ring2]);
        assert!(p.rings().iter().all(LineString::is_closed));
    }

    #[test]
    fn test_decode_both_orders() {
        for order in [Order::Big, Order::Little] {
            let data = PayloadBuilder::new(order, 3)
                .int32(2)
                .coords(CAPITOL_EXTERIOR)
                .coords(CAPITOL_COURTYARD)
                .build();
            assert_eq!(
                Polygon::deserialize(&data).unwrap(),
                polygon(&[CAPITOL_EXTERIOR, CAPITOL_COURTYARD])
            );
        }
    }

    #[test]
    fn test_line_string_value_is_rejected() {
        let data = line(CAPITOL_EXTERIOR).serialize().unwrap();
        assert_eq!(
            Polygon::deserialize(&data).unwrap_err().kind(),
            ErrorKind::DecodingError
        );
    }

    #[test]
    fn test_ring_from_runtime_geometry() {
        let ring = LineString::try_from(Geometry::parse("LINESTRING (0 0, 1 0, 0 0)").unwrap())
            .unwrap();
        assert!(Polygon::new(vec![ring]).is_ok());

        let not_a_ring = LineString::try_from(Geometry::parse("POINT (0 0)").unwrap());
        assert_eq!(not_a_ring.unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_stored_zero_point_ring_is_rejected() {
        for order in [Order::Big, Order::Little] {
            let data = PayloadBuilder::new(order, 3)
                .int32(2)
                .coords(CAPITOL_EXTERIOR)
                .coords(&[])
                .build();
            assert_eq!(
                Geometry::deserialize(&data).unwrap_err().kind(),
                ErrorKind::DecodingError
            );
        }
        assert_eq!(
            Polygon::new(vec![LineString::empty()]).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_summary_lists_rings() {
        let summary = polygon(&[CAPITOL_EXTERIOR, CAPITOL_COURTYARD]).summary();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Exterior ring: 0.0,0.0 to 20.0,0.0"));
        assert_eq!(lines[1], "Interior rings:");
        assert_eq!(
            lines[2],
            "    1.0,1.0 to 1.0,5.0 to 5.0,5.0 to 5.0,1.0 to 1.0,1.0"
        );
    }

    #[test]
    fn test_empty_literal() {
        assert_eq!(Polygon::empty().wkt(), "POLYGON EMPTY");
        assert_eq!(Polygon::parse("POLYGON EMPTY").unwrap(), Polygon::empty());
        assert!(Polygon::parse("POLYGON ()").is_err());
    }
}
