#[cfg(test)]
mod round_trip_tests {
    use dse_geometry::{Geometry, LineString, Point, Polygon};
    use dse_geometry_int_test::test_util::{Order, PayloadBuilder};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_point(rng: &mut StdRng) -> Point {
        Point::new(rng.random_range(-180.0..180.0), rng.random_range(-90.0..90.0)).unwrap()
    }

    fn random_line(rng: &mut StdRng) -> LineString {
        let len = rng.random_range(2..40);
        LineString::new((0..len).map(|_| random_point(rng)).collect()).unwrap()
    }

    fn random_polygon(rng: &mut StdRng) -> Polygon {
        let ring_count = rng.random_range(1..5);
        let rings = (0..ring_count)
            .map(|_| {
                let mut points = random_line(rng).points().to_vec();
                points.push(points[0]);
                LineString::new(points).unwrap()
            })
            .collect();
        Polygon::new(rings).unwrap()
    }

    fn little_endian_twin(line: &LineString) -> Vec<u8> {
        let coords: Vec<(f64, f64)> = line.points().iter().map(|p| (p.x(), p.y())).collect();
        PayloadBuilder::new(Order::Little, 2).coords(&coords).build()
    }

    #[test]
    fn test_binary_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let point = random_point(&mut rng);
            assert_eq!(Point::deserialize(&point.serialize().unwrap()).unwrap(), point);

            let line = random_line(&mut rng);
            let bytes = line.serialize().unwrap();
            assert_eq!(bytes[0], 0x00);
            assert_eq!(bytes.len(), 1 + 4 + 4 + 16 * line.len());
            assert_eq!(LineString::deserialize(&bytes).unwrap(), line);

            let polygon = random_polygon(&mut rng);
            assert_eq!(
                Polygon::deserialize(&polygon.serialize().unwrap()).unwrap(),
                polygon
            );
        }
    }

    #[test]
    fn test_little_endian_twin_decodes_equal() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let line = random_line(&mut rng);
            assert_eq!(
                LineString::deserialize(&little_endian_twin(&line)).unwrap(),
                line
            );
        }
    }

    #[test]
    fn test_wkt_round_trip() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..100 {
            let geometries = [
                Geometry::from(random_point(&mut rng)),
                Geometry::from(random_line(&mut rng)),
                Geometry::from(random_polygon(&mut rng)),
            ];
            for geometry in geometries {
                let wkt = geometry.wkt();
                let parsed = Geometry::parse(&wkt).unwrap();
                assert_eq!(parsed, geometry);
                assert_eq!(parsed.wkt(), wkt);
            }
        }
    }

    #[test]
    fn test_empty_values_round_trip() {
        for geometry in [
            Geometry::from(LineString::empty()),
            Geometry::from(Polygon::empty()),
        ] {
            let bytes = geometry.serialize().unwrap();
            assert_eq!(bytes.len(), 9);
            assert_eq!(Geometry::deserialize(&bytes).unwrap(), geometry);
            assert_eq!(Geometry::parse(&geometry.wkt()).unwrap(), geometry);
        }
    }
}
