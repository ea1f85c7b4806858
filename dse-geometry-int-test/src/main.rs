use dse_geometry::{GeometryResult, LineString, Point, Polygon};
use dse_geometry_int_test::test_util::{CAPITOL_COURTYARD, CAPITOL_EXTERIOR};
use log::info;
use std::collections::BTreeMap;

/// Column values as the storage layer would hold them.
type Table = BTreeMap<String, Vec<u8>>;

fn ring(coords: &[(f64, f64)]) -> GeometryResult<LineString> {
    let points = coords
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect::<GeometryResult<Vec<_>>>()?;
    LineString::new(points)
}

fn main() -> GeometryResult<()> {
    colog::init();

    info!("==== Point ====");
    let mut points_of_interest = Table::new();
    points_of_interest.insert("Empire State".into(), Point::new(38.0, 21.0)?.serialize()?);
    for (name, bytes) in &points_of_interest {
        let coords = Point::deserialize(bytes)?;
        info!("{}   {}", name, coords.wkt());
        info!("{}   {}", name, coords.summary());
    }

    info!("==== LineString ====");
    let mut directions = Table::new();
    directions.insert(
        "office -> home".into(),
        ring(&[(12.0, 21.0), (13.0, 31.0), (14.0, 41.0)])?.serialize()?,
    );
    for (route, bytes) in &directions {
        let line = LineString::deserialize(bytes)?;
        info!("Directions {}: {}", route, line.summary());
        info!("WKT: {}", line.wkt());
    }

    info!("==== Polygon ====");
    let mut places = Table::new();
    places.insert(
        "Capitol".into(),
        Polygon::new(vec![ring(CAPITOL_EXTERIOR)?, ring(CAPITOL_COURTYARD)?])?.serialize()?,
    );
    for (name, bytes) in &places {
        let layout = Polygon::deserialize(bytes)?;
        info!("Layout of {}:\n{}", name, layout.summary());
        if let Some(first) = layout.interior_rings().first().and_then(|r| r.points().first()) {
            info!("First interior point: {}", first.summary());
        }
        info!("WKT: {}", layout.wkt());
    }

    Ok(())
}
