use float_eq::assert_float_eq;
use stereogrid::math::angular::normalize_longitude;
use stereogrid::prelude::*;

// A user supplied ellipsoid definition file, here inline
const ELLIPSOIDS: &str = "
# Ellipsoids for grid tests
[Krassovsky_1940]
A = 6378245
B = 6356863.019
F1 = 298.3
Id = 1

[Sphere]
A = 6371000
B = 6371000
F1 = 0
Id = 99
";

fn plane(
    kind: SphereProjection,
    ellps: &Ellipsoid,
    lat0: f64,
    lon0: f64,
) -> StereographicProjector {
    StereographicProjector::new(SphereProjector::new(kind, ellps, lat0), lat0, lon0)
}

#[test]
fn parallels_and_meridians_agree() -> Result<(), Error> {
    let registry = EllipsoidRegistry::builtin().merged(EllipsoidRegistry::parse(ELLIPSOIDS)?);
    let ellps = registry.get("Krassovsky_1940")?;
    let (lat0, lon0) = (50., 10.);

    for kind in SphereProjection::ALL {
        let plane = plane(kind, &ellps, lat0, lon0);
        let grid = GridBuilder::new(plane, 10., 10., lat0, lon0)?.build();

        for parallel in grid.parallels() {
            if parallel.points.len() != 722 {
                continue;
            }
            let lat = parallel.value;
            // Index of the latitude in the meridian sample sequence, north to south
            let j = ((89. - lat) / 0.5) as usize;

            for meridian in grid.meridians() {
                if meridian.points.len() != 357 {
                    continue;
                }
                let offset = normalize_longitude(meridian.value - lon0);
                // Index of the longitude in the eastward half turn from the center
                let k = (offset.abs() / 0.5) as usize;
                let expected = if offset >= 0. {
                    parallel.points[360 - k]
                } else {
                    parallel.points[361 + k]
                };
                assert_eq!(
                    meridian.points[j], expected,
                    "{kind}: ({lat}, {}) differs",
                    meridian.value
                );
            }
        }
    }
    Ok(())
}

#[test]
fn sphere_symmetry() -> Result<(), Error> {
    let registry = EllipsoidRegistry::parse(ELLIPSOIDS)?;
    let sphere = registry.get("Sphere")?;
    assert_eq!(sphere.id(), 99);

    // On the sphere, with the center on the equator, a point a quarter turn
    // away is found at the distance 2R from the origin, on the y axis
    let plane = plane(SphereProjection::Mollweide, &sphere, 0., 0.);
    let xy = plane.project_to_plane(0., 90.)?;
    assert_float_eq!(xy.x(), 0., abs <= 1e-3);
    assert_float_eq!(xy.y().abs(), 2. * 6_371_000., abs <= 1e-3);

    let grid = GridBuilder::new(plane, 30., 30., 0., 0.)?.build();
    assert!(grid.equator().is_some());

    // ... and the parallels symmetric around it
    let (Some(north), Some(south)) = (grid.parallel(30.), grid.parallel(-30.)) else {
        panic!("missing parallels");
    };
    assert_eq!(north.len(), south.len());
    for (n, s) in north.iter().zip(south) {
        assert_float_eq!(n.x(), -s.x(), abs <= 1e-3);
        assert_float_eq!(n.y(), s.y(), abs <= 1e-3);
    }
    Ok(())
}

#[test]
fn pole_is_reported_once_and_dropped_from_the_grid() -> Result<(), Error> {
    let ellps = Ellipsoid::named("Krassovsky_1940")?;
    let plane = plane(SphereProjection::Equidistant, &ellps, 50., 10.);

    let Err(Error::PoleReached { latitude, longitude }) = plane.project_to_plane(-50., -170.) else {
        panic!("expected the antipode to be unprojectable");
    };
    assert_eq!((latitude, longitude), (-50., -170.));

    let grid = GridBuilder::new(plane, 10., 10., 50., 10.)?.build();
    assert_eq!(grid.parallel(-50.).map(<[Coor2D]>::len), Some(720));
    assert_eq!(grid.meridian(-170.).map(<[Coor2D]>::len), Some(356));
    Ok(())
}

#[test]
fn sample_table() -> Result<(), Error> {
    let ellps = Ellipsoid::named("Krassovsky_1940")?;
    let plane = plane(SphereProjection::Equidistant, &ellps, 50., 10.);
    let grid = GridBuilder::new(plane, 10., 10., 50., 10.)?.build();

    let Some(entries) = grid.samples(40.) else {
        panic!("missing sample table row");
    };
    assert_eq!(entries.len(), 19);
    let Some(entry) = entries.iter().find(|e| e.longitude == 30.) else {
        panic!("missing entry at 30°");
    };
    assert_float_eq!(entry.x, -900_640.653_013_527_4, abs <= 1e-5);
    assert_float_eq!(entry.y, 1_710_296.063_540_628_2, abs <= 1e-5);

    let rows = grid.table_rows();
    let Some(row) = rows
        .iter()
        .find(|r| r[0] == " 40° 00′\u{2009} 00.00″" && r[1] == " 30° 00′\u{2009} 00.00″")
    else {
        panic!("missing table row");
    };
    assert_eq!(row[2], "-900640.653");
    assert_eq!(row[3], " 1710296.064");
    Ok(())
}

#[test]
fn unknown_names() {
    assert!(matches!(
        Ellipsoid::named("Everest_1830"),
        Err(Error::NotFound(..))
    ));
    assert!(matches!(
        "transverse-mercator".parse::<SphereProjection>(),
        Err(Error::NotFound(..))
    ));
}
