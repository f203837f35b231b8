//! Graticule construction: sampling the stereographic projection along
//! parallels and meridians.
//!
//! The parallels are sampled from the center longitude eastwards over half a
//! turn, and closed by mirroring the half curve across the x axis. Meridians
//! west of the center are mirrored from their eastern counterparts. Points
//! shared by the two passes are projected once, through a cache local to
//! each [`GridBuilder::build`] call, so parallels and meridians agree exactly
//! where they cross.

mod coor2d;
mod curves;

pub use coor2d::Coor2D;
pub use curves::Family;
pub use curves::Label;
pub use curves::Polyline;

use crate::math::angular::{normalize_latitude, normalize_longitude};
use crate::math::frange;
use crate::Error;
use crate::StereographicProjector;
use log::{debug, trace, warn};
use std::collections::HashMap;

/// Default sampling resolution along the curves, degrees
pub const DEFAULT_RESOLUTION: f64 = 0.5;

/// Smallest accepted grid step and sampling resolution, degrees
pub const MIN_STEP: f64 = 1e-3;

// Angular coincidence tolerance, degrees
const EPS: f64 = 1e-9;

/// The outcome of projecting a single grid node
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Sample {
    Plane(Coor2D),
    /// The node is the antipode of the projection center
    Pole,
}

/// One row of the sample table: a grid node at a multiple of the longitude
/// step, with its plane coordinates
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct TableEntry {
    pub longitude: f64,
    pub x: f64,
    pub y: f64,
}

// ----- The projection cache ------------------------------------------------------

struct Cache<'a> {
    projector: &'a StereographicProjector,
    samples: HashMap<(u64, u64), Sample>,
}

impl<'a> Cache<'a> {
    fn new(projector: &'a StereographicProjector) -> Cache<'a> {
        Cache {
            projector,
            samples: HashMap::new(),
        }
    }

    fn project(&mut self, lat: f64, long: f64) -> Sample {
        // Adding zero folds -0 onto +0
        let key = ((lat + 0.).to_bits(), (long + 0.).to_bits());
        let projector = self.projector;
        *self.samples.entry(key).or_insert_with(|| {
            match projector.project_to_plane(lat, long) {
                Ok(xy) => Sample::Plane(xy),
                Err(e) => {
                    trace!("Skipping grid node: {e}");
                    Sample::Pole
                }
            }
        })
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

// ----- The builder ---------------------------------------------------------------

/// Builds the graticule of a [`StereographicProjector`] at the given
/// latitude and longitude steps.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    projector: StereographicProjector,
    step_phi: f64,
    step_lam: f64,
    lat0: f64,
    long0: f64,
    resolution: f64,
}

impl GridBuilder {
    /// A builder for the grid of parallels every `step_phi` degrees, and
    /// meridians every `step_lam` degrees, as seen from the center
    /// (`lat0`, `long0`).
    pub fn new(
        projector: StereographicProjector,
        step_phi: f64,
        step_lam: f64,
        lat0: f64,
        long0: f64,
    ) -> Result<GridBuilder, Error> {
        positive_step("step_phi", step_phi)?;
        positive_step("step_lam", step_lam)?;
        if !lat0.is_finite() || lat0.abs() > 90. {
            warn!("Center latitude out of range: {lat0}");
            return Err(Error::BadParam("lat0".to_string(), lat0.to_string()));
        }
        if !long0.is_finite() {
            warn!("Center longitude not finite: {long0}");
            return Err(Error::BadParam("long0".to_string(), long0.to_string()));
        }

        Ok(GridBuilder {
            projector,
            step_phi,
            step_lam,
            lat0,
            long0: normalize_longitude(long0),
            resolution: DEFAULT_RESOLUTION,
        })
    }

    /// Sample the curves every `resolution` degrees instead of the default
    pub fn with_resolution(mut self, resolution: f64) -> Result<GridBuilder, Error> {
        positive_step("resolution", resolution)?;
        self.resolution = resolution;
        Ok(self)
    }

    #[must_use]
    pub fn projector(&self) -> &StereographicProjector {
        &self.projector
    }

    /// The center, (latitude, longitude), in degrees
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.lat0, self.long0)
    }

    /// Compute the grid. Every call starts from an empty cache.
    #[must_use]
    pub fn build(&self) -> Grid {
        let mut cache = Cache::new(&self.projector);
        let res = self.resolution;

        // The fine sampling ranges
        let lat_range: Vec<f64> = frange(-89., 89. + res, res)
            .map(normalize_latitude)
            .collect();
        let lon_range: Vec<f64> = frange(self.long0, self.long0 + 180. + res, res)
            .map(normalize_longitude)
            .collect();

        // The coarse grid values
        let main_lat = mirrored_range(frange(0., 90., self.step_phi).collect(), 1)
            .into_iter()
            .map(normalize_latitude)
            .collect::<Vec<_>>();
        let lon_steps = frange(0., 180. + self.step_lam, self.step_lam).collect();
        let main_lon = mirrored_range(lon_steps, 2)
            .into_iter()
            .map(normalize_longitude)
            .collect::<Vec<_>>();

        // Parallels, and the sample table
        let mut parallels = Vec::with_capacity(main_lat.len());
        let mut sample_table = Vec::with_capacity(main_lat.len());
        for &lat in &main_lat {
            let mut points = Vec::with_capacity(2 * lon_range.len());
            let mut entries = Vec::new();
            for &long in lon_range.iter().rev() {
                let Sample::Plane(xy) = cache.project(lat, long) else {
                    continue;
                };
                let xy = Coor2D::raw(xy.x(), xy.y().abs());
                points.push(xy);
                if long % self.step_lam == 0. {
                    entries.push(TableEntry {
                        longitude: long,
                        x: xy.x(),
                        y: xy.y(),
                    });
                }
            }
            let mirror: Vec<Coor2D> = points.iter().rev().map(Coor2D::mirrored).collect();
            points.extend(mirror);

            let lat = if lat.abs() < EPS { 0. } else { lat };
            parallels.push(Polyline::new(Family::Parallel, lat, points));
            sample_table.push((lat, entries));
        }

        // Meridians
        let mut meridians: Vec<Polyline> = Vec::with_capacity(main_lon.len());
        for &long in &main_lon {
            let long = if long.abs() < EPS { 0. } else { long };
            if meridians.iter().any(|m| m.value == long) {
                continue;
            }

            // West of the center: mirror the meridian as far to the east.
            // The anti-meridian is its own mirror image, and keeps the
            // negative y branch, except for a center on the zero meridian
            let offset = normalize_longitude(long - self.long0);
            let anti_meridian = (offset.abs() - 180.).abs() < EPS;
            let points = if anti_meridian {
                let points = self.meridian(&mut cache, &lat_range, long);
                if self.long0.abs() < EPS {
                    points
                } else {
                    points.iter().map(Coor2D::mirrored).collect()
                }
            } else if offset < 0. {
                let east = normalize_longitude(2. * self.long0 - long);
                self.meridian(&mut cache, &lat_range, east)
                    .iter()
                    .map(Coor2D::mirrored)
                    .collect()
            } else {
                self.meridian(&mut cache, &lat_range, long)
            };
            meridians.push(Polyline::new(Family::Meridian, long, points));
        }
        meridians.sort_by(|a, b| a.value.total_cmp(&b.value));

        // The axis of symmetry of the grid, even when off the coarse grid
        let central = self.meridian(&mut cache, &lat_range, self.long0);
        let central_meridian = if central.is_empty() {
            None
        } else {
            Some(Polyline::new(Family::CentralMeridian, self.long0, central))
        };

        debug!(
            "Grid: {} parallels, {} meridians, {} nodes projected",
            parallels.len(),
            meridians.len(),
            cache.len()
        );

        Grid {
            long0: self.long0,
            parallels,
            meridians,
            sample_table,
            central_meridian,
        }
    }

    // The meridian `long`, from north to south, on the non-negative y side
    fn meridian(&self, cache: &mut Cache, lat_range: &[f64], long: f64) -> Vec<Coor2D> {
        lat_range
            .iter()
            .rev()
            .filter_map(|&lat| match cache.project(lat, long) {
                Sample::Plane(xy) => Some(Coor2D::raw(xy.x(), xy.y().abs())),
                Sample::Pole => None,
            })
            .collect()
    }
}

fn positive_step(name: &str, step: f64) -> Result<(), Error> {
    if step.is_finite() && step >= MIN_STEP {
        return Ok(());
    }
    warn!("Grid step {name} must be at least {MIN_STEP}°: {step}");
    Err(Error::BadParam(name.to_string(), step.to_string()))
}

// Prepend the negated interior of `range` (skipping `skip` elements at its
// far end, and the leading zero) in reverse order
fn mirrored_range(range: Vec<f64>, skip: usize) -> Vec<f64> {
    let end = range.len().saturating_sub(skip - 1);
    let mut all: Vec<f64> = range
        .get(1..end)
        .unwrap_or_default()
        .iter()
        .rev()
        .map(|v| -v)
        .collect();
    all.extend(range);
    all
}

// ----- The result ----------------------------------------------------------------

/// A computed graticule: a read-only snapshot of the curves and the sample
/// table of one [`GridBuilder::build`] call
#[derive(Debug, Clone, Default)]
pub struct Grid {
    long0: f64,
    parallels: Vec<Polyline>,
    meridians: Vec<Polyline>,
    sample_table: Vec<(f64, Vec<TableEntry>)>,
    central_meridian: Option<Polyline>,
}

impl Grid {
    /// The parallels, ordered from south to north
    #[must_use]
    pub fn parallels(&self) -> &[Polyline] {
        &self.parallels
    }

    /// The meridians, ordered from west to east
    #[must_use]
    pub fn meridians(&self) -> &[Polyline] {
        &self.meridians
    }

    /// The sample table, by latitude, in the order of the parallels
    #[must_use]
    pub fn sample_table(&self) -> &[(f64, Vec<TableEntry>)] {
        &self.sample_table
    }

    /// The points of the parallel `lat`, if it is part of the grid
    #[must_use]
    pub fn parallel(&self, lat: f64) -> Option<&[Coor2D]> {
        find(&self.parallels, lat)
    }

    /// The points of the meridian `long`, if it is part of the grid
    #[must_use]
    pub fn meridian(&self, long: f64) -> Option<&[Coor2D]> {
        find(&self.meridians, normalize_longitude(long))
    }

    /// The sample table entries of the parallel `lat`
    #[must_use]
    pub fn samples(&self, lat: f64) -> Option<&[TableEntry]> {
        self.sample_table
            .iter()
            .find(|(value, _)| (value - lat).abs() < EPS)
            .map(|(_, entries)| entries.as_slice())
    }

    /// The equator, as an axis curve
    #[must_use]
    pub fn equator(&self) -> Option<Polyline> {
        let points = self.parallel(0.)?;
        if points.is_empty() {
            return None;
        }
        Some(Polyline::new(Family::Equator, 0., points.to_vec()))
    }

    /// The meridian through the projection center, as an axis curve
    #[must_use]
    pub fn central_meridian(&self) -> Option<&Polyline> {
        self.central_meridian.as_ref()
    }

    /// The center longitude, normalized
    #[must_use]
    pub fn center_longitude(&self) -> f64 {
        self.long0
    }
}

fn find(curves: &[Polyline], value: f64) -> Option<&[Coor2D]> {
    curves
        .iter()
        .find(|c| (c.value - value).abs() < EPS)
        .map(|c| c.points.as_slice())
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use float_eq::assert_float_eq;

    fn builder(
        step_phi: f64,
        step_lam: f64,
        lat0: f64,
        long0: f64,
    ) -> Result<GridBuilder, Error> {
        let ellps = Ellipsoid::default();
        let sphere = SphereProjector::new(SphereProjection::Equidistant, &ellps, lat0);
        let plane = StereographicProjector::new(sphere, lat0, long0);
        GridBuilder::new(plane, step_phi, step_lam, lat0, long0)
    }

    #[test]
    fn ranges() {
        let lat = mirrored_range(frange(0., 90., 10.).collect(), 1);
        assert_eq!(lat.len(), 17);
        assert_eq!(lat[0], -80.);
        assert_eq!(lat[8], 0.);
        assert_eq!(lat[16], 80.);

        let lon = mirrored_range(frange(0., 190., 10.).collect(), 2);
        assert_eq!(lon.len(), 36);
        assert_eq!(lon[0], -170.);
        assert_eq!(lon[35], 180.);

        assert_eq!(mirrored_range(vec![0.], 2), vec![0.]);
        assert_eq!(mirrored_range(vec![0., 45.], 1), vec![-45., 0., 45.]);
    }

    #[test]
    fn bad_steps() -> Result<(), Error> {
        assert!(builder(0., 10., 50., 10.).is_err());
        assert!(builder(10., -1., 50., 10.).is_err());
        assert!(builder(10., f64::NAN, 50., 10.).is_err());
        assert!(builder(10., 10., 91., 10.).is_err());
        assert!(matches!(
            builder(10., 10., 50., 10.).and_then(|b| b.with_resolution(0.)),
            Err(Error::BadParam(..))
        ));

        // Steps below MIN_STEP
        assert!(builder(1e-4, 10., 50., 10.).is_err());
        assert!(matches!(
            builder(10., 10., 50., 10.).and_then(|b| b.with_resolution(1e-8)),
            Err(Error::BadParam(..))
        ));
        assert!(builder(10., 10., 50., 10.)?.with_resolution(MIN_STEP).is_ok());
        Ok(())
    }

    #[test]
    fn shapes() -> Result<(), Error> {
        let grid = builder(10., 10., 50., 10.)?.build();

        assert_eq!(grid.parallels().len(), 17);
        assert_eq!(grid.meridians().len(), 36);
        assert_eq!(grid.parallels()[0].value, -80.);
        assert_eq!(grid.meridians()[0].value, -170.);
        assert_eq!(grid.meridians()[35].value, 180.);

        for p in grid.parallels() {
            // The antipode of the center is on the parallel -50
            let expected = if p.value == -50. { 720 } else { 722 };
            assert_eq!(p.points.len(), expected, "parallel {}", p.value);
        }
        for m in grid.meridians() {
            // ... and on the anti-meridian
            let expected = if m.value == -170. { 356 } else { 357 };
            assert_eq!(m.points.len(), expected, "meridian {}", m.value);
        }

        let Some(entries) = grid.samples(40.) else {
            panic!("no samples at 40°");
        };
        assert_eq!(entries.len(), 19);
        assert!(entries.iter().all(|e| e.longitude % 10. == 0.));
        Ok(())
    }

    #[test]
    fn consistency() -> Result<(), Error> {
        let grid = builder(10., 10., 50., 10.)?.build();
        let (Some(parallel), Some(meridian)) = (grid.parallel(40.), grid.meridian(30.)) else {
            panic!("missing curves");
        };

        // (40, 30) is at index 320 of the parallel, and 98 of the meridian
        assert_eq!(parallel[320], meridian[98]);
        assert_float_eq!(parallel[320].x(), -900_640.653_013_527_4, abs <= 1e-5);
        assert_float_eq!(parallel[320].y(), 1_710_296.063_540_628_2, abs <= 1e-5);

        // The mirror image, west of the center
        let Some(west) = grid.meridian(-10.) else {
            panic!("missing meridian -10");
        };
        assert_eq!(west[98], meridian[98].mirrored());

        // ... which is also found on the closing half of the parallel
        assert_eq!(parallel[721 - 320], west[98]);
        Ok(())
    }

    #[test]
    fn rebuild() -> Result<(), Error> {
        let builder = builder(15., 30., -35., -120.)?;
        let first = builder.build();
        let second = builder.build();
        assert_eq!(first.parallels(), second.parallels());
        assert_eq!(first.meridians(), second.meridians());
        Ok(())
    }

    #[test]
    fn anti_meridian() -> Result<(), Error> {
        // Mirrored to the negative y side of the plane
        let grid = builder(10., 10., 50., 10.)?.build();
        let (Some(anti), Some(parallel)) = (grid.meridian(-170.), grid.parallel(40.)) else {
            panic!("missing curves");
        };
        assert!(anti.iter().all(|p| p.y() <= 0.));
        assert_eq!(anti[98], parallel[0].mirrored());

        // ... except for a center on the zero meridian
        let grid = builder(10., 10., 50., 0.)?.build();
        let Some(anti) = grid.meridian(180.) else {
            panic!("missing meridian 180");
        };
        assert!(anti.iter().all(|p| p.y() >= 0.));
        Ok(())
    }

    #[test]
    fn date_line_center() -> Result<(), Error> {
        // The antipode of the center is on the zero meridian, and is
        // dropped, whichever side of the date line the center is given on
        for long0 in [180., -180.] {
            let grid = builder(10., 10., 0., long0)?.build();
            let Some(entries) = grid.samples(0.) else {
                panic!("missing samples at the equator");
            };
            assert_eq!(entries.len(), 18, "center at {long0}");
            assert!(entries.iter().all(|e| e.longitude != 0.));
        }
        Ok(())
    }

    #[test]
    fn greenwich_center() -> Result<(), Error> {
        // With the center on the zero meridian, no meridian is built twice
        let grid = builder(10., 10., 45., 0.)?.build();
        assert_eq!(grid.meridians().len(), 36);
        let central = grid.meridian(0.).map(<[Coor2D]>::len);
        assert_eq!(central, Some(357));
        assert!(grid.central_meridian().is_some());
        assert!(grid.equator().is_some());
        Ok(())
    }

    #[test]
    fn off_grid_center() -> Result<(), Error> {
        // The central meridian is built even when not on the coarse grid
        let grid = builder(10., 10., 55.75, 37.62)?.build();
        assert!(grid.meridian(37.62).is_none());
        let Some(central) = grid.central_meridian() else {
            panic!("missing central meridian");
        };
        assert_float_eq!(central.value, 37.62, abs <= 1e-12);
        assert_eq!(central.points.len(), 357);
        Ok(())
    }
}
