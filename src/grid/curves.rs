//! Rendering support: polylines, axis labels and the sample table text.
use super::{Coor2D, Grid, EPS};
use crate::math::angular::{dms_str, normalize_longitude};
use std::fmt;

// The sample index on a parallel, where its label is placed
const PARALLEL_LABEL_INDEX: usize = 210;

// Only every LABEL_STRIDE'th curve is labelled
const LABEL_STRIDE: usize = 5;

/// The kind of grid curve a polyline belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    Parallel,
    Meridian,
    Equator,
    CentralMeridian,
}

/// A sequence of plane points, representing (part of) the grid curve at
/// latitude or longitude `value`
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub family: Family,
    pub value: f64,
    pub points: Vec<Coor2D>,
}

impl Polyline {
    #[must_use]
    pub fn new(family: Family, value: f64, points: Vec<Coor2D>) -> Polyline {
        Polyline {
            family,
            value,
            points,
        }
    }

    /// Split into the parts with `x >= 0` and `x < 0`, dropping empty parts
    #[must_use]
    pub fn split_at_y_axis(&self) -> Vec<Polyline> {
        let (positive, negative): (Vec<Coor2D>, Vec<Coor2D>) =
            self.points.iter().partition(|p| p.x() >= 0.);
        [positive, negative]
            .into_iter()
            .filter(|points| !points.is_empty())
            .map(|points| Polyline::new(self.family, self.value, points))
            .collect()
    }
}

/// A text label for a grid curve, anchored at a point on it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub family: Family,
    /// Integer degrees, truncated toward zero
    pub value: i32,
    pub at: Coor2D,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.value)
    }
}

impl Grid {
    /// All curves, ready for drawing: parallels, meridians and the two axes.
    /// The anti-meridian of the center is split in two at the y axis, where
    /// it passes through infinity.
    #[must_use]
    pub fn polylines(&self) -> Vec<Polyline> {
        let anti_meridian = normalize_longitude(self.long0 - 180.);
        let mut all = self.parallels.clone();
        for meridian in &self.meridians {
            if (normalize_longitude(meridian.value - anti_meridian)).abs() < EPS {
                all.extend(meridian.split_at_y_axis());
            } else {
                all.push(meridian.clone());
            }
        }
        all.extend(self.equator());
        all.extend(self.central_meridian().cloned());
        all
    }

    /// Labels for every fifth non-negative parallel (and its southern
    /// counterpart), and for every fifth meridian
    #[must_use]
    pub fn labels(&self) -> Vec<Label> {
        let mut labels = Vec::new();

        let northern = self.parallels.iter().filter(|p| p.value >= 0.);
        for parallel in northern.step_by(LABEL_STRIDE) {
            let lat = parallel.value;
            let mut curves = vec![(lat, self.parallel(lat))];
            if lat != 0. {
                curves.push((-lat, self.parallel(-lat)));
            }
            for (value, points) in curves {
                let Some(at) = points.and_then(|p| p.get(PARALLEL_LABEL_INDEX)) else {
                    continue;
                };
                labels.push(Label {
                    family: Family::Parallel,
                    value: value as i32,
                    at: *at,
                });
            }
        }

        for meridian in self.meridians.iter().step_by(LABEL_STRIDE) {
            let Some(at) = meridian.points.get(meridian.points.len() / 2) else {
                continue;
            };
            labels.push(Label {
                family: Family::Meridian,
                value: meridian.value as i32,
                at: *at,
            });
        }
        labels
    }

    /// The sample table as text rows: latitude and longitude in
    /// degrees/minutes/seconds, followed by x and y with three decimals.
    /// Sorted by latitude.
    #[must_use]
    pub fn table_rows(&self) -> Vec<[String; 4]> {
        let mut table: Vec<_> = self.sample_table.iter().collect();
        table.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut rows = Vec::new();
        for (lat, entries) in table {
            for entry in entries {
                rows.push([
                    dms_str(*lat),
                    dms_str(entry.longitude),
                    space_signed(entry.x),
                    space_signed(entry.y),
                ]);
            }
        }
        rows
    }
}

// Three decimals, with a leading space in place of a plus sign
fn space_signed(value: f64) -> String {
    if value.is_sign_negative() {
        return format!("{value:.3}");
    }
    format!(" {value:.3}")
}

// ----- Tests ---------------------------------------------------------------------
