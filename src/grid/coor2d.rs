use std::ops::{Index, IndexMut};

/// Plane coordinate pair, (x, y), in the units of the ellipsoid axes.
/// The x axis points towards the north along the central meridian.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Coor2D(pub [f64; 2]);

impl Index<usize> for Coor2D {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Coor2D {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ----- C O N S T R U C T O R S ---------------------------------------------

impl Coor2D {
    /// A `Coor2D` from its two elements, with no interpretation
    #[must_use]
    pub fn raw(first: f64, second: f64) -> Coor2D {
        Coor2D([first, second])
    }

    /// A `Coor2D` consisting of 2 `0`s
    #[must_use]
    pub fn origin() -> Coor2D {
        Coor2D([0., 0.])
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Mirror image across the x axis
    #[must_use]
    pub fn mirrored(&self) -> Coor2D {
        Coor2D([self.0[0], -self.0[1]])
    }

    /// Divide both elements by the scale denominator `m`
    #[must_use]
    pub fn scale_down(&self, m: f64) -> Coor2D {
        Coor2D([self.0[0] / m, self.0[1] / m])
    }
}

// ----- T E S T S ---------------------------------------------------
