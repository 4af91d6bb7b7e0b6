use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// A tensor-product B-spline surface.
///
/// Poles are stored row-major: `poles[i * v_pole_count + j]` is the pole at
/// U index `i` and V index `j`. Knot vectors are full (clamped knots are
/// repeated), so `u_knots.len() == u_pole_count + u_degree + 1`.
#[derive(Debug, Clone)]
pub struct BSplineSurface {
    u_degree: usize,
    v_degree: usize,
    u_knots: Vec<f64>,
    v_knots: Vec<f64>,
    u_pole_count: usize,
    v_pole_count: usize,
    poles: Vec<Point3>,
}

impl BSplineSurface {
    /// Creates a new B-spline surface.
    ///
    /// # Errors
    ///
    /// Returns an error if a degree is zero, the pole grid does not match the
    /// given counts, or a knot vector has the wrong length or decreases.
    pub fn new(
        u_degree: usize,
        v_degree: usize,
        u_knots: Vec<f64>,
        v_knots: Vec<f64>,
        u_pole_count: usize,
        poles: Vec<Point3>,
    ) -> Result<Self> {
        if u_degree == 0 || v_degree == 0 {
            return Err(GeometryError::Degenerate("B-spline degree must be positive".into()).into());
        }
        if u_pole_count <= u_degree || poles.len() % u_pole_count != 0 {
            return Err(GeometryError::Degenerate(format!(
                "{} poles do not form a grid with {u_pole_count} rows",
                poles.len()
            ))
            .into());
        }
        let v_pole_count = poles.len() / u_pole_count;
        if v_pole_count <= v_degree {
            return Err(GeometryError::Degenerate(format!(
                "{v_pole_count} poles per row is too few for degree {v_degree}"
            ))
            .into());
        }
        validate_knots(&u_knots, u_degree, u_pole_count)?;
        validate_knots(&v_knots, v_degree, v_pole_count)?;

        Ok(Self {
            u_degree,
            v_degree,
            u_knots,
            v_knots,
            u_pole_count,
            v_pole_count,
            poles,
        })
    }

    /// Returns the degree in the U direction.
    #[must_use]
    pub fn u_degree(&self) -> usize {
        self.u_degree
    }

    /// Returns the degree in the V direction.
    #[must_use]
    pub fn v_degree(&self) -> usize {
        self.v_degree
    }

    /// Returns the full U knot vector.
    #[must_use]
    pub fn u_knots(&self) -> &[f64] {
        &self.u_knots
    }

    /// Returns the full V knot vector.
    #[must_use]
    pub fn v_knots(&self) -> &[f64] {
        &self.v_knots
    }

    /// Returns the number of poles in the U direction.
    #[must_use]
    pub fn u_pole_count(&self) -> usize {
        self.u_pole_count
    }

    /// Returns the number of poles in the V direction.
    #[must_use]
    pub fn v_pole_count(&self) -> usize {
        self.v_pole_count
    }

    /// Returns the control points, row-major in U.
    #[must_use]
    pub fn poles(&self) -> &[Point3] {
        &self.poles
    }
}

fn validate_knots(knots: &[f64], degree: usize, pole_count: usize) -> Result<()> {
    if knots.len() != pole_count + degree + 1 {
        return Err(GeometryError::Degenerate(format!(
            "expected {} knots for degree {degree} with {pole_count} poles, got {}",
            pole_count + degree + 1,
            knots.len()
        ))
        .into());
    }
    if knots.windows(2).any(|w| w[1] < w[0]) {
        return Err(GeometryError::Degenerate("knot vector must be non-decreasing".into()).into());
    }
    Ok(())
}
