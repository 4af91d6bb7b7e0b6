use tracing::debug;

use crate::config::MatchTolerances;
use crate::geometry::surface::BSplineSurface;
use crate::geometry::SurfaceKind;
use crate::math::is_codirectional;
use crate::topology::{FaceData, FaceSurface};

/// Outcome of comparing two surfaces of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceMatch {
    /// The descriptors agree within tolerance.
    Equal,
    /// The descriptors differ.
    Different,
    /// No equality rule exists for this surface type yet; treated as different.
    Unsupported(SurfaceKind),
}

/// A group of faces judged to be the same manufactured feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClass {
    /// Index of the first face seen for this class.
    pub representative: usize,
    /// Indices of every face in the class, representative first.
    pub members: Vec<usize>,
}

/// Result of face deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueFaces {
    classes: Vec<EquivalenceClass>,
}

impl UniqueFaces {
    /// Number of equivalence classes.
    #[must_use]
    pub fn count(&self) -> usize {
        self.classes.len()
    }

    /// The equivalence classes in discovery order.
    #[must_use]
    pub fn classes(&self) -> &[EquivalenceClass] {
        &self.classes
    }

    /// Index of one representative face per class.
    pub fn representatives(&self) -> impl Iterator<Item = usize> + '_ {
        self.classes.iter().map(|c| c.representative)
    }
}

/// Groups geometrically identical faces.
///
/// Each face is compared against the representative of every class found so
/// far and joins the first class it matches, or starts a new one. The
/// comparison is pairwise with tolerances, so it is not guaranteed to be
/// transitive for faces sitting right at a tolerance boundary.
#[must_use]
pub fn deduplicate(faces: &[FaceData], tol: &MatchTolerances) -> UniqueFaces {
    let mut classes: Vec<EquivalenceClass> = Vec::new();
    for (i, face) in faces.iter().enumerate() {
        match classes
            .iter_mut()
            .find(|class| faces_equivalent(&faces[class.representative], face, tol))
        {
            Some(class) => class.members.push(i),
            None => classes.push(EquivalenceClass {
                representative: i,
                members: vec![i],
            }),
        }
    }
    debug!(faces = faces.len(), unique = classes.len(), "Deduplicated faces");
    UniqueFaces { classes }
}

/// Returns `true` if two faces are the same feature.
///
/// Surface type, orientation, parametric domain and area must agree before
/// the type-specific descriptors are compared.
#[must_use]
pub fn faces_equivalent(a: &FaceData, b: &FaceData, tol: &MatchTolerances) -> bool {
    if a.same_sense != b.same_sense || a.surface.kind() != b.surface.kind() {
        return false;
    }
    if !a.domain.approx_eq(&b.domain, tol.domain) || (a.area - b.area).abs() > tol.area {
        return false;
    }
    match match_surfaces(&a.surface, &b.surface, tol) {
        SurfaceMatch::Equal => true,
        SurfaceMatch::Different => false,
        SurfaceMatch::Unsupported(kind) => {
            debug!(?kind, "No equality rule, keeping faces distinct");
            false
        }
    }
}

/// Compares the type-specific descriptors of two surfaces.
///
/// Surfaces of different types are always [`SurfaceMatch::Different`].
#[must_use]
pub fn match_surfaces(a: &FaceSurface, b: &FaceSurface, tol: &MatchTolerances) -> SurfaceMatch {
    let kind = a.kind();
    if kind == b.kind() && !kind.has_equality_rule() {
        return SurfaceMatch::Unsupported(kind);
    }
    let close = |x: f64, y: f64| (x - y).abs() <= tol.descriptor;
    let equal = match (a, b) {
        (FaceSurface::Plane(p), FaceSurface::Plane(q)) => {
            is_codirectional(p.plane_normal(), q.plane_normal(), tol.angular)
        }
        (FaceSurface::Cylinder(p), FaceSurface::Cylinder(q)) => {
            is_codirectional(p.axis(), q.axis(), tol.angular) && close(p.radius(), q.radius())
        }
        (FaceSurface::Cone(p), FaceSurface::Cone(q)) => {
            is_codirectional(p.axis(), q.axis(), tol.angular)
                && close(p.ref_radius(), q.ref_radius())
                && close(p.half_angle(), q.half_angle())
        }
        (FaceSurface::Sphere(p), FaceSurface::Sphere(q)) => close(p.radius(), q.radius()),
        (FaceSurface::Torus(p), FaceSurface::Torus(q)) => {
            is_codirectional(p.axis(), q.axis(), tol.angular)
                && close(p.minor_radius(), q.minor_radius())
                && close(p.major_radius(), q.major_radius())
        }
        // Bezier patches have no descriptor rule: type, domain and area decide.
        (FaceSurface::Bezier(_), FaceSurface::Bezier(_)) => true,
        (FaceSurface::BSpline(p), FaceSurface::BSpline(q)) => bsplines_match(p, q, tol.descriptor),
        _ => false,
    };
    if equal {
        SurfaceMatch::Equal
    } else {
        SurfaceMatch::Different
    }
}

/// Compares knot structure only; pole positions encode placement, not shape.
fn bsplines_match(a: &BSplineSurface, b: &BSplineSurface, tol: f64) -> bool {
    a.u_degree() == b.u_degree()
        && a.v_degree() == b.v_degree()
        && a.u_pole_count() == b.u_pole_count()
        && a.v_pole_count() == b.v_pole_count()
        && knots_match(a.u_knots(), b.u_knots(), tol)
        && knots_match(a.v_knots(), b.v_knots(), tol)
}

fn knots_match(a: &[f64], b: &[f64], tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tol)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::surface::{
        BezierSurface, Cone, Cylinder, Plane, Sphere, SurfaceOfRevolution, Torus,
    };
    use std::f64::consts::{FRAC_PI_4, FRAC_PI_6};
    use crate::geometry::SurfaceDomain;
    use crate::math::{Point3, Vector3};

    fn face(surface: FaceSurface) -> FaceData {
        FaceData {
            surface,
            domain: SurfaceDomain::new(0.0, 6.0, 0.0, 10.0),
            same_sense: true,
            area: 60.0,
        }
    }

    fn hole(at: Point3, radius: f64) -> FaceData {
        face(FaceSurface::Cylinder(Cylinder::new(at, radius, Vector3::z()).unwrap()))
    }

    fn bspline(poles_offset: f64, last_knot: f64) -> FaceSurface {
        let poles = (0..9)
            .map(|i| Point3::new(f64::from(i / 3), f64::from(i % 3), poles_offset))
            .collect();
        let knots = vec![0.0, 0.0, 0.0, last_knot, last_knot, last_knot];
        FaceSurface::BSpline(BSplineSurface::new(2, 2, knots.clone(), knots, 3, poles).unwrap())
    }

    #[test]
    fn repeated_holes_collapse() {
        let faces = vec![
            hole(Point3::new(0.0, 0.0, 0.0), 3.0),
            hole(Point3::new(20.0, 0.0, 0.0), 3.0),
            hole(Point3::new(40.0, 0.0, 0.0), 3.0),
            hole(Point3::new(60.0, 0.0, 0.0), 4.0),
        ];
        let unique = deduplicate(&faces, &MatchTolerances::default());
        assert_eq!(unique.count(), 2);
        assert_eq!(unique.classes()[0].members, vec![0, 1, 2]);
        assert_eq!(unique.representatives().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn orientation_separates_faces() {
        let mut reversed = hole(Point3::origin(), 3.0);
        reversed.same_sense = false;
        let faces = vec![hole(Point3::origin(), 3.0), reversed];
        assert_eq!(deduplicate(&faces, &MatchTolerances::default()).count(), 2);
    }

    #[test]
    fn area_tolerance() {
        let mut close = hole(Point3::origin(), 3.0);
        close.area += 5e-4;
        let mut far = hole(Point3::origin(), 3.0);
        far.area += 5e-3;
        let tol = MatchTolerances::default();
        assert!(faces_equivalent(&hole(Point3::origin(), 3.0), &close, &tol));
        assert!(!faces_equivalent(&hole(Point3::origin(), 3.0), &far, &tol));
    }

    #[test]
    fn domain_separates_faces() {
        let mut shifted = hole(Point3::origin(), 3.0);
        shifted.domain.v_max += 1.0;
        let tol = MatchTolerances::default();
        assert!(!faces_equivalent(&hole(Point3::origin(), 3.0), &shifted, &tol));
    }

    #[test]
    fn plane_axis_direction_matters() {
        let tol = MatchTolerances::default();
        let up = FaceSurface::Plane(Plane::from_normal(Point3::origin(), Vector3::z()).unwrap());
        let up_elsewhere =
            FaceSurface::Plane(Plane::from_normal(Point3::new(5.0, 5.0, 5.0), Vector3::z()).unwrap());
        let side = FaceSurface::Plane(Plane::from_normal(Point3::origin(), Vector3::x()).unwrap());
        assert_eq!(match_surfaces(&up, &up_elsewhere, &tol), SurfaceMatch::Equal);
        assert_eq!(match_surfaces(&up, &side, &tol), SurfaceMatch::Different);
    }

    #[test]
    fn torus_compares_both_radii() {
        let tol = MatchTolerances::default();
        let a = FaceSurface::Torus(Torus::new(Point3::origin(), 10.0, 2.0, Vector3::z()).unwrap());
        let b = FaceSurface::Torus(Torus::new(Point3::origin(), 12.0, 2.0, Vector3::z()).unwrap());
        assert_eq!(match_surfaces(&a, &a.clone(), &tol), SurfaceMatch::Equal);
        assert_eq!(match_surfaces(&a, &b, &tol), SurfaceMatch::Different);
    }

    #[test]
    fn spheres_by_radius() {
        let tol = MatchTolerances::default();
        let a = FaceSurface::Sphere(Sphere::new(Point3::origin(), 2.0).unwrap());
        let b = FaceSurface::Sphere(Sphere::new(Point3::new(9.0, 0.0, 0.0), 2.0).unwrap());
        assert_eq!(match_surfaces(&a, &b, &tol), SurfaceMatch::Equal);
    }

    #[test]
    fn bspline_ignores_pole_positions() {
        let tol = MatchTolerances::default();
        assert_eq!(
            match_surfaces(&bspline(0.0, 1.0), &bspline(7.5, 1.0), &tol),
            SurfaceMatch::Equal
        );
        assert_eq!(
            match_surfaces(&bspline(0.0, 1.0), &bspline(0.0, 2.0), &tol),
            SurfaceMatch::Different
        );
    }

    #[test]
    fn cone_compares_radius_and_half_angle() {
        let tol = MatchTolerances::default();
        let cone = |axis: Vector3, ref_radius: f64, half_angle: f64| {
            FaceSurface::Cone(Cone::new(Point3::origin(), axis, ref_radius, half_angle).unwrap())
        };
        let countersink = cone(Vector3::z(), 4.0, FRAC_PI_4);
        assert_eq!(
            match_surfaces(&countersink, &cone(Vector3::new(0.0, 0.0, 3.0), 4.0, FRAC_PI_4), &tol),
            SurfaceMatch::Equal
        );
        assert_eq!(
            match_surfaces(&countersink, &cone(Vector3::z(), 4.5, FRAC_PI_4), &tol),
            SurfaceMatch::Different
        );
        assert_eq!(
            match_surfaces(&countersink, &cone(Vector3::z(), 4.0, FRAC_PI_6), &tol),
            SurfaceMatch::Different
        );
        assert_eq!(
            match_surfaces(&countersink, &cone(-Vector3::z(), 4.0, FRAC_PI_4), &tol),
            SurfaceMatch::Different
        );
        // A narrowing cone is a different feature from a widening one.
        assert_eq!(
            match_surfaces(&countersink, &cone(Vector3::z(), 4.0, -FRAC_PI_4), &tol),
            SurfaceMatch::Different
        );
    }

    #[test]
    fn bspline_compares_degrees_and_counts() {
        let tol = MatchTolerances::default();
        let spline = |v_degree: usize, u_knots: Vec<f64>, v_knots: Vec<f64>| {
            let u_poles = u_knots.len() - 3;
            let v_poles = v_knots.len() - v_degree - 1;
            let poles = vec![Point3::origin(); u_poles * v_poles];
            FaceSurface::BSpline(
                BSplineSurface::new(2, v_degree, u_knots, v_knots, u_poles, poles).unwrap(),
            )
        };
        let clamped = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let refined = vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0];
        let base = spline(2, clamped.clone(), clamped.clone());
        assert_eq!(
            match_surfaces(&base, &spline(2, clamped.clone(), clamped.clone()), &tol),
            SurfaceMatch::Equal
        );
        // Same knots, lower V degree: one more V pole.
        assert_eq!(
            match_surfaces(&base, &spline(1, clamped.clone(), clamped.clone()), &tol),
            SurfaceMatch::Different
        );
        // Extra U knot and pole.
        assert_eq!(
            match_surfaces(&base, &spline(2, refined.clone(), clamped.clone()), &tol),
            SurfaceMatch::Different
        );
        // Extra V knot and pole.
        assert_eq!(
            match_surfaces(&base, &spline(2, clamped, refined), &tol),
            SurfaceMatch::Different
        );
    }

    #[test]
    fn bezier_always_matches() {
        let tol = MatchTolerances::default();
        let a = FaceSurface::Bezier(BezierSurface {
            u_degree: 1,
            v_degree: 1,
            poles: vec![Point3::origin(); 4],
        });
        let b = FaceSurface::Bezier(BezierSurface {
            u_degree: 3,
            v_degree: 3,
            poles: vec![Point3::new(1.0, 1.0, 1.0); 16],
        });
        assert_eq!(match_surfaces(&a, &b, &tol), SurfaceMatch::Equal);
    }

    #[test]
    fn revolution_never_matches() {
        let tol = MatchTolerances::default();
        let rev = FaceSurface::Revolution(
            SurfaceOfRevolution::new(Point3::origin(), Vector3::z()).unwrap(),
        );
        assert_eq!(
            match_surfaces(&rev, &rev.clone(), &tol),
            SurfaceMatch::Unsupported(SurfaceKind::SurfaceOfRevolution)
        );
        let faces = vec![face(rev.clone()), face(rev)];
        assert_eq!(deduplicate(&faces, &tol).count(), 2);
        let others = vec![face(FaceSurface::Other), face(FaceSurface::Other)];
        assert_eq!(deduplicate(&others, &tol).count(), 2);
    }

    #[test]
    fn mismatched_types_differ() {
        let tol = MatchTolerances::default();
        let s = FaceSurface::Sphere(Sphere::new(Point3::origin(), 2.0).unwrap());
        assert_eq!(match_surfaces(&s, &FaceSurface::Other, &tol), SurfaceMatch::Different);
    }

    #[test]
    fn idempotent_and_bounded() {
        let faces = vec![
            hole(Point3::origin(), 3.0),
            hole(Point3::new(1.0, 0.0, 0.0), 3.0),
            face(FaceSurface::Other),
            hole(Point3::origin(), 5.0),
        ];
        let tol = MatchTolerances::default();
        let first = deduplicate(&faces, &tol);
        let second = deduplicate(&faces, &tol);
        assert_eq!(first, second);
        assert!(first.count() >= 1 && first.count() <= faces.len());
        let members: usize = first.classes().iter().map(|c| c.members.len()).sum();
        assert_eq!(members, faces.len());
    }

    #[test]
    fn empty_input() {
        assert_eq!(deduplicate(&[], &MatchTolerances::default()).count(), 0);
    }
}
