//! Machining cost-driver analysis of a solid.
//!
//! [`Analyze`] reads a solid through a [`GeometryKernel`], then runs the
//! face classifier, the deduplicator, the job planner, the stock sizer and
//! the time estimator over one snapshot of its faces.

pub mod axis;
pub mod classify;
pub mod dedup;
pub mod jobs;
pub mod report;
pub mod stock;
pub mod time;

pub use axis::ReferenceAxis;
pub use classify::{classify_faces, classify_surface, Classification, MachiningClass};
pub use dedup::{deduplicate, faces_equivalent, match_surfaces, SurfaceMatch, UniqueFaces};
pub use jobs::{plan_jobs, JobPlan};
pub use report::AnalysisReport;
pub use stock::{size_stock, StockSize};
pub use time::{estimate_machining_time, MachiningTime, TimeInputs};

use tracing::{debug, info_span};

use crate::catalog::PartConfiguration;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::kernel::GeometryKernel;
use crate::operations::query::Aabb;
use crate::topology::FaceData;

/// Analyzes one solid and produces an [`AnalysisReport`].
///
/// The kernel is only borrowed immutably, so several solids can be analyzed
/// from different threads at once.
pub struct Analyze<S> {
    solid: S,
    config: AnalysisConfig,
    part: Option<PartConfiguration>,
}

impl<S: Copy> Analyze<S> {
    /// Creates a new `Analyze` operation with the default configuration.
    #[must_use]
    pub fn new(solid: S) -> Self {
        Self {
            solid,
            config: AnalysisConfig::default(),
            part: None,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Looks up the catalog plate for this order.
    #[must_use]
    pub fn with_part(mut self, part: PartConfiguration) -> Self {
        self.part = Some(part);
        self
    }

    /// Executes the analysis.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the kernel fails to
    /// supply any face, edge or measure, the solid has no faces or reports a
    /// negative or non-finite measure, or the catalog has no plate for the
    /// requested part.
    pub fn execute<K>(&self, kernel: &K) -> Result<AnalysisReport>
    where
        K: GeometryKernel<Solid = S>,
    {
        let _span = info_span!("analyze").entered();
        self.config.validate()?;

        let record = AnalysisRecord::read(kernel, self.solid)?;
        let config = &self.config;

        let classification = classify_faces(&record.faces, &config.classifier);
        let unique = deduplicate(&record.faces, &config.tolerances);
        let plan = plan_jobs(
            &record.faces,
            &record.bounds.extents(),
            config.classifier.angular_tolerance,
        );

        let dimensions = record.bounds.sorted_dimensions();
        let stock = size_stock(dimensions, &config.stock);

        let three_d_area = classification.three_d_area(&record.faces);
        let machining_time = estimate_machining_time(
            &TimeInputs {
                stock_volume: stock.volume,
                bounding_box_volume: record.bounds.volume(),
                model_volume: record.volume,
                surface_area: record.surface_area,
                three_d_area,
                three_d_face_count: classification.three_d.len(),
            },
            &config.rates,
        );

        let plate_thickness = match &self.part {
            Some(part) => Some(
                config
                    .catalog
                    .select_thickness(&part.material, stock.dimensions[2])?,
            ),
            None => None,
        };

        debug!(
            faces = record.faces.len(),
            unique = unique.count(),
            jobs = plan.job_count,
            minutes = machining_time.total,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            dimensions,
            volume: record.volume,
            surface_area: record.surface_area,
            three_d_surface_area: three_d_area,
            three_d_face_count: classification.three_d.len(),
            linear_face_count: classification.linear.len(),
            edge_length: record.edge_length,
            face_count: record.faces.len(),
            edge_count: record.edge_count,
            unique_face_count: unique.count(),
            stock,
            machining_time,
            job_count: plan.job_count,
            plate_thickness,
            part: self.part.clone(),
        })
    }
}

/// Everything read from the kernel for one run.
struct AnalysisRecord {
    faces: Vec<FaceData>,
    edge_count: usize,
    volume: f64,
    surface_area: f64,
    edge_length: f64,
    bounds: Aabb,
}

impl AnalysisRecord {
    fn read<K: GeometryKernel>(kernel: &K, solid: K::Solid) -> Result<Self> {
        let handles = kernel.faces(solid)?;
        if handles.is_empty() {
            return Err(AnalysisError::EmptySolid.into());
        }
        let mut faces = Vec::with_capacity(handles.len());
        for handle in &handles {
            let descriptor = kernel.surface_descriptor(handle)?;
            let area = kernel.face_area(handle)?;
            check_measure("face area", area)?;
            faces.push(FaceData {
                surface: descriptor.surface,
                domain: descriptor.domain,
                same_sense: descriptor.same_sense,
                area,
            });
        }

        let edge_count = kernel.edges(solid)?.len();
        let volume = kernel.volume(solid)?;
        let surface_area = kernel.surface_area(solid)?;
        let edge_length = kernel.edge_length(solid)?;
        let bounds = kernel.bounding_box(solid)?;
        check_measure("volume", volume)?;
        check_measure("surface area", surface_area)?;
        check_measure("edge length", edge_length)?;
        for extent in bounds.extents().iter() {
            check_measure("bounding box", *extent)?;
        }

        debug!(faces = faces.len(), edges = edge_count, volume, "Read solid");
        Ok(Self {
            faces,
            edge_count,
            volume,
            surface_area,
            edge_length,
            bounds,
        })
    }
}

fn check_measure(measure: &'static str, value: f64) -> std::result::Result<(), AnalysisError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidMeasure { measure, value })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::MaterialCatalog;
    use crate::error::{QuotisError, StockError, TopologyError};
    use crate::geometry::surface::{Cone, Plane, Sphere};
    use crate::geometry::SurfaceDomain;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakeBox, MakeCylinder, MakeSolid};
    use crate::topology::{FaceSurface, SolidId, TopologyStore};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn block(store: &mut TopologyStore) -> SolidId {
        MakeBox::new(Point3::origin(), Point3::new(100.0, 50.0, 20.0))
            .execute(store)
            .unwrap()
    }

    #[test]
    fn block_report() {
        init_tracing();
        let mut store = TopologyStore::new();
        let solid = block(&mut store);
        let report = Analyze::new(solid).execute(&store).unwrap();

        assert_eq!(report.dimensions, [100.0, 50.0, 20.0]);
        assert_relative_eq!(report.volume, 100_000.0);
        assert_relative_eq!(report.surface_area, 16_000.0);
        assert_eq!(report.face_count, 6);
        assert_eq!(report.edge_count, 12);
        assert_eq!(report.linear_face_count, 6);
        assert_eq!(report.three_d_face_count, 0);
        assert_eq!(report.unique_face_count, 6);
        assert_eq!(report.job_count, 2);
        assert_relative_eq!(report.three_d_surface_area, 0.0);
        assert_relative_eq!(report.machining_time.three_d, 0.0);
        assert_relative_eq!(report.edge_length, 4.0 * (100.0 + 50.0 + 20.0));
        assert_eq!(report.stock.dimensions, [120.0, 70.0, 32.0]);
        assert_relative_eq!(report.stock.volume, 268_800.0);
        assert_relative_eq!(report.machining_time.model_roughing, 0.0);
        assert!(report.plate_thickness.is_none());
    }

    #[test]
    fn cylinder_report() {
        let mut store = TopologyStore::new();
        let solid = MakeCylinder::new(Point3::origin(), 5.0, Vector3::x(), 30.0)
            .execute(&mut store)
            .unwrap();
        let report = Analyze::new(solid).execute(&store).unwrap();

        assert_eq!(report.face_count, 3);
        assert_eq!(report.linear_face_count, 3);
        assert_eq!(report.unique_face_count, 3);
        assert_eq!(report.job_count, 2);
        assert_eq!(report.dimensions, [30.0, 10.0, 10.0]);
        // The round bar leaves material between its bounding box and itself.
        assert!(report.machining_time.model_roughing > 0.0);
    }

    #[test]
    fn three_d_faces_drive_contour_time() {
        let mut store = TopologyStore::new();
        let domain = SurfaceDomain::new(0.0, 1.0, 0.0, 1.0);
        let solid = MakeSolid::new(
            Aabb::from_corners(Point3::origin(), Point3::new(10.0, 10.0, 10.0)),
            500.0,
        )
        .with_face(
            FaceSurface::Plane(Plane::from_normal(Point3::origin(), -Vector3::z()).unwrap()),
            domain,
            true,
            100.0,
        )
        .with_face(
            FaceSurface::Sphere(Sphere::new(Point3::new(5.0, 5.0, 0.0), 5.0).unwrap()),
            domain,
            true,
            300.0,
        )
        .execute(&mut store)
        .unwrap();

        let report = Analyze::new(solid).execute(&store).unwrap();
        let rates = AnalysisConfig::default().rates;
        assert_eq!(report.three_d_face_count, 1);
        assert_relative_eq!(report.three_d_surface_area, 300.0);
        assert_relative_eq!(
            report.machining_time.three_d,
            300.0 * rates.rate_per_area + rates.rate_per_surface
        );
        assert_relative_eq!(report.machining_time.finish, 100.0 * rates.rate_finish);
    }

    #[test]
    fn narrowing_countersink_is_linear() {
        let mut store = TopologyStore::new();
        let domain = SurfaceDomain::new(0.0, 1.0, 0.0, 1.0);
        let solid = MakeSolid::new(
            Aabb::from_corners(Point3::origin(), Point3::new(20.0, 20.0, 5.0)),
            1500.0,
        )
        .with_face(
            FaceSurface::Plane(Plane::from_normal(Point3::origin(), Vector3::z()).unwrap()),
            domain,
            true,
            400.0,
        )
        .with_face(
            FaceSurface::Cone(
                Cone::new(Point3::new(10.0, 10.0, 5.0), Vector3::z(), 4.0, -FRAC_PI_4).unwrap(),
            ),
            domain,
            true,
            30.0,
        )
        .execute(&mut store)
        .unwrap();

        let report = Analyze::new(solid).execute(&store).unwrap();
        assert_eq!(report.linear_face_count, 2);
        assert_eq!(report.three_d_face_count, 0);
    }

    #[test]
    fn missing_face_aborts_analysis() {
        let mut store = TopologyStore::new();
        let solid = block(&mut store);
        let face = store.solid(solid).unwrap().faces[3];
        store.remove_face(face);

        let err = Analyze::new(solid).execute(&store).unwrap_err();
        assert!(matches!(
            err,
            QuotisError::Topology(TopologyError::EntityNotFound(_))
        ));
    }

    /// Kernel serving one unit-cube solid made of the given faces.
    struct FixedKernel {
        faces: Vec<FaceData>,
        volume: f64,
    }

    impl GeometryKernel for FixedKernel {
        type Solid = ();
        type Face = usize;
        type Edge = ();

        fn faces(&self, _solid: ()) -> Result<Vec<usize>> {
            Ok((0..self.faces.len()).collect())
        }

        fn edges(&self, _solid: ()) -> Result<Vec<()>> {
            Ok(Vec::new())
        }

        fn surface_descriptor(&self, face: &usize) -> Result<crate::kernel::SurfaceDescriptor> {
            let data = &self.faces[*face];
            Ok(crate::kernel::SurfaceDescriptor {
                surface: data.surface.clone(),
                domain: data.domain,
                same_sense: data.same_sense,
            })
        }

        fn face_area(&self, face: &usize) -> Result<f64> {
            Ok(self.faces[*face].area)
        }

        fn volume(&self, _solid: ()) -> Result<f64> {
            Ok(self.volume)
        }

        fn surface_area(&self, _solid: ()) -> Result<f64> {
            Ok(self.faces.iter().map(|f| f.area).sum())
        }

        fn edge_length(&self, _solid: ()) -> Result<f64> {
            Ok(0.0)
        }

        fn bounding_box(&self, _solid: ()) -> Result<Aabb> {
            Ok(Aabb::from_corners(Point3::origin(), Point3::new(1.0, 1.0, 1.0)))
        }
    }

    #[test]
    fn empty_solid_is_rejected() {
        let kernel = FixedKernel {
            faces: Vec::new(),
            volume: 1.0,
        };
        let err = Analyze::new(()).execute(&kernel).unwrap_err();
        assert!(matches!(err, QuotisError::Analysis(AnalysisError::EmptySolid)));
    }

    #[test]
    fn non_finite_volume_is_rejected() {
        let kernel = FixedKernel {
            faces: vec![FaceData {
                surface: FaceSurface::Other,
                domain: SurfaceDomain::new(0.0, 1.0, 0.0, 1.0),
                same_sense: true,
                area: 1.0,
            }],
            volume: f64::NAN,
        };
        let err = Analyze::new(()).execute(&kernel).unwrap_err();
        assert!(matches!(
            err,
            QuotisError::Analysis(AnalysisError::InvalidMeasure { measure: "volume", .. })
        ));
    }

    #[test]
    fn unsupported_surfaces_count_as_three_d() {
        let other = FaceData {
            surface: FaceSurface::Other,
            domain: SurfaceDomain::new(0.0, 1.0, 0.0, 1.0),
            same_sense: true,
            area: 0.5,
        };
        let kernel = FixedKernel {
            faces: vec![other.clone(), other],
            volume: 0.5,
        };
        let report = Analyze::new(()).execute(&kernel).unwrap();
        assert_eq!(report.three_d_face_count, 2);
        // No equality rule, so identical faces stay distinct.
        assert_eq!(report.unique_face_count, 2);
        assert_eq!(report.job_count, 2);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut store = TopologyStore::new();
        let solid = block(&mut store);
        let mut config = AnalysisConfig::default();
        config.rates.rate_finish = -1.0;

        let err = Analyze::new(solid)
            .with_config(config)
            .execute(&store)
            .unwrap_err();
        assert!(matches!(err, QuotisError::Config(_)));
    }

    #[test]
    fn part_selects_plate() {
        let mut store = TopologyStore::new();
        let solid = block(&mut store);
        let report = Analyze::new(solid)
            .with_part(PartConfiguration::new(5, "alu-6082", "as-machined"))
            .execute(&store)
            .unwrap();
        // 20 mm part plus 12 mm margin.
        assert_eq!(report.plate_thickness, Some(40.0));
        assert_eq!(report.part.unwrap().quantity, 5);
    }

    #[test]
    fn part_without_plate_fails() {
        let mut store = TopologyStore::new();
        let solid = block(&mut store);
        let config = AnalysisConfig {
            catalog: MaterialCatalog::empty().with_material("alu-6082", vec![10.0, 20.0]),
            ..AnalysisConfig::default()
        };
        let err = Analyze::new(solid)
            .with_config(config)
            .with_part(PartConfiguration::new(1, "alu-6082", "anodized"))
            .execute(&store)
            .unwrap_err();
        assert!(matches!(err, QuotisError::Stock(StockError::NotAvailable { .. })));
    }

    #[test]
    fn times_are_non_negative() {
        let mut store = TopologyStore::new();
        let solids = [
            block(&mut store),
            MakeCylinder::new(Point3::origin(), 2.0, Vector3::new(1.0, 1.0, 0.0), 8.0)
                .execute(&mut store)
                .unwrap(),
        ];
        for solid in solids {
            let time = Analyze::new(solid).execute(&store).unwrap().machining_time;
            for minutes in [
                time.bb_roughing,
                time.model_roughing,
                time.finish,
                time.three_d,
                time.feature,
                time.total,
            ] {
                assert!(minutes >= 0.0);
            }
        }
    }

    #[test]
    fn solids_analyzed_in_parallel() {
        let mut store = TopologyStore::new();
        let a = block(&mut store);
        let b = MakeCylinder::new(Point3::origin(), 5.0, Vector3::z(), 10.0)
            .execute(&mut store)
            .unwrap();
        let store = &store;

        let (ra, rb) = std::thread::scope(|s| {
            let ha = s.spawn(move || Analyze::new(a).execute(store).unwrap());
            let hb = s.spawn(move || Analyze::new(b).execute(store).unwrap());
            (ha.join().unwrap(), hb.join().unwrap())
        });
        assert_eq!(ra, Analyze::new(a).execute(store).unwrap());
        assert_eq!(rb.face_count, 3);
    }

    #[test]
    fn report_serializes_to_json() {
        let mut store = TopologyStore::new();
        let solid = block(&mut store);
        let json = Analyze::new(solid).execute(&store).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["job_count"], 2);
        assert_eq!(value["unique_face_count"], 6);
        assert_eq!(value["stock"]["dimensions"][2], 32.0);
        assert!(value.get("plate_thickness").is_none());
    }
}
