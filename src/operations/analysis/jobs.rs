use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::math::{is_codirectional, is_orthogonal, Vector3};
use crate::topology::{FaceData, FaceSurface};

use super::axis::ReferenceAxis;

/// Estimated machine setups for a part.
///
/// This is a greedy maximum-coverage heuristic, not a guaranteed minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPlan {
    /// Number of setups, always at least 2.
    pub job_count: usize,
    /// Coordinate (0 = X, 1 = Y, 2 = Z) whose two directions seeded the plan.
    pub seed_index: usize,
    /// Axes chosen after the seed pair, in order.
    pub passes: Vec<ReferenceAxis>,
}

/// Plans the setups needed to reach every planar face.
///
/// `extents` are the bounding-box side lengths along X, Y and Z. Both
/// directions of the axis with the smallest extent are taken first (ties
/// prefer X, then Y), counting as two jobs. After that the axis with the
/// most remaining face area is taken until no face is left; equal areas are
/// resolved by the order of [`ReferenceAxis::ALL`].
///
/// Only planar faces are tested for accessibility. Curved faces are left
/// out of every bucket.
#[must_use]
pub fn plan_jobs(faces: &[FaceData], extents: &Vector3, angular_tol: f64) -> JobPlan {
    let mut buckets = fill_buckets(faces, angular_tol);

    let seed_index = smallest_extent(extents);
    let mut passes = Vec::new();
    let mut job_count = 2;
    if let Some((pos, neg)) = ReferenceAxis::pair(seed_index) {
        let mut consumed = std::mem::take(&mut buckets[pos.index()]);
        consumed.append(&mut buckets[neg.index()]);
        remove_faces(&mut buckets, &consumed);
        trace!(seed = ?pos, faces = consumed.len(), "Seeded job plan");
    }

    while let Some(axis) = largest_bucket(&buckets, faces) {
        let consumed = std::mem::take(&mut buckets[axis.index()]);
        remove_faces(&mut buckets, &consumed);
        passes.push(axis);
        job_count += 1;
        trace!(?axis, faces = consumed.len(), "Added job");
    }

    debug!(job_count, "Planned machining jobs");
    JobPlan {
        job_count,
        seed_index,
        passes,
    }
}

/// Sorts planar faces into the buckets of every axis that can reach them.
fn fill_buckets(faces: &[FaceData], angular_tol: f64) -> Vec<BTreeSet<usize>> {
    let mut buckets = vec![BTreeSet::new(); ReferenceAxis::ALL.len()];
    for (i, face) in faces.iter().enumerate() {
        let FaceSurface::Plane(plane) = &face.surface else {
            continue;
        };
        let outward = if face.same_sense {
            *plane.plane_normal()
        } else {
            -plane.plane_normal()
        };

        let mut reachable = false;
        for axis in ReferenceAxis::CANONICAL {
            let Some(dir) = axis.direction() else {
                continue;
            };
            if is_codirectional(&outward, &dir, angular_tol)
                || is_orthogonal(&outward, &dir, angular_tol)
            {
                buckets[axis.index()].insert(i);
                reachable = true;
            }
        }
        if !reachable {
            buckets[ReferenceAxis::Unknown.index()].insert(i);
        }
    }
    buckets
}

fn smallest_extent(extents: &Vector3) -> usize {
    let mut best = 0;
    for i in 1..3 {
        if extents[i] < extents[best] {
            best = i;
        }
    }
    best
}

/// Non-empty bucket with the most face area; the first one wins ties.
fn largest_bucket(buckets: &[BTreeSet<usize>], faces: &[FaceData]) -> Option<ReferenceAxis> {
    let mut best: Option<(ReferenceAxis, f64)> = None;
    for axis in ReferenceAxis::ALL {
        let bucket = &buckets[axis.index()];
        if bucket.is_empty() {
            continue;
        }
        let area: f64 = bucket.iter().map(|&i| faces[i].area).sum();
        if best.map_or(true, |(_, best_area)| area > best_area) {
            best = Some((axis, area));
        }
    }
    best.map(|(axis, _)| axis)
}

fn remove_faces(buckets: &mut [BTreeSet<usize>], consumed: &BTreeSet<usize>) {
    for bucket in buckets {
        bucket.retain(|i| !consumed.contains(i));
    }
}
