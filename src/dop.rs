//! A 14-sided discrete oriented polytope (14-DOP) bounding volume.
//!
//! The volume is the intersection of 14 half-spaces: for each of seven
//! fixed axes (the three cardinal axes and the four cube diagonals) a
//! plane facing along the axis and one facing against it.

use crate::matrix::{Mat3, Mat4};
use crate::num::Float;
use crate::scalar;
use crate::vector::Vec3;
use lazy_static::lazy_static;

const NUM_AXES: usize = 7;
const NUM_PLANES: usize = NUM_AXES * 2;

/// Slack applied when testing points against the bounding planes, so
/// that vertices reconstructed from the planes themselves pass.
const CONTAINS_EPSILON: f32 = 1e-7;

lazy_static! {
    static ref AXES: [Vec3; NUM_AXES] = {
        let s = 1.0 / 3.0_f32.sqrt();
        [
            Vec3::UNIT_X,
            Vec3::UNIT_Y,
            Vec3::UNIT_Z,
            Vec3::new(s, s, s),
            Vec3::new(s, s, -s),
            Vec3::new(s, -s, s),
            Vec3::new(-s, s, s),
        ]
    };

    /// Every combination of three mutually non-opposing planes, with the
    /// normal matrix and inverse determinant for the Cramer solve cached.
    static ref PLANE_ADJACENCY: Vec<PlaneTriple> = {
        let mut result = Vec::new();

        for i in 0..NUM_PLANES {
            for j in (i + 1)..NUM_PLANES {
                for k in (j + 1)..NUM_PLANES {
                    let i_normal = plane_normal(i);
                    let j_normal = plane_normal(j);
                    let k_normal = plane_normal(k);

                    if i_normal.dot(j_normal) < 0.0
                        || i_normal.dot(k_normal) < 0.0
                        || j_normal.dot(k_normal) < 0.0
                    {
                        continue;
                    }

                    // Rows are the plane normals.
                    let normals = Mat3::new(
                        i_normal.x, i_normal.y, i_normal.z, j_normal.x, j_normal.y, j_normal.z,
                        k_normal.x, k_normal.y, k_normal.z,
                    );
                    let d = normals.det();
                    if scalar::approx_equal(d, 0.0, f32::MAX_ABS_DIFF) {
                        continue;
                    }

                    result.push(PlaneTriple {
                        plane_indices: [i, j, k],
                        normals,
                        inv_determinant: 1.0 / d,
                    });
                }
            }
        }

        result
    };
}

fn plane_normal(index: usize) -> Vec3 {
    debug_assert!(index < NUM_PLANES);
    if index >= NUM_AXES {
        -AXES[index - NUM_AXES]
    } else {
        AXES[index]
    }
}

fn opposite_plane_index(index: usize) -> usize {
    debug_assert!(index < NUM_PLANES);
    if index >= NUM_AXES {
        index - NUM_AXES
    } else {
        index + NUM_AXES
    }
}

struct PlaneTriple {
    plane_indices: [usize; 3],
    normals: Mat3,
    inv_determinant: f32,
}

impl PlaneTriple {
    /// Solves for the point where the three planes meet, by Cramer's
    /// rule: the normal matrix with one column replaced by the plane
    /// distances yields each coordinate.
    fn intersection_point(&self, distances: &[f32; NUM_PLANES]) -> Vec3 {
        let [i, j, k] = self.plane_indices;
        let d = Vec3::new(distances[i], distances[j], distances[k]);

        let substitute_column = |col: usize| {
            let mut m = self.normals;
            match col {
                0 => {
                    m.m00 = d.x;
                    m.m10 = d.y;
                    m.m20 = d.z;
                }
                1 => {
                    m.m01 = d.x;
                    m.m11 = d.y;
                    m.m21 = d.z;
                }
                _ => {
                    m.m02 = d.x;
                    m.m12 = d.y;
                    m.m22 = d.z;
                }
            }
            m.det()
        };

        Vec3::new(
            substitute_column(0) * self.inv_determinant,
            substitute_column(1) * self.inv_determinant,
            substitute_column(2) * self.inv_determinant,
        )
    }
}

/// A 14-DOP, stored as the signed distance of each bounding plane from
/// the origin along its normal. A freshly created volume is empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dop {
    distances: [f32; NUM_PLANES],
}

impl Default for Dop {
    fn default() -> Self {
        Self::new()
    }
}

impl Dop {
    pub fn new() -> Self {
        Self {
            distances: [f32::MIN; NUM_PLANES],
        }
    }

    /// The bounding volume of the given points.
    pub fn compute<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        points
            .into_iter()
            .fold(Self::new(), |bounds, point| bounds.united_with_point(point))
    }

    /// Grows the volume so that it contains `point`.
    pub fn expand(&mut self, point: Vec3) {
        for (index, distance) in self.distances.iter_mut().enumerate() {
            *distance = distance.max(point.dot(plane_normal(index)));
        }
    }

    /// The smallest volume containing both operands.
    pub fn united_with(&self, rhs: &Self) -> Self {
        let mut result = *self;
        for (distance, rhs_distance) in result.distances.iter_mut().zip(&rhs.distances) {
            *distance = distance.max(*rhs_distance);
        }
        result
    }

    /// The volume grown to contain `point`.
    pub fn united_with_point(&self, point: Vec3) -> Self {
        let mut result = *self;
        result.expand(point);
        result
    }

    /// Whether `point` lies inside the volume (with a small slack past
    /// the bounding planes).
    pub fn contains(&self, point: Vec3) -> bool {
        self.distances
            .iter()
            .enumerate()
            .all(|(index, &distance)| {
                point.dot(plane_normal(index)) <= distance + CONTAINS_EPSILON
            })
    }

    /// Whether no point has been added yet.
    pub fn is_empty(&self) -> bool {
        self.distances.iter().any(|&d| d <= f32::MIN)
    }

    /// The midpoint along the three cardinal axes, or `None` for an
    /// empty volume.
    pub fn center(&self) -> Option<Vec3> {
        if self.is_empty() {
            return None;
        }
        let midpoint =
            |index: usize| (self.distances[index] - self.distances[opposite_plane_index(index)]) * 0.5;
        Some(Vec3::new(midpoint(0), midpoint(1), midpoint(2)))
    }

    /// The extent along the three cardinal axes; zero for an empty
    /// volume.
    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        let extent = |index: usize| self.distances[index] + self.distances[opposite_plane_index(index)];
        Vec3::new(extent(0), extent(1), extent(2))
    }

    /// The corner points of the volume: the intersection points of every
    /// non-opposing plane triple that lie on the volume's surface.
    pub fn points(&self) -> Vec<Vec3> {
        let mut result = Vec::with_capacity(PLANE_ADJACENCY.len());

        for triple in PLANE_ADJACENCY.iter() {
            let point = triple.intersection_point(&self.distances);
            if self.contains(point) {
                result.push(point);
            }
        }

        result
    }

    /// The bounding volume of this volume's corner points transformed by
    /// `transform` (with perspective divide).
    pub fn transformed(&self, transform: &Mat4) -> Self {
        Self::compute(self.points().into_iter().map(|point| {
            let transformed = transform.mul_vector3(point, 1.0);
            Vec3::from(transformed) / transformed.w
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transform::{self, translation_matrix};
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_4;

    fn unit_cube_corners() -> Vec<Vec3> {
        let mut corners = Vec::new();
        for x in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for z in [0.0, 1.0] {
                    corners.push(Vec3::new(x, y, z));
                }
            }
        }
        corners
    }

    #[test]
    fn a_new_volume_is_empty() {
        let dop = Dop::new();
        assert!(dop.is_empty());
        assert_eq!(dop.center(), None);
        assert_eq!(dop.size(), Vec3::ZERO);
        assert!(!dop.contains(Vec3::ZERO));
        assert!(dop.points().is_empty());
    }

    #[test]
    fn computing_from_a_cube_yields_its_center_and_size() {
        let dop = Dop::compute(unit_cube_corners());
        assert!(!dop.is_empty());
        assert_abs_diff_eq!(dop.center().unwrap(), Vec3::splat(0.5), epsilon = 1e-6);
        assert_abs_diff_eq!(dop.size(), Vec3::splat(1.0), epsilon = 1e-6);
    }

    #[test]
    fn contains_accepts_inner_points_and_rejects_outer_ones() {
        let dop = Dop::compute(unit_cube_corners());
        assert!(dop.contains(Vec3::splat(0.5)));
        assert!(dop.contains(Vec3::ZERO));
        assert!(dop.contains(Vec3::splat(1.0)));
        assert!(!dop.contains(Vec3::new(1.5, 0.5, 0.5)));
        assert!(!dop.contains(Vec3::new(0.5, -0.5, 0.5)));
        assert!(!dop.contains(Vec3::splat(2.0)));
    }

    #[test]
    fn a_single_point_volume_has_zero_size_and_contains_only_that_point() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let dop = Dop::compute([p]);
        assert!(!dop.is_empty());
        assert_abs_diff_eq!(dop.center().unwrap(), p, epsilon = 1e-5);
        assert_abs_diff_eq!(dop.size(), Vec3::ZERO, epsilon = 1e-5);
        assert!(dop.contains(p));
        assert!(!dop.contains(p + Vec3::splat(0.1)));
    }

    #[test]
    fn expanding_grows_the_volume_to_cover_the_new_point() {
        let mut dop = Dop::compute([Vec3::ZERO]);
        assert!(!dop.contains(Vec3::splat(1.0)));
        dop.expand(Vec3::splat(2.0));
        assert!(dop.contains(Vec3::splat(1.0)));
        assert!(dop.contains(Vec3::splat(2.0)));
    }

    #[test]
    fn union_of_two_volumes_equals_the_volume_of_all_points() {
        let a = [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
        let b = [Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -3.0)];

        let united = Dop::compute(a).united_with(&Dop::compute(b));
        let combined = Dop::compute(a.into_iter().chain(b));
        assert_eq!(united, combined);
    }

    #[test]
    fn uniting_with_an_empty_volume_is_a_no_op() {
        let dop = Dop::compute(unit_cube_corners());
        assert_eq!(dop.united_with(&Dop::new()), dop);
    }

    #[test]
    fn cube_corners_are_recovered_among_the_surface_points() {
        let dop = Dop::compute(unit_cube_corners());
        let points = dop.points();

        for corner in unit_cube_corners() {
            assert!(
                points
                    .iter()
                    .any(|p| p.approx_equal(corner, 1e-4)),
                "missing corner {corner:?}"
            );
        }
        for p in &points {
            assert!(dop.contains(*p), "surface point {p:?} not contained");
        }
    }

    #[test]
    fn translating_moves_the_center_and_keeps_the_size() {
        let dop = Dop::compute(unit_cube_corners());
        let moved = dop.transformed(&translation_matrix(Vec3::new(1.0, 2.0, 3.0)));

        assert_abs_diff_eq!(
            moved.center().unwrap(),
            Vec3::new(1.5, 2.5, 3.5),
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(moved.size(), dop.size(), epsilon = 1e-4);
    }

    #[test]
    fn rotating_a_cube_keeps_all_its_corners_bounded() {
        let rotation: Mat4 = transform::rotation_matrix_oz(FRAC_PI_4);
        let dop = Dop::compute(unit_cube_corners());
        let rotated = dop.transformed(&rotation);

        for corner in unit_cube_corners() {
            let p = rotation.mul_vector3(corner, 1.0);
            assert!(
                rotated.contains(Vec3::from(p) / p.w),
                "rotated corner {corner:?} escaped the bounds"
            );
        }
    }

    #[test]
    fn plane_adjacency_only_holds_non_opposing_well_conditioned_triples() {
        for triple in PLANE_ADJACENCY.iter() {
            let [i, j, k] = triple.plane_indices;
            assert!(plane_normal(i).dot(plane_normal(j)) >= 0.0);
            assert!(plane_normal(i).dot(plane_normal(k)) >= 0.0);
            assert!(plane_normal(j).dot(plane_normal(k)) >= 0.0);
            assert!(triple.inv_determinant.is_finite());
        }
    }

    #[test]
    fn plane_normals_are_unit_length() {
        for index in 0..NUM_PLANES {
            assert!(scalar::approx_equal(
                plane_normal(index).len_squared(),
                1.0,
                f32::MAX_ABS_DIFF
            ));
        }
    }
}
