// Flow-field lattice and arrow geometry.
//
// A `FieldGrid` describes a lattice of flow vectors covering a rectangle
// centered on the origin, and builds the parameter blocks the shader stages
// consume. Arrow expansion turns a sampled vector into the body quad and
// arrowhead triangle of a `RenderableVector`. Animating the vector values
// over time is the consumer's job; this module only prepares the contexts.

use glam::Vec2;
use thiserror::Error;

use crate::shader::{
    CartesianVector, ExpandContext, ParametricVector, RenderableVector, VectorAnimateContext,
    VectorSetupContext,
};
use crate::time::TimeSlice;

/// Errors produced when describing a field lattice.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("field lattice needs at least one column and one row, got {columns}x{rows}")]
    EmptyLattice { columns: u32, rows: u32 },
    #[error("field area must be positive, got {width}x{height}")]
    EmptyArea { width: f32, height: f32 },
}

/// A `columns x rows` lattice of flow vectors covering `size` units,
/// centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGrid {
    columns: u32,
    rows: u32,
    size: Vec2,
}

impl FieldGrid {
    pub fn new(columns: u32, rows: u32, size: Vec2) -> Result<Self, FieldError> {
        check_dimensions(columns, rows, size)?;
        Ok(Self {
            columns,
            rows,
            size,
        })
    }

    /// Swap in a new lattice shape. The grid is left unchanged on failure.
    pub fn resize(&mut self, columns: u32, rows: u32, size: Vec2) -> Result<(), FieldError> {
        check_dimensions(columns, rows, size)?;
        self.columns = columns;
        self.rows = rows;
        self.size = size;
        log::trace!("field grid resized to {}x{} over {:?}", columns, rows, size);
        Ok(())
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Total number of vectors in the lattice.
    pub fn count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Extent of one lattice cell.
    pub fn step(&self) -> Vec2 {
        self.size / Vec2::new(self.columns as f32, self.rows as f32)
    }

    /// The bottom-left corner of the covered rectangle.
    pub fn corner(&self) -> Vec2 {
        -self.size / 2.0
    }

    /// Arrowhead size: half the smaller cell extent, so neighboring arrows
    /// never overlap.
    pub fn magnitude(&self) -> f32 {
        0.5 * self.step().min_element()
    }

    pub fn setup_context(&self) -> VectorSetupContext {
        VectorSetupContext {
            step: self.step().into(),
            corner: self.corner().into(),
            columns: self.columns,
            rows: self.rows,
        }
    }

    pub fn animate_context(&self, slice: TimeSlice) -> VectorAnimateContext {
        VectorAnimateContext {
            step: self.step().into(),
            size: self.size.into(),
            columns: self.columns,
            rows: self.rows,
            time: slice.elapsed,
            delta_time: slice.delta,
        }
    }

    /// Stroke parameters for the current zoom level.
    pub fn expand_context(&self, zoom: f32) -> ExpandContext {
        ExpandContext {
            thickness: zoom.clamp(2.0, 5.0),
            magnitude: self.magnitude(),
        }
    }

    /// Anchor points of every vector, one per cell center, row-major.
    pub fn tails(&self) -> impl Iterator<Item = Vec2> + '_ {
        let corner = self.corner();
        let step = self.step();
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| {
                corner + step * Vec2::new(column as f32 + 0.5, row as f32 + 0.5)
            })
        })
    }

    /// Evaluate `field` at every anchor point, producing one segment per
    /// cell in row-major order.
    pub fn sample<F>(&self, field: F) -> Vec<CartesianVector>
    where
        F: Fn(Vec2) -> Vec2,
    {
        self.tails()
            .map(|tail| CartesianVector::new(tail, tail + field(tail)))
            .collect()
    }

    /// Expand a frame's worth of sampled vectors into arrow geometry.
    pub fn renderables(&self, vectors: &[CartesianVector], zoom: f32) -> Vec<RenderableVector> {
        let context = self.expand_context(zoom);
        vectors.iter().map(|v| v.expand(&context)).collect()
    }
}

fn check_dimensions(columns: u32, rows: u32, size: Vec2) -> Result<(), FieldError> {
    if columns == 0 || rows == 0 {
        return Err(FieldError::EmptyLattice { columns, rows });
    }
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(FieldError::EmptyArea {
            width: size.x,
            height: size.y,
        });
    }
    Ok(())
}

impl ParametricVector {
    pub fn new(tail: Vec2, angle: f32, mag: f32) -> Self {
        Self {
            tail: tail.into(),
            angle,
            mag,
        }
    }

    /// Convert the polar form into a tail/tip segment.
    pub fn to_cartesian(&self) -> CartesianVector {
        let tail = Vec2::from(self.tail);
        CartesianVector::new(tail, tail + self.mag * Vec2::from_angle(self.angle))
    }
}

impl CartesianVector {
    pub fn new(tail: Vec2, tip: Vec2) -> Self {
        Self {
            tail: tail.into(),
            tip: tip.into(),
        }
    }

    pub fn magnitude(&self) -> f32 {
        (Vec2::from(self.tip) - Vec2::from(self.tail)).length()
    }

    /// Expand the segment into arrow geometry.
    ///
    /// The body quad runs from the tail to the arrowhead base at the
    /// requested stroke thickness; the arrowhead is an isosceles triangle of
    /// width and length `context.magnitude` ending at the tip. Corners are
    /// emitted in triangle-strip order. A zero-length segment collapses to a
    /// zero-area arrow; it is not an error.
    pub fn expand(&self, context: &ExpandContext) -> RenderableVector {
        let tail = Vec2::from(self.tail);
        let tip = Vec2::from(self.tip);
        let direction = (tip - tail).normalize_or_zero();
        let side = direction.perp();

        let half_body = side * (0.5 * context.thickness);
        let half_head = side * (0.5 * context.magnitude);
        let base = tip - direction * context.magnitude;

        RenderableVector {
            bottom_left: (tail - half_body).into(),
            bottom_right: (tail + half_body).into(),
            top_left: (base - half_body).into(),
            top_right: (base + half_body).into(),
            tri_left: (base - half_head).into(),
            tri_right: (base + half_head).into(),
            tri_top: tip.into(),
            mag: (tip - tail).length(),
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_empty_lattice() {
        let result = FieldGrid::new(0, 4, Vec2::new(100.0, 100.0));
        assert_eq!(
            result.unwrap_err(),
            FieldError::EmptyLattice {
                columns: 0,
                rows: 4
            }
        );
    }

    #[test]
    fn rejects_empty_area() {
        let result = FieldGrid::new(4, 4, Vec2::new(100.0, -50.0));
        assert_eq!(
            result.unwrap_err(),
            FieldError::EmptyArea {
                width: 100.0,
                height: -50.0
            }
        );
    }

    #[test]
    fn step_corner_and_count() {
        let grid = FieldGrid::new(32, 18, Vec2::new(640.0, 360.0)).unwrap();
        assert_eq!(grid.step(), Vec2::new(20.0, 20.0));
        assert_eq!(grid.corner(), Vec2::new(-320.0, -180.0));
        assert_eq!(grid.count(), 576);
        assert_relative_eq!(grid.magnitude(), 10.0);
    }

    #[test]
    fn failed_resize_keeps_grid() {
        let mut grid = FieldGrid::new(8, 8, Vec2::new(80.0, 80.0)).unwrap();
        assert!(grid.resize(0, 8, Vec2::new(80.0, 80.0)).is_err());
        assert_eq!(grid.columns(), 8);
        assert_eq!(grid.size(), Vec2::new(80.0, 80.0));

        grid.resize(4, 2, Vec2::new(40.0, 20.0)).unwrap();
        assert_eq!(grid.count(), 8);
        assert_eq!(grid.step(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn tails_sit_on_cell_centers() {
        let grid = FieldGrid::new(2, 2, Vec2::new(4.0, 4.0)).unwrap();
        let tails: Vec<Vec2> = grid.tails().collect();
        assert_eq!(
            tails,
            vec![
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(-1.0, 1.0),
                Vec2::new(1.0, 1.0),
            ]
        );
    }

    #[test]
    fn setup_context_mirrors_grid() {
        let grid = FieldGrid::new(10, 5, Vec2::new(100.0, 50.0)).unwrap();
        let context = grid.setup_context();
        assert_eq!(context.step, [10.0, 10.0]);
        assert_eq!(context.corner, [-50.0, -25.0]);
        assert_eq!(context.columns, 10);
        assert_eq!(context.rows, 5);
    }

    #[test]
    fn animate_context_carries_time_slice() {
        let grid = FieldGrid::new(10, 5, Vec2::new(100.0, 50.0)).unwrap();
        let context = grid.animate_context(TimeSlice {
            elapsed: 2.5,
            delta: 0.016,
        });
        assert_eq!(context.size, [100.0, 50.0]);
        assert_relative_eq!(context.time, 2.5);
        assert_relative_eq!(context.delta_time, 0.016);
    }

    #[test]
    fn thickness_follows_zoom_within_limits() {
        let grid = FieldGrid::new(10, 10, Vec2::new(100.0, 100.0)).unwrap();
        assert_relative_eq!(grid.expand_context(0.5).thickness, 2.0);
        assert_relative_eq!(grid.expand_context(3.0).thickness, 3.0);
        assert_relative_eq!(grid.expand_context(12.0).thickness, 5.0);
    }

    #[test]
    fn parametric_converts_to_cartesian() {
        let along_x = ParametricVector::new(Vec2::new(1.0, 1.0), 0.0, 2.0).to_cartesian();
        assert_relative_eq!(along_x.tip[0], 3.0);
        assert_relative_eq!(along_x.tip[1], 1.0);

        let up = ParametricVector::new(Vec2::ZERO, std::f32::consts::FRAC_PI_2, 1.0).to_cartesian();
        assert_relative_eq!(up.tip[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(up.tip[1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn expand_builds_arrow_geometry() {
        let vector = CartesianVector::new(Vec2::ZERO, Vec2::new(10.0, 0.0));
        let arrow = vector.expand(&ExpandContext {
            thickness: 2.0,
            magnitude: 4.0,
        });

        assert_eq!(arrow.bottom_left, [0.0, -1.0]);
        assert_eq!(arrow.bottom_right, [0.0, 1.0]);
        assert_eq!(arrow.top_left, [6.0, -1.0]);
        assert_eq!(arrow.top_right, [6.0, 1.0]);
        assert_eq!(arrow.tri_left, [6.0, -2.0]);
        assert_eq!(arrow.tri_right, [6.0, 2.0]);
        assert_eq!(arrow.tri_top, [10.0, 0.0]);
        assert_relative_eq!(arrow.mag, 10.0);
        assert_relative_eq!(vector.magnitude(), arrow.mag);
    }

    #[test]
    fn zero_length_vector_collapses() {
        let vector = CartesianVector::new(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0));
        let arrow = vector.expand(&ExpandContext {
            thickness: 2.0,
            magnitude: 4.0,
        });

        assert_eq!(arrow.bottom_left, [3.0, 3.0]);
        assert_eq!(arrow.tri_top, [3.0, 3.0]);
        assert_relative_eq!(arrow.mag, 0.0);
    }

    #[test]
    fn sample_fills_the_lattice() {
        let grid = FieldGrid::new(3, 2, Vec2::new(6.0, 4.0)).unwrap();
        let vectors = grid.sample(|p| Vec2::new(-p.y, p.x));
        assert_eq!(vectors.len(), grid.count());

        for (tail, vector) in grid.tails().zip(&vectors) {
            assert_eq!(vector.tail, <[f32; 2]>::from(tail));
            let expected = tail + Vec2::new(-tail.y, tail.x);
            assert_relative_eq!(vector.tip[0], expected.x);
            assert_relative_eq!(vector.tip[1], expected.y);
        }
    }
}
