use crate::error::ValidationError;
use crate::format::parse_float_or_zero;
use crate::model::Point3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Point buffer behind the create/edit polygon editors. Points are appended and
/// removed at the end only; the buffer never shrinks below `min_points`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyEditor {
    points: Vec<Point3>,
    min_points: usize,
}

impl PolyEditor {
    /// `count` zero points.
    pub fn zeroed(count: usize, min_points: usize) -> Self {
        Self {
            points: vec![Point3::ZERO; count],
            min_points,
        }
    }

    /// Seed from an existing polyzone (a detached copy; the house record is untouched).
    pub fn from_points(points: &[Point3], min_points: usize) -> Self {
        Self {
            points: points.to_vec(),
            min_points,
        }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Point3] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn add_point(&mut self) {
        self.points.push(Point3::ZERO);
    }

    pub fn remove_point(&mut self) -> Result<(), ValidationError> {
        if self.points.len() <= self.min_points {
            return Err(ValidationError::TooFewPolyPoints {
                min: self.min_points,
            });
        }
        self.points.pop();
        Ok(())
    }

    pub fn axis(&self, index: usize, axis: Axis) -> Option<f64> {
        let p = self.points.get(index)?;
        Some(match axis {
            Axis::X => p.x,
            Axis::Y => p.y,
            Axis::Z => p.z,
        })
    }

    /// Per-axis text entry. Unparsable input stores 0; an out-of-range index is ignored.
    pub fn set_axis(&mut self, index: usize, axis: Axis, text: &str) {
        let Some(p) = self.points.get_mut(index) else {
            return;
        };
        let v = parse_float_or_zero(text);
        match axis {
            Axis::X => p.x = v,
            Axis::Y => p.y = v,
            Axis::Z => p.z = v,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.points.len() < self.min_points {
            return Err(ValidationError::TooFewPolyPoints {
                min: self.min_points,
            });
        }
        Ok(())
    }
}
