//! Triangle meshes for GPU hosts.
//!
//! Hosts that render with a GPU pipeline instead of a canvas can tessellate
//! the stadium once per layout and draw it three times, applying each step's
//! clip rectangle as a scissor rect.

use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, StrokeOptions, StrokeTessellator,
    StrokeVertex, VertexBuffers,
};

use crate::{error::Result, shape::StadiumPath};

/// Default flattening tolerance, in pixels.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Indexed triangle list in pixel coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StadiumMesh {
    /// Vertex positions.
    pub vertices: Vec<[f32; 2]>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

impl StadiumMesh {
    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl From<VertexBuffers<[f32; 2], u32>> for StadiumMesh {
    fn from(buffers: VertexBuffers<[f32; 2], u32>) -> Self {
        Self {
            vertices: buffers.vertices,
            indices: buffers.indices,
        }
    }
}

/// Tessellates the interior of `path`.
pub fn tessellate_fill(path: &StadiumPath, tolerance: f32) -> Result<StadiumMesh> {
    let lyon_path = path.to_lyon_path();
    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    FillTessellator::new().tessellate_path(
        &lyon_path,
        &FillOptions::tolerance(tolerance),
        &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
            vertex.position().to_array()
        }),
    )?;
    Ok(buffers.into())
}

/// Tessellates a stroke of `line_width` centered on `path`.
pub fn tessellate_stroke(
    path: &StadiumPath,
    line_width: f32,
    tolerance: f32,
) -> Result<StadiumMesh> {
    let lyon_path = path.to_lyon_path();
    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    StrokeTessellator::new().tessellate_path(
        &lyon_path,
        &StrokeOptions::tolerance(tolerance).with_line_width(line_width),
        &mut BuffersBuilder::new(&mut buffers, |vertex: StrokeVertex| {
            vertex.position().to_array()
        }),
    )?;
    Ok(buffers.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Orientation, geometry::RectF, shape::compose_rounded_rect};

    #[test]
    fn fill_mesh_stays_inside_the_bounds() {
        let rect = RectF::new(0.0, 0.0, 120.0, 30.0);
        let path = compose_rounded_rect(rect, Orientation::Horizontal);
        let mesh = tessellate_fill(&path, DEFAULT_TOLERANCE).unwrap();

        assert!(mesh.triangle_count() > 0);
        for [x, y] in &mesh.vertices {
            assert!(*x >= -0.01 && *x <= 120.01);
            assert!(*y >= -0.01 && *y <= 30.01);
        }
    }

    #[test]
    fn stroke_mesh_extends_by_half_the_line_width() {
        let rect = RectF::new(10.0, 10.0, 30.0, 110.0);
        let path = compose_rounded_rect(rect, Orientation::Vertical);
        let mesh = tessellate_stroke(&path, 4.0, DEFAULT_TOLERANCE).unwrap();

        let min_x = mesh
            .vertices
            .iter()
            .map(|[x, _]| *x)
            .fold(f32::MAX, f32::min);
        assert!(mesh.triangle_count() > 0);
        assert!((min_x - 8.0).abs() < 0.1);
    }
}
