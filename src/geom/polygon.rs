use crate::error::InvalidArgument;
use crate::geom::EPS;
use crate::vecutils::{flip, roll};
use anyhow::Result;
use ndarray as nd;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polygon vertex in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_close(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }
}

/// Horizontal cross-section of a prism.
///
/// Vertices are walked as consecutive pairs and the ring is never wrapped
/// implicitly. A closed polygon repeats its first vertex at the end
/// (see [`Polygon::closed`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vertex>", into = "Vec<Vertex>")]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl TryFrom<Vec<Vertex>> for Polygon {
    type Error = anyhow::Error;

    fn try_from(vertices: Vec<Vertex>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Vertex> {
    fn from(poly: Polygon) -> Self {
        poly.vertices
    }
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Result<Self> {
        anyhow::ensure!(
            vertices.len() >= 2,
            InvalidArgument(format!(
                "Polygon needs at least 2 vertices, got {}",
                vertices.len()
            ))
        );
        Ok(Self { vertices })
    }

    /// Builds a polygon from a 2×k array (row 0: x, row 1: y).
    pub fn from_array(arr: nd::ArrayView2<f64>) -> Result<Self> {
        anyhow::ensure!(
            arr.nrows() == 2,
            InvalidArgument(format!(
                "Number of lines in polygon ({}) not equal to 2",
                arr.nrows()
            ))
        );
        let vertices = arr
            .columns()
            .into_iter()
            .map(|c| Vertex::new(c[0], c[1]))
            .collect();
        Self::new(vertices)
    }

    /// Returns a 2×k array with one column per vertex.
    pub fn to_array(&self) -> nd::Array2<f64> {
        let mut arr = nd::Array2::from_elem((2, self.vertices.len()), 0.);
        for (i, v) in self.vertices.iter().enumerate() {
            arr[[0, i]] = v.x;
            arr[[1, i]] = v.y;
        }
        arr
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Consecutive vertex pairs `(v[i], v[i + 1])` for `i` in `0..n - 1`.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// True if the last vertex repeats the first one.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => self.vertices.len() > 2 && first.is_close(last),
            _ => false,
        }
    }

    /// Returns a copy with the first vertex appended if the ring is open.
    pub fn closed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        if !self.is_closed() {
            vertices.push(vertices[0]);
        }
        Self { vertices }
    }

    /// Reverses the vertex order (flips the orientation).
    pub fn flip(&self) -> Self {
        Self {
            vertices: flip(&self.vertices),
        }
    }

    /// Moves the starting vertex of the ring forward by `k`.
    ///
    /// The result is always closed.
    pub fn roll(&self, k: usize) -> Self {
        let mut ring = self.closed().vertices;
        ring.pop();
        let n = ring.len();
        roll(&mut ring, k % n);
        ring.push(ring[0]);
        Self { vertices: ring }
    }

    /// Signed area of the closed ring (shoelace formula).
    ///
    /// Positive for counter-clockwise order in the (x, y) plane.
    pub fn area(&self) -> f64 {
        let ring = self.closed();
        0.5 * ring
            .edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
    }

    /// Area centroid of the closed ring.
    ///
    /// Falls back to the vertex mean for degenerate (zero-area) rings.
    pub fn centroid(&self) -> Vertex {
        let ring = self.closed();
        let area = self.area();
        if area.abs() < EPS {
            let n = (ring.num_vertices() - 1) as f64;
            let (sx, sy) = ring.vertices[..ring.num_vertices() - 1]
                .iter()
                .fold((0., 0.), |(sx, sy), v| (sx + v.x, sy + v.y));
            return Vertex::new(sx / n, sy / n);
        }
        let (cx, cy) = ring.edges().fold((0., 0.), |(cx, cy), (a, b)| {
            let cross = a.x * b.y - b.x * a.y;
            (cx + (a.x + b.x) * cross, cy + (a.y + b.y) * cross)
        });
        Vertex::new(cx / (6. * area), cy / (6. * area))
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2);
        write!(f, "Polygon(")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:.prec$}, {:.prec$})", v.x, v.y, prec = prec)?;
        }
        write!(f, ")")
    }
}
