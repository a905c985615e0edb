//! Loaded model geometry.
//!
//! A [`Model`] is the vertex and face buffers produced by one successful
//! parse. It is never edited in place: loading a new file builds a fresh
//! `Model` that replaces the old one wholesale.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LoadError, ParseError};
use crate::math::vec3::Vec3;
use crate::parser;

/// A triangle given as three indices into the vertex buffer.
///
/// Indices are not validated when parsed and may point past the end of the
/// buffer (or be negative); consumers must check them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Face {
    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [i32; 3] {
        [self.a, self.b, self.c]
    }
}

/// Vertex and face buffers of a parsed `.wrl` file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Model {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Parse model text, scaling every coordinate by `scale`.
    pub fn load(text: &str, scale: f32) -> Result<Self, ParseError> {
        let (vertices, faces) = parser::parse(text, scale)?;
        Ok(Self::new(vertices, faces))
    }

    /// Read and parse a model file.
    ///
    /// A missing file is reported as [`LoadError::NotFound`] so callers can
    /// tell "nothing to load" apart from a corrupt file.
    pub fn from_file<P: AsRef<Path>>(path: P, scale: f32) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(e),
        })?;
        Ok(Self::load(&text, scale)?)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }
}
