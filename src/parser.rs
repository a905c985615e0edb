//! VRML geometry extraction.
//!
//! Only two constructs of a `.wrl` file matter to the viewer:
//!
//! ```text
//! coord Coordinate { point [ x y z, x y z, ... ] }   # VRML 2.0
//! Coordinate3 { point [ x y z, x y z, ... ] }        # VRML 1.0 fallback
//! coordIndex [ a, b, c, -1, a, b, c, d, -1, ... ]     # both versions
//! ```
//!
//! Everything else in the file is ignored. Only the first block of each kind
//! is read.
//!
//! # Coordinate convention
//!
//! VRML is Y-up while the framebuffer is Y-down, so every vertex is emitted as
//! `(x * scale, -y * scale, z * scale)`. The flip is fixed.

use std::num::IntErrorKind;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;
use crate::math::vec3::Vec3;
use crate::model::Face;

/// Marks the end of one polygon in a `coordIndex` list.
pub const FACE_SENTINEL: i32 = -1;

const POINT_V2: &str = r"(?s)coord\s+Coordinate\s*\{\s*point\s*\[(.*?)\]";
const POINT_V1: &str = r"(?s)Coordinate3\s*\{\s*point\s*\[(.*?)\]";
const COORD_INDEX: &str = r"(?s)coordIndex\s*\[(.*?)\]";
const FLOAT_LITERAL: &str = r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?";
const INT_LITERAL: &str = r"-?\d+";

struct Patterns {
    point_v2: Regex,
    point_v1: Regex,
    coord_index: Regex,
    float: Regex,
    int: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    // The patterns are compile-time constants; a failure here is a typo in this file.
    PATTERNS.get_or_init(|| Patterns {
        point_v2: Regex::new(POINT_V2).expect("valid V2 point pattern"),
        point_v1: Regex::new(POINT_V1).expect("valid V1 point pattern"),
        coord_index: Regex::new(COORD_INDEX).expect("valid coordIndex pattern"),
        float: Regex::new(FLOAT_LITERAL).expect("valid float pattern"),
        int: Regex::new(INT_LITERAL).expect("valid int pattern"),
    })
}

/// Parses model text into vertex and face buffers.
///
/// Missing blocks yield empty buffers. A literal that cannot be converted, or
/// a coordinate list whose length is not a multiple of three, is an error.
pub fn parse(text: &str, scale: f32) -> Result<(Vec<Vec3>, Vec<Face>), ParseError> {
    let vertices = parse_vertices(text, scale)?;
    let faces = parse_faces(text)?;
    Ok((vertices, faces))
}

/// Returns the body of the point list, preferring the VRML 2.0 shape.
fn point_block(text: &str) -> Option<&str> {
    let p = patterns();
    p.point_v2
        .captures(text)
        .or_else(|| p.point_v1.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn index_block(text: &str) -> Option<&str> {
    patterns()
        .coord_index
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn parse_vertices(text: &str, scale: f32) -> Result<Vec<Vec3>, ParseError> {
    let Some(block) = point_block(text) else {
        return Ok(Vec::new());
    };

    let values = patterns()
        .float
        .find_iter(block)
        .map(|m| {
            m.as_str()
                .parse::<f32>()
                .map_err(|e| ParseError::MalformedNumber {
                    literal: m.as_str().to_string(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<f32>, _>>()?;

    if values.len() % 3 != 0 {
        return Err(ParseError::IncompleteVertex {
            count: values.len(),
        });
    }

    Ok(values
        .chunks_exact(3)
        .map(|xyz| Vec3::new(xyz[0] * scale, -xyz[1] * scale, xyz[2] * scale))
        .collect())
}

fn parse_faces(text: &str) -> Result<Vec<Face>, ParseError> {
    let Some(block) = index_block(text) else {
        return Ok(Vec::new());
    };

    let indices = patterns()
        .int
        .find_iter(block)
        .map(|m| parse_index(m.as_str()))
        .collect::<Result<Vec<i32>, _>>()?;

    Ok(triangulate_runs(&indices))
}

/// Parses one index literal.
///
/// Values beyond `i32` saturate instead of failing: they can never address a
/// vertex, so the face survives parsing and is dropped when shaded. Neither
/// bound equals [`FACE_SENTINEL`].
fn parse_index(literal: &str) -> Result<i32, ParseError> {
    literal.parse::<i32>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i32::MAX),
        IntErrorKind::NegOverflow => Ok(i32::MIN),
        _ => Err(ParseError::MalformedNumber {
            literal: literal.to_string(),
            reason: e.to_string(),
        }),
    })
}

/// Splits an index stream on the sentinel and fan-triangulates each run.
///
/// Triangles pass through, quads become `(a,b,c)` and `(a,c,d)`, every other
/// run length is dropped. A trailing run with no sentinel is dropped too.
pub fn triangulate_runs(indices: &[i32]) -> Vec<Face> {
    let mut faces = Vec::new();
    let mut run: Vec<i32> = Vec::with_capacity(4);

    for &index in indices {
        if index != FACE_SENTINEL {
            run.push(index);
            continue;
        }

        match run.as_slice() {
            &[a, b, c] => faces.push(Face::new(a, b, c)),
            &[a, b, c, d] => {
                faces.push(Face::new(a, b, c));
                faces.push(Face::new(a, c, d));
            }
            other => log::trace!("dropping {}-index polygon", other.len()),
        }
        run.clear();
    }

    faces
}
