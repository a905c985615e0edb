//! Model shown when no file is given: a low-poly torus (32 vertices, 32 quads).

pub const TORUS_WRL: &str = r#"#VRML V2.0 utf8
DEF Torus1 Transform {
  children [
    Shape {
      geometry IndexedFaceSet {
        coord Coordinate {
          point [
            1.25 -0.0 0.0, 1.0 -0.25 0.0, 0.75 -0.0 0.0, 1.0 0.25 0.0,
            0.883883 -0.0 0.883883, 0.707107 -0.25 0.707107, 0.53033 -0.0 0.53033,
            0.707107 0.25 0.707107, 0.0 -0.0 1.25, 0.0 -0.25 1.0, 0.0 -0.0 0.75,
            0.0 0.25 1.0, -0.883883 -0.0 0.883883, -0.707107 -0.25 0.707107,
            -0.53033 -0.0 0.53033, -0.707107 0.25 0.707107, -1.25 -0.0 0.0,
            -1.0 -0.25 0.0, -0.75 -0.0 0.0, -1.0 0.25 0.0, -0.883883 -0.0 -0.883883,
            -0.707107 -0.25 -0.707107, -0.53033 -0.0 -0.53033, -0.707107 0.25 -0.707107,
            0.0 -0.0 -1.25, 0.0 -0.25 -1.0, 0.0 -0.0 -0.75, 0.0 0.25 -1.0,
            0.883883 -0.0 -0.883883, 0.707107 -0.25 -0.707107, 0.53033 -0.0 -0.53033,
            0.707107 0.25 -0.707107
          ]
        }
        coordIndex [
          0, 1, 29, 28, -1, 0, 3, 7, 4, -1, 0, 4, 5, 1, -1, 0, 28, 31, 3, -1,
          1, 2, 30, 29, -1, 1, 5, 6, 2, -1, 2, 3, 31, 30, -1, 2, 6, 7, 3, -1,
          4, 7, 11, 8, -1, 4, 8, 9, 5, -1, 5, 9, 10, 6, -1, 6, 10, 11, 7, -1,
          8, 11, 15, 12, -1, 8, 12, 13, 9, -1, 9, 13, 14, 10, -1, 10, 14, 15, 11, -1,
          12, 15, 19, 16, -1, 12, 16, 17, 13, -1, 13, 17, 18, 14, -1, 14, 18, 19, 15, -1,
          16, 19, 23, 20, -1, 16, 20, 21, 17, -1, 17, 21, 22, 18, -1, 18, 22, 23, 19, -1,
          20, 23, 27, 24, -1, 20, 24, 25, 21, -1, 21, 25, 26, 22, -1, 22, 26, 27, 23, -1,
          24, 27, 31, 28, -1, 24, 28, 29, 25, -1, 25, 29, 30, 26, -1, 26, 30, 31, 27, -1
        ]
      }
    }
  ]
}
"#;
