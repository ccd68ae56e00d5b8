//! Matrix operations for color space transforms
//!
//! 3x3 matrices for RGB→XYZ primaries and chromatic adaptation, and their
//! 4x4 homogeneous lift as emitted in op lists. All operations use f64.

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Build from three column vectors
    pub const fn from_columns(c0: [f64; 3], c1: [f64; 3], c2: [f64; 3]) -> Self {
        Self {
            m: [
                [c0[0], c1[0], c2[0]],
                [c0[1], c1[1], c2[1]],
                [c0[2], c1[2], c2[2]],
            ],
        }
    }

    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns None if the matrix is singular (determinant ≈ 0)
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < 1e-14 {
            return None;
        }

        let inv_det = 1.0 / det;
        let m = &self.m;

        // Adjugate divided by determinant
        Some(Self {
            m: [
                [
                    (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                    (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
                ],
                [
                    (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                    (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                    (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
                ],
            ],
        })
    }
}

/// A 4x4 homogeneous matrix, row-major
///
/// The builder only produces affine matrices whose last row is `0 0 0 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix44 {
    pub m: [f64; 16],
}

impl Matrix44 {
    pub const IDENTITY: Self = Self::from_3x3(&Matrix3x3::identity());

    #[inline]
    pub const fn new(m: [f64; 16]) -> Self {
        Self { m }
    }

    /// Lift a 3x3 matrix, filling the fourth row and column with the identity
    pub const fn from_3x3(mat: &Matrix3x3) -> Self {
        let m = &mat.m;
        Self {
            m: [
                m[0][0], m[0][1], m[0][2], 0.0, //
                m[1][0], m[1][1], m[1][2], 0.0, //
                m[2][0], m[2][1], m[2][2], 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Upper-left 3x3 block
    pub fn linear_part(&self) -> Matrix3x3 {
        let m = &self.m;
        Matrix3x3::new([[m[0], m[1], m[2]], [m[4], m[5], m[6]], [m[8], m[9], m[10]]])
    }

    /// Returns M × v for a homogeneous 4-vector
    pub fn multiply_vec4(&self, v: [f64; 4]) -> [f64; 4] {
        let m = &self.m;
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = m[row * 4] * v[0]
                + m[row * 4 + 1] * v[1]
                + m[row * 4 + 2] * v[2]
                + m[row * 4 + 3] * v[3];
        }
        out
    }

    pub fn is_affine(&self) -> bool {
        self.m[12..16] == [0.0, 0.0, 0.0, 1.0]
    }

    /// Inverse of an affine matrix, None if singular or not affine
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_affine() {
            return None;
        }
        let inv = self.linear_part().inverse()?;
        let offset = inv.multiply_vec([self.m[3], self.m[7], self.m[11]]);
        let mut out = Self::from_3x3(&inv);
        out.m[3] = -offset[0];
        out.m[7] = -offset[1];
        out.m[11] = -offset[2];
        Some(out)
    }
}
