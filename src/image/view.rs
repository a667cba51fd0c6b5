/// Borrowed read-only view of interleaved B, G, R rows with a byte stride.
///
/// Shared freely among blur workers: every worker reads the untouched input
/// through the view while writing its own disjoint output rows.
#[derive(Clone, Copy, Debug)]
pub struct Bgr8View<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows, padding included.
    pub stride: usize,
    pub data: &'a [u8],
}

impl Bgr8View<'_> {
    /// Channel `c` (0 = B, 1 = G, 2 = R) of the pixel at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[y * self.stride + x * 3 + c]
    }

    /// The pixel bytes of row `y`, padding excluded.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * 3]
    }
}
