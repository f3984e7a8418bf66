//! Main-axis placement of already sized children

/// Trait implemented by arrangement strategies that distribute children on an axis.
pub trait Arrangement {
    /// Writes the leading offset of every child and returns the occupied extent.
    fn arrange(&self, sizes: &[i32], out_positions: &mut [i32]) -> i32;
}

/// Packs children from the leading edge with a fixed gap between neighbours.
///
/// Used for both chips inside a row and rows inside the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpacedBy(pub i32);

impl SpacedBy {
    pub fn gap(&self) -> i32 {
        self.0.max(0)
    }
}

impl Arrangement for SpacedBy {
    fn arrange(&self, sizes: &[i32], out_positions: &mut [i32]) -> i32 {
        debug_assert_eq!(sizes.len(), out_positions.len());
        let gap = self.gap();
        let mut cursor = 0i32;
        for (index, (size, position)) in sizes.iter().zip(out_positions.iter_mut()).enumerate() {
            if index > 0 {
                cursor = cursor.saturating_add(gap);
            }
            *position = cursor;
            cursor = cursor.saturating_add(*size);
        }
        cursor
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
