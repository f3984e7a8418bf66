//! Layout failures

use crate::constraints::Constraints;

/// The only way a flow layout can fail: there is no finite row width to pack into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    InvalidConstraint { max_width: i32 },
}

impl LayoutError {
    pub(crate) fn check_max_width(max_width: i32) -> Result<(), LayoutError> {
        if max_width <= 0 || max_width == Constraints::INFINITY {
            return Err(LayoutError::InvalidConstraint { max_width });
        }
        Ok(())
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidConstraint { max_width } if *max_width == Constraints::INFINITY => {
                write!(
                    f,
                    "flow layout needs a bounded max width; resolve fill-available-width first"
                )
            }
            LayoutError::InvalidConstraint { max_width } => {
                write!(f, "flow layout max width must be positive, got {max_width}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
