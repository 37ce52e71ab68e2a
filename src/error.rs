use thiserror::Error;

use crate::types::Rect;

/// Input-validation failures. None of these are transient: the same input
/// always fails the same way, so callers should surface the message and let
/// the user correct the job rather than retry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// The cut list is empty.
    #[error("no pieces to place")]
    EmptyInput,

    /// A stock dimension, piece dimension, quantity, or the kerf is zero,
    /// negative, or not a finite number.
    #[error("{name} must be a positive number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    /// The named piece fits the stock in neither orientation, even on an
    /// empty board. The whole run is abandoned: a layout that silently
    /// dropped a requested piece would misrepresent the job.
    #[error("piece {piece} does not fit in stock {stock} in any orientation")]
    PieceTooLarge { piece: Rect, stock: Rect },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(LayoutError::EmptyInput.to_string(), "no pieces to place");
        assert_eq!(
            LayoutError::InvalidDimension {
                name: "stock length",
                value: -4.0
            }
            .to_string(),
            "stock length must be a positive number, got -4"
        );
        assert_eq!(
            LayoutError::PieceTooLarge {
                piece: Rect::new(12.0, 5.0),
                stock: Rect::new(10.0, 10.0)
            }
            .to_string(),
            "piece 12x5 does not fit in stock 10x10 in any orientation"
        );
    }
}
