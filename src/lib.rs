pub mod board;
pub mod error;
pub mod packer;
pub mod render;
pub mod types;

pub use board::{Board, Shelf};
pub use error::LayoutError;
pub use packer::Packer;
pub use types::{DEFAULT_KERF, Layout, PieceRequest, PlacedPiece, Rect};

/// Computes a cutting layout for `requests` from `stock_length` x
/// `stock_width` boards, reserving `kerf` between adjacent cuts.
pub fn optimize(
    stock_length: f64,
    stock_width: f64,
    requests: &[PieceRequest],
    kerf: f64,
) -> Result<Layout, LayoutError> {
    Packer::new(
        Rect::new(stock_length, stock_width),
        kerf,
        requests.to_vec(),
    )
    .pack()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_entry_point() {
        let layout = optimize(
            96.0,
            48.0,
            &[PieceRequest::new(24.0, 12.0, 8)],
            DEFAULT_KERF,
        )
        .unwrap();
        assert_eq!(layout.board_count(), 1);
        assert_eq!(layout.pieces().count(), 8);
    }
}
