use crate::board::Board;
use crate::error::LayoutError;
use crate::types::{Layout, PieceRequest, Rect};

/// First-fit-decreasing shelf packer. Expands the cut list into individual
/// pieces, sorts them largest-area first, and feeds each one through a fixed
/// placement priority that always prefers reusing opened material over
/// opening more: existing shelves, then new shelves on existing boards, then
/// a fresh board, trying the unrotated orientation before the rotated one at
/// every stage. This minimizes board count at the cost of occasionally
/// looser per-shelf packing.
pub struct Packer {
    stock: Rect,
    kerf: f64,
    requests: Vec<PieceRequest>,
}

impl Packer {
    pub fn new(stock: Rect, kerf: f64, requests: Vec<PieceRequest>) -> Self {
        Self {
            stock,
            kerf,
            requests,
        }
    }

    /// Runs the full placement and returns the finalized layout. Any
    /// validation or placement failure abandons the run: no partial layout
    /// is ever returned.
    pub fn pack(&self) -> Result<Layout, LayoutError> {
        self.validate()?;

        let mut boards: Vec<Board> = Vec::new();
        for piece in self.expand_requests() {
            self.place(&mut boards, piece)?;
        }

        let total_waste = boards.iter_mut().map(Board::finalize).sum();
        Ok(Layout {
            stock: self.stock,
            boards,
            total_waste,
        })
    }

    fn validate(&self) -> Result<(), LayoutError> {
        check_positive("stock length", self.stock.length)?;
        check_positive("stock width", self.stock.width)?;
        check_positive("kerf", self.kerf)?;
        if self.requests.is_empty() {
            return Err(LayoutError::EmptyInput);
        }
        for request in &self.requests {
            check_positive("piece length", request.length)?;
            check_positive("piece width", request.width)?;
            if request.quantity == 0 {
                return Err(LayoutError::InvalidDimension {
                    name: "piece quantity",
                    value: 0.0,
                });
            }
        }
        Ok(())
    }

    /// Expands quantities into individual pieces, sorted by area descending.
    /// The sort is stable, so equal-area pieces keep their request order and
    /// identical inputs always produce identical layouts.
    fn expand_requests(&self) -> Vec<Rect> {
        let mut pieces = Vec::new();
        for request in &self.requests {
            for _ in 0..request.quantity {
                pieces.push(request.rect());
            }
        }
        pieces.sort_by(|a, b| b.area().total_cmp(&a.area()));
        pieces
    }

    /// Places one piece at the first opportunity in the priority order.
    /// Each stage scans boards in creation order and tries the unrotated
    /// orientation on every candidate before retrying rotated.
    fn place(&self, boards: &mut Vec<Board>, piece: Rect) -> Result<(), LayoutError> {
        for rotated in [false, true] {
            let oriented = if rotated { piece.rotated() } else { piece };
            for board in boards.iter_mut() {
                if board.place_on_shelf(oriented, rotated) {
                    return Ok(());
                }
            }
        }

        for rotated in [false, true] {
            let oriented = if rotated { piece.rotated() } else { piece };
            for board in boards.iter_mut() {
                if board.open_shelf(oriented, rotated) {
                    return Ok(());
                }
            }
        }

        for rotated in [false, true] {
            let oriented = if rotated { piece.rotated() } else { piece };
            let mut board = Board::new(self.stock, self.kerf);
            if board.open_shelf(oriented, rotated) {
                boards.push(board);
                return Ok(());
            }
        }

        Err(LayoutError::PieceTooLarge {
            piece,
            stock: self.stock,
        })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension { name, value })
    }
}
