use serde::Serialize;

use crate::types::{PlacedPiece, Rect};

/// One horizontal strip of a board. All pieces on a shelf share its height
/// budget and sit left to right, each followed by one kerf allowance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shelf {
    /// Height of the strip, fixed when the shelf is opened.
    pub height: f64,
    /// Vertical offset of the strip within its board.
    pub y: f64,
    pub remaining_length: f64,
    pub pieces: Vec<PlacedPiece>,
}

impl Shelf {
    fn new(y: f64, height: f64, stock_length: f64) -> Self {
        Self {
            height,
            y,
            remaining_length: stock_length,
            pieces: Vec::new(),
        }
    }

    /// Fit test for an oriented piece. Kerf is charged along the cut axis
    /// (the shelf length) only, never against the strip height.
    pub fn accepts(&self, piece: Rect, kerf: f64) -> bool {
        piece.length + kerf <= self.remaining_length && piece.width <= self.height
    }

    fn place(&mut self, piece: Rect, rotated: bool, kerf: f64, stock_length: f64) {
        let x = stock_length - self.remaining_length;
        self.pieces.push(PlacedPiece {
            rect: piece,
            x,
            y: self.y,
            rotated,
        });
        self.remaining_length -= piece.length + kerf;
    }

    /// Length consumed by pieces and their kerf allowances.
    pub fn occupied_length(&self, stock_length: f64) -> f64 {
        stock_length - self.remaining_length
    }
}

/// One stock rectangle, subdivided top-down into shelves. `used_height`
/// includes the kerf allowance below each shelf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    #[serde(skip)]
    stock: Rect,
    #[serde(skip)]
    kerf: f64,
    pub used_height: f64,
    pub shelves: Vec<Shelf>,
    pub waste: f64,
}

impl Board {
    pub fn new(stock: Rect, kerf: f64) -> Self {
        Self {
            stock,
            kerf,
            used_height: 0.0,
            shelves: Vec::new(),
            waste: 0.0,
        }
    }

    /// Appends the oriented piece to the first existing shelf with room.
    pub fn place_on_shelf(&mut self, piece: Rect, rotated: bool) -> bool {
        for shelf in &mut self.shelves {
            if shelf.accepts(piece, self.kerf) {
                shelf.place(piece, rotated, self.kerf, self.stock.length);
                return true;
            }
        }
        false
    }

    /// Opens a new shelf below the existing ones for the oriented piece.
    /// Both stock bounds are checked with their kerf allowance before
    /// anything is committed, so `remaining_length` never goes negative.
    pub fn open_shelf(&mut self, piece: Rect, rotated: bool) -> bool {
        if self.used_height + piece.width + self.kerf > self.stock.width
            || piece.length + self.kerf > self.stock.length
        {
            return false;
        }
        let mut shelf = Shelf::new(self.used_height, piece.width, self.stock.length);
        shelf.place(piece, rotated, self.kerf, self.stock.length);
        self.shelves.push(shelf);
        self.used_height += piece.width + self.kerf;
        true
    }

    /// Height of the untouched strip below the last shelf.
    pub fn offcut_height(&self) -> f64 {
        self.stock.width - self.used_height
    }

    /// Computes and records this board's waste: stock area minus the area
    /// swept by shelf contents. Kerf inside a shelf counts as consumed, so
    /// waste is the bottom offcut plus each shelf's tail scrap and the
    /// height left over above shorter pieces.
    pub fn finalize(&mut self) -> f64 {
        let used: f64 = self
            .shelves
            .iter()
            .map(|s| s.height * s.occupied_length(self.stock.length))
            .sum();
        self.waste = self.stock.area() - used;
        self.waste
    }
}
