use serde::{Deserialize, Deserializer, Serialize};

use crate::board::Board;

/// Saw blade thickness reserved between adjacent cuts, in the same unit as
/// the piece dimensions (1/8 inch in the legacy tool).
pub const DEFAULT_KERF: f64 = 0.125;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub length: f64,
    pub width: f64,
}

impl Rect {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// The same rectangle turned 90 degrees.
    pub fn rotated(&self) -> Self {
        Self {
            length: self.width,
            width: self.length,
        }
    }

    pub fn fits_in(&self, other: &Rect) -> bool {
        self.length <= other.length && self.width <= other.width
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.length, self.width)
    }
}

/// One line of the cut list: `quantity` copies of a `length` x `width`
/// rectangle. This is also the persistence record for saved cut lists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieceRequest {
    pub length: f64,
    pub width: f64,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub quantity: u32,
}

impl PieceRequest {
    pub fn new(length: f64, width: f64, quantity: u32) -> Self {
        Self {
            length,
            width,
            quantity,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.length, self.width)
    }
}

/// Accepts both `3` and `3.0` for quantities, since spreadsheet exports and
/// JS clients tend to send whole numbers as floats.
pub fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value < 0.0 || value > u32::MAX as f64 || value.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!(
            "expected a whole non-negative number, got {value}"
        )));
    }
    Ok(value as u32)
}

/// A piece fixed in its final orientation and position, relative to its
/// board's top-left corner. `rect` holds the oriented dimensions: if
/// `rotated` is set, length and width are swapped from the request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedPiece {
    pub rect: Rect,
    pub x: f64,
    pub y: f64,
    pub rotated: bool,
}

/// The finished cutting plan: every requested piece assigned a position on
/// some board, plus the waste accounting. Produced fresh by each run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub stock: Rect,
    pub boards: Vec<Board>,
    pub total_waste: f64,
}

impl Layout {
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.boards
            .iter()
            .flat_map(|b| &b.shelves)
            .flat_map(|s| &s.pieces)
    }

    /// Share of purchased stock area not covered by a placed piece. Kerf
    /// strips count as waste here, unlike `total_waste` which follows the
    /// shelf accounting and treats sawdust as consumed material.
    pub fn waste_percent(&self) -> f64 {
        let total_stock_area = self.stock.area() * self.boards.len() as f64;
        if total_stock_area == 0.0 {
            return 0.0;
        }
        let total_used: f64 = self.pieces().map(|p| p.rect.area()).sum();
        (total_stock_area - total_used) / total_stock_area * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_area_and_rotation() {
        let r = Rect::new(24.0, 12.0);
        assert_eq!(r.area(), 288.0);
        let rot = r.rotated();
        assert_eq!(rot.length, 12.0);
        assert_eq!(rot.width, 24.0);
        assert_eq!(rot.rotated(), r);
    }

    #[test]
    fn test_rect_fits_in() {
        let stock = Rect::new(96.0, 48.0);
        assert!(Rect::new(96.0, 48.0).fits_in(&stock));
        assert!(Rect::new(10.5, 10.5).fits_in(&stock));
        assert!(!Rect::new(96.01, 10.0).fits_in(&stock));
        assert!(!Rect::new(10.0, 48.5).fits_in(&stock));
    }

    #[test]
    fn test_rect_display() {
        assert_eq!(Rect::new(24.0, 12.5).to_string(), "24x12.5");
    }

    #[test]
    fn test_piece_request_json_roundtrip() {
        let json = r#"[{"length": 24.0, "width": 12.0, "quantity": 8}]"#;
        let requests: Vec<PieceRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(requests, vec![PieceRequest::new(24.0, 12.0, 8)]);

        let back = serde_json::to_string(&requests).unwrap();
        let again: Vec<PieceRequest> = serde_json::from_str(&back).unwrap();
        assert_eq!(again, requests);
    }

    #[test]
    fn test_quantity_accepts_whole_float() {
        let json = r#"{"length": 10, "width": 5, "quantity": 3.0}"#;
        let request: PieceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.quantity, 3);
    }

    #[test]
    fn test_quantity_rejects_fractional() {
        let json = r#"{"length": 10, "width": 5, "quantity": 3.5}"#;
        assert!(serde_json::from_str::<PieceRequest>(json).is_err());
    }
}
