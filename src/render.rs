use crate::board::Board;
use crate::types::Rect;

const MAX_COLS: f64 = 80.0;
const MAX_ROWS: f64 = 40.0;

/// Scaled ASCII diagram of one board, pieces labeled with their oriented
/// dimensions. The length axis runs across the terminal.
pub fn render_board(stock: Rect, board: &Board) -> String {
    let scale = f64::min(MAX_COLS / stock.length, MAX_ROWS / stock.width);
    let cols = (stock.length * scale).round() as usize;
    let rows = (stock.width * scale).round() as usize;

    if cols == 0 || rows == 0 {
        return String::new();
    }

    let mut grid = Grid::new(cols, rows);
    grid.frame(0, 0, cols, rows);

    for shelf in &board.shelves {
        for piece in &shelf.pieces {
            let x = (piece.x * scale).round() as usize;
            let y = (piece.y * scale).round() as usize;
            let w = (piece.rect.length * scale).round() as usize;
            let h = (piece.rect.width * scale).round() as usize;
            if w == 0 || h == 0 {
                continue;
            }
            grid.frame(x, y, w, h);
            grid.label(
                x,
                y,
                w,
                h,
                &format!("{}x{}", piece.rect.length, piece.rect.width),
            );
        }
    }

    grid.to_string()
}

struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec![' '; cols + 1]; rows + 1],
        }
    }

    /// Draws a rectangle outline, upgrading crossings to '+'.
    fn frame(&mut self, x: usize, y: usize, w: usize, h: usize) {
        for i in x..=x + w {
            self.mark(i, y, '-');
            self.mark(i, y + h, '-');
        }
        for j in y..=y + h {
            self.mark(x, j, '|');
            self.mark(x + w, j, '|');
        }
        for &cx in &[x, x + w] {
            for &cy in &[y, y + h] {
                self.set(cx, cy, '+');
            }
        }
    }

    fn mark(&mut self, x: usize, y: usize, ch: char) {
        if y >= self.cells.len() || x >= self.cells[y].len() {
            return;
        }
        let cell = self.cells[y][x];
        let crosses = (ch == '-' && (cell == '|' || cell == '+'))
            || (ch == '|' && (cell == '-' || cell == '+'));
        self.cells[y][x] = if crosses { '+' } else { ch };
    }

    fn set(&mut self, x: usize, y: usize, ch: char) {
        if y < self.cells.len() && x < self.cells[y].len() {
            self.cells[y][x] = ch;
        }
    }

    /// Centers `text` inside the rectangle, if it has interior room.
    fn label(&mut self, x: usize, y: usize, w: usize, h: usize, text: &str) {
        if w <= 2 || h == 0 {
            return;
        }
        let chars: Vec<char> = text.chars().collect();
        let cy = y + h / 2;
        let start = (x + w / 2).saturating_sub(chars.len() / 2);
        for (i, &ch) in chars.iter().enumerate() {
            let cx = start + i;
            if cx > x && cx < x + w && cy > y && cy < y + h {
                self.set(cx, cy, ch);
            }
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packer::Packer;
    use crate::types::PieceRequest;

    #[test]
    fn test_render_full_board() {
        let stock = Rect::new(96.0, 48.0);
        let layout = Packer::new(stock, 0.125, vec![PieceRequest::new(24.0, 12.0, 8)])
            .pack()
            .unwrap();
        let output = render_board(stock, &layout.boards[0]);
        assert!(output.contains('+'));
        assert!(output.contains('-'));
        assert!(output.contains('|'));
        assert!(output.contains("24x12"));
    }

    #[test]
    fn test_render_labels_rotated_dimensions() {
        let stock = Rect::new(50.0, 100.0);
        let layout = Packer::new(stock, 1.0, vec![PieceRequest::new(60.0, 40.0, 1)])
            .pack()
            .unwrap();
        let output = render_board(stock, &layout.boards[0]);
        // The piece only fits rotated, so the label shows the oriented size.
        assert!(output.contains("40x60"));
    }

    #[test]
    fn test_render_empty_board_draws_border() {
        let stock = Rect::new(96.0, 48.0);
        let board = Board::new(stock, 0.125);
        let output = render_board(stock, &board);
        assert!(output.contains('+'));
    }
}
