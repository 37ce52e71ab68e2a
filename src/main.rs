use std::path::PathBuf;

use clap::Parser;
use cutlist::render;
use cutlist::{DEFAULT_KERF, Packer, PieceRequest, Rect};

#[derive(Parser)]
#[command(
    name = "cutlist",
    about = "Shelf-packing cutting layout optimizer for rectangular stock"
)]
struct Cli {
    /// Stock board dimensions (LxW, e.g. 96x48)
    #[arg(long)]
    stock: String,

    /// Cut pieces as LxW:qty (e.g. 24x12:8 18.5x10:2)
    #[arg(long = "cuts", num_args = 1.., required_unless_present = "input")]
    cuts: Vec<String>,

    /// JSON file holding a saved cut list ([{"length", "width", "quantity"}, ...])
    #[arg(long)]
    input: Option<PathBuf>,

    /// Blade kerf width (default: 0.125)
    #[arg(long, default_value_t = DEFAULT_KERF)]
    kerf: f64,

    /// Show ASCII layout of each board
    #[arg(long)]
    layout: bool,
}

fn parse_dimensions(s: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!("invalid dimensions '{}', expected LxW", s));
    }
    let length = parts[0]
        .parse::<f64>()
        .map_err(|_| format!("invalid length in '{}'", s))?;
    let width = parts[1]
        .parse::<f64>()
        .map_err(|_| format!("invalid width in '{}'", s))?;
    Ok(Rect::new(length, width))
}

fn parse_cut(s: &str) -> Result<PieceRequest, String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(format!("invalid cut '{}', expected LxW:qty", s));
    }
    let rect = parse_dimensions(parts[0])?;
    let quantity = parts[1]
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity in '{}'", s))?;
    Ok(PieceRequest::new(rect.length, rect.width, quantity))
}

fn load_cut_list(path: &PathBuf) -> Result<Vec<PieceRequest>, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&data).map_err(|e| format!("invalid cut list {}: {}", path.display(), e))
}

fn main() {
    let cli = Cli::parse();

    let stock = parse_dimensions(&cli.stock).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let mut requests: Vec<PieceRequest> = Vec::new();
    if let Some(path) = &cli.input {
        requests = load_cut_list(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    }
    for cut in &cli.cuts {
        match parse_cut(cut) {
            Ok(request) => requests.push(request),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let layout = Packer::new(stock, cli.kerf, requests)
        .pack()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    for (i, board) in layout.boards.iter().enumerate() {
        println!("Board {}:", i + 1);
        for shelf in &board.shelves {
            for p in &shelf.pieces {
                let rot = if p.rotated { " [rotated]" } else { "" };
                println!("  {} @ ({}, {}){}", p.rect, p.x, p.y, rot);
            }
        }
        println!("  Waste: {:.2} sq units", board.waste);
        if cli.layout {
            print!("{}", render::render_board(layout.stock, board));
        }
        println!();
    }

    println!(
        "Summary: {} board{} used, {:.2} total waste ({:.1}% of stock unused)",
        layout.board_count(),
        if layout.board_count() == 1 { "" } else { "s" },
        layout.total_waste,
        layout.waste_percent(),
    );
}
