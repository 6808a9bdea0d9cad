use rand::Rng;
use ratatui::style::Color;

pub const PIECE_COUNT: usize = 200;

const GLYPHS: [char; 5] = ['*', '•', '+', '▪', '~'];
const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

/// A single falling piece, in screen-relative coordinates (0.0..1.0).
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub x: f32,
    pub y: f32,
    pub glyph: char,
    pub color: Color,
    dx: f32,
    dy: f32,
}

/// A burst of confetti that falls once and is not recycled.
#[derive(Debug, Clone)]
pub struct ConfettiField {
    pieces: Vec<Piece>,
}

impl ConfettiField {
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let pieces = (0..count)
            .map(|_| Piece {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(-1.0..0.0),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: PALETTE[rng.random_range(0..PALETTE.len())],
                dx: rng.random_range(-0.004..0.004),
                dy: rng.random_range(0.008..0.025),
            })
            .collect();
        Self { pieces }
    }

    pub fn burst() -> Self {
        Self::new(PIECE_COUNT, &mut rand::rng())
    }

    /// Move every piece one frame down; pieces past the bottom are dropped.
    pub fn advance(&mut self) {
        for piece in &mut self.pieces {
            let x = (piece.x + piece.dx).rem_euclid(1.0);
            piece.x = if x < 1.0 { x } else { 0.0 };
            piece.y += piece.dy;
        }
        self.pieces.retain(|piece| piece.y < 1.0);
    }

    /// Pieces currently inside the visible area.
    pub fn visible(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|piece| piece.y >= 0.0)
    }

    pub fn is_settled(&self) -> bool {
        self.pieces.is_empty()
    }
}
