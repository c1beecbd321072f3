//! Raw position features for one side, read from its occupancy bitboard.

use shakmaty::{Bitboard, Color, Role};

use crate::game::GameState;

/// Concentric center regions, outermost first: the b2-g7 ring, the c3-f6 ring,
/// and d4/e4/d5/e5. Weighted 1, 3, 5.
pub const CENTER_RINGS: [(Bitboard, u32); 3] = [
    (Bitboard(0x007E_4242_4242_7E00), 1),
    (Bitboard(0x0000_3C24_243C_0000), 3),
    (Bitboard(0x0000_0018_1800_0000), 5),
];

pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

/// Non-king material of a full army.
pub const MAX_SIDE_MATERIAL: u32 = 3900;

/// How the back rank is turned into a development signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DevelopmentMode {
    /// `8 - pieces on own back rank`: higher once pieces have left home.
    #[default]
    Complement,
    /// Pieces on own back rank.
    Occupancy,
}

/// Material weight in centipawns. Kings carry none.
pub const fn piece_value(role: Role) -> u32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 300,
        Role::Bishop => 300,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 0,
    }
}

pub fn center_control<P: GameState>(pos: &P, side: Color) -> u32 {
    let occupied = pos.occupancy(side);
    CENTER_RINGS
        .iter()
        .map(|&(ring, weight)| (ring & occupied).count() as u32 * weight)
        .sum()
}

pub const fn back_rank(side: Color) -> Bitboard {
    match side {
        Color::White => RANK_1,
        Color::Black => RANK_8,
    }
}

pub fn back_rank_count<P: GameState>(pos: &P, side: Color) -> u32 {
    (back_rank(side) & pos.occupancy(side)).count() as u32
}

pub fn development<P: GameState>(pos: &P, side: Color, mode: DevelopmentMode) -> u32 {
    let count = back_rank_count(pos, side);
    match mode {
        DevelopmentMode::Complement => 8 - count,
        DevelopmentMode::Occupancy => count,
    }
}

pub fn material<P: GameState>(pos: &P, side: Color) -> u32 {
    pos.occupancy(side)
        .into_iter()
        .filter_map(|sq| pos.role_at(sq))
        .map(piece_value)
        .sum()
}

/// All raw features of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideFeatures {
    pub center: u32,
    pub development: u32,
    pub material: u32,
}

impl SideFeatures {
    pub fn extract<P: GameState>(pos: &P, side: Color, mode: DevelopmentMode) -> Self {
        SideFeatures {
            center: center_control(pos, side),
            development: development(pos, side, mode),
            material: material(pos, side),
        }
    }
}
