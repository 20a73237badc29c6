//! Доменная модель: карты, фишки, колода, игроки, конфиг стола, фазы раздачи.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Индекс места за столом (0..max_seats-1). Стабилен на всё время жизни стола.
pub type SeatIndex = u8;

/// Порядковый номер раздачи за столом.
pub type HandNumber = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
