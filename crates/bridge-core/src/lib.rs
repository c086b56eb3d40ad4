pub mod suit;
pub mod card;
pub mod hand;
pub mod board;
pub mod call;
pub mod auction;
pub mod io;

pub use suit::{Strain, Suit};
pub use card::{Card, Rank};
pub use hand::{Distribution, Hand, HandEvaluation, Shape};
pub use board::{Partnership, Position};
pub use call::Call;
pub use auction::Auction;
