pub mod cards;

pub use cards::{render_board, render_card, render_container};
