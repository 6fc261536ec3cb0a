pub mod notifications;

pub use notifications::{Board, Card, CardView, Container, Phase};
