pub mod screens;
pub mod terminal;

pub use screens::{Screen, Shell};
pub use terminal::{StdTerminal, Terminal};
