mod console;
pub mod traits;

pub use console::ConsoleMarketView;
