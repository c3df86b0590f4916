pub mod cards;
pub mod methods;
