pub mod derive;
pub mod function;
