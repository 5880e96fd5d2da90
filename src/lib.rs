pub mod cli;
pub mod eval;
pub mod gen;
pub mod input;
pub mod io;
pub mod math;
pub mod schema;
