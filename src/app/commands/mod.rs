pub mod locate;
pub mod replace;
pub mod sync;
