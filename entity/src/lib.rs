pub mod prelude;

pub mod image;
