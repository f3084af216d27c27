pub use super::image;
pub use super::image::Entity as Image;
