pub mod document;
pub mod html;
pub mod text;


pub use document::{Document, Element};
pub use html::extract;
