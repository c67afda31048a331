pub mod attributes;
pub mod node;
pub mod tree;
pub mod document;

pub use attributes::*;
pub use node::*;
pub use tree::*;
pub use document::*;
