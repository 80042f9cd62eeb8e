pub mod feed;

pub use feed::{load_catalog, load_restriction_vocabulary};
