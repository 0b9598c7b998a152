//! Mirror layout module for kagami
//!
//! Defines the bidirectional mapping between canonical remote URLs and the
//! local mirror: where a page is stored on disk, and what href replaces an
//! internal link in rewritten markup. Both mappings are pure functions of
//! the URL's path component.

mod path_map;

pub use path_map::{link_path, storage_path};
