pub mod data_structure;
pub mod error;
pub mod interface;

pub use data_structure::array_list::{ArrayList, DEFAULT_CAPACITY};
pub use error::ListError;
pub use interface::list::List;
