mod errors;
mod len_type;
mod nullable;
mod sort_config;

pub use errors::*;
pub use len_type::LengthType;
pub use nullable::Nullable;
pub use sort_config::SortConfig;
pub use sort_config::SortOrder;
