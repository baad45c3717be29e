pub use contact::*;
pub use page_meta::*;
pub use route::*;
pub use structured_data::*;

mod contact;
mod page_meta;
mod route;
mod structured_data;
