//! Helper functions shared by the views and models

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
