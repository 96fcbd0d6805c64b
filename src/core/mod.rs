// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{find_tag, Attr, Element};
pub use net::{Fetch, Page, Session};
