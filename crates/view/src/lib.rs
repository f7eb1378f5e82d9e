//! Declarative card construction.
//!
//! This crate turns catalog records into substrate-independent view-node
//! trees. Nothing here touches a display surface: hosts (and tests) decide
//! how a [`Node`] tree becomes pixels or markup.

pub mod card;
pub mod controls;
pub mod html;
pub mod node;

pub use card::{ActionKind, product_card, savings_percent};
pub use controls::carousel_nav;
pub use html::to_html;
pub use node::{Element, Node};
