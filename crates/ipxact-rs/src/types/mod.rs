// crates/ipxact-rs/src/types/mod.rs

//! Public, ergonomic data structures for IP-XACT model entities.
//!
//! Ownership is strictly hierarchical: a component owns its indirect
//! interfaces, and each interface owns its bridges, parameters and vendor
//! extensions. All fields are public and every type implements `Default`, so
//! entities are usually built with struct update syntax and mutated in place.

mod common;
mod component;
mod indirect_interface;
mod parameter;
mod vendor_extension;

pub use common::{NamespaceDeclaration, Revision, Vlnv};
pub use component::{Component, InnerComment};
pub use indirect_interface::{IndirectInterface, TransparentBridge};
pub use parameter::{Parameter, Range};
pub use vendor_extension::VendorExtension;
