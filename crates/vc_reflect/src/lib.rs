#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod impls;
mod reflection;

pub mod access;
pub mod cursor;
pub mod info;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use reflection::Reflect;
