#[macro_use]
extern crate lazy_static;

pub mod frames;
pub mod scope;
pub mod values;

#[macro_use]
mod macros;
