extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate regex;

pub mod string;
pub mod porter;
pub mod meteor;
