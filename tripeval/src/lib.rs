// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate serde_yaml;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate algorithm;
extern crate fnv;
extern crate itertools;
extern crate ndarray;
extern crate csv;
extern crate time;

pub mod errors;
pub mod tuples;
pub mod settings;
pub mod similarity;
pub mod extraction;
pub mod evaluation_metrics;
pub mod utils;
pub mod prelude;
