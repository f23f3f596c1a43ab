pub mod mock;
pub mod comparator;
