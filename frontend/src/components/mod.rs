pub mod fields;
pub mod header;
pub mod results;
pub mod review;
pub mod utils;
