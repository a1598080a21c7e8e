mod test_utils;

pub use test_utils::{read_json, TestContextExt};
