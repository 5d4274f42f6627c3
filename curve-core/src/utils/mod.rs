pub mod errors;
pub mod math;

#[cfg(test)]
pub mod test_utils;
