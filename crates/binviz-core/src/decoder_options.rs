use std::collections::HashMap;

use crate::status::{invalid_parameter, ok_status, Status};

/// Key count below which the parallel sort is not worth its setup cost.
pub const DEFAULT_PARALLEL_SORT_THRESHOLD: i64 = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMethod {
    Sequential = 0,
    Parallel = 1,
}

#[derive(Debug, Clone, Default)]
pub struct DecoderOptions {
    global_options: HashMap<String, i64>,
}

impl DecoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_sort_method(&self) -> SortMethod {
        match self.get_global_int("sort_method", SortMethod::Sequential as i64) {
            1 => SortMethod::Parallel,
            _ => SortMethod::Sequential,
        }
    }

    pub fn set_sort_method(&mut self, method: SortMethod) {
        self.set_global_int("sort_method", method as i64);
    }

    pub fn get_parallel_sort_threshold(&self) -> usize {
        self.get_global_int("parallel_sort_threshold", DEFAULT_PARALLEL_SORT_THRESHOLD)
            .max(0) as usize
    }

    pub fn set_parallel_sort_threshold(&mut self, num_keys: usize) {
        self.set_global_int("parallel_sort_threshold", num_keys as i64);
    }

    /// Upper bound on the input size in bytes, `None` when unlimited.
    pub fn get_max_input_bytes(&self) -> Option<u64> {
        let value = self.get_global_int("max_input_bytes", -1);
        if value < 0 {
            None
        } else {
            Some(value as u64)
        }
    }

    pub fn set_max_input_bytes(&mut self, max_bytes: u64) {
        self.set_global_int("max_input_bytes", max_bytes.min(i64::MAX as u64) as i64);
    }

    /// Checks an input length against `max_input_bytes`.
    pub fn check_input_len(&self, len: u64) -> Status {
        match self.get_max_input_bytes() {
            Some(max) if len > max => Err(invalid_parameter(format!(
                "input is {len} bytes, limit is {max} bytes"
            ))),
            _ => ok_status(),
        }
    }

    pub fn set_global_int(&mut self, key: &str, value: i64) {
        self.global_options.insert(key.to_string(), value);
    }

    pub fn get_global_int(&self, key: &str, default_val: i64) -> i64 {
        *self.global_options.get(key).unwrap_or(&default_val)
    }

    pub fn is_global_option_set(&self, key: &str) -> bool {
        self.global_options.contains_key(key)
    }
}
