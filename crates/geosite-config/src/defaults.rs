//! Default value functions for serde deserialization.
//!
//! These functions forward to constants defined in `geosite_core::defaults`.

use geosite_core::defaults;

/// Generate default value functions that forward to geosite_core::defaults constants.
macro_rules! default_fns {
    // For Copy types (integers, bool, etc.)
    ($($fn_name:ident => $const_name:ident : $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> $ty {
                defaults::$const_name
            }
        )*
    };
}

/// Generate default value functions that return String from &str constants.
macro_rules! default_string_fns {
    ($($fn_name:ident => $const_name:ident),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> String {
                defaults::$const_name.to_string()
            }
        )*
    };
}

/// Generate default value functions that return Vec<String> from &[&str] constants.
macro_rules! default_list_fns {
    ($($fn_name:ident => $const_name:ident),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> Vec<String> {
                defaults::$const_name.iter().map(|s| s.to_string()).collect()
            }
        )*
    };
}

default_fns! {
    default_rule_set_version => DEFAULT_RULE_SET_VERSION: u8,
    default_json_indent      => DEFAULT_JSON_INDENT: usize,
    max_json_indent          => MAX_JSON_INDENT: usize,
    default_output_dedup     => DEFAULT_OUTPUT_DEDUP: bool,
    default_batch_parallel   => DEFAULT_BATCH_PARALLEL: bool,
    default_batch_jobs       => DEFAULT_BATCH_JOBS: usize,
}

default_string_fns! {
    default_data_dir   => DEFAULT_DATA_DIR,
    default_output_dir => DEFAULT_OUTPUT_DIR,
}

default_list_fns! {
    default_ignored_names     => DEFAULT_IGNORED_NAMES,
    default_excluded_suffixes => DEFAULT_EXCLUDED_SUFFIXES,
}
