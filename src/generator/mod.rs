//! YAML record generator module.

mod number;
mod yml;

pub use number::{format_float, format_scientific, round_decimals};
pub use yml::{
    ensure_output_dir, record_path, render_record, render_yml, write_record, LICENSE_HEADER,
};
