//! AGF catalog parser module.

mod agf;
mod decode;
mod fields;

pub use agf::{parse_agf, parse_agf_file, AgfReader};
pub use decode::{decode_catalog, read_catalog_file};
pub use fields::{is_sentinel, parse_number, parse_optional_number, TaggedLine};
