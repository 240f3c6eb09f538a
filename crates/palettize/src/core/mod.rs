mod conversion;
mod difference;
mod equality;
mod math;
mod string;

// conversion
pub(crate) use conversion::rgb_to_lab;

// difference
pub(crate) use difference::{delta_e_2000, find_closest};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;

// string
pub(crate) use string::{format_bracketed, format_hex, is_hex_color, parse_hex, parse_hex_with_alpha};
