pub mod canvas_png;

pub use canvas_png::{decode_png, encode_png, write_png};
