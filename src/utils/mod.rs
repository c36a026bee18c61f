mod config;
mod error;
mod parse_plaintext;
mod parse_rle;

pub use config::Config;
pub use error::ConvertError;
pub use parse_plaintext::parse_plaintext;
pub use parse_rle::parse_rle;
