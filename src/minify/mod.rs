//! Script Minifier Module
//!
//! Strips comments and insignificant whitespace from script source without
//! touching the contents of string or regex literals.

mod scanner;


pub use scanner::minify;
