#[macro_use]
extern crate lazy_static;
extern crate unicode_segmentation;

pub mod ast_printer;
pub mod error;
pub mod expr;
pub mod scanner;
pub mod source_loc;
pub mod token;
pub mod util;

#[cfg(test)]
mod tests;
