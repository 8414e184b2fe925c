//! Domain services - pure logic over entry text and tag sets

pub mod classifier;
pub mod extractor;
pub mod list_markup;
pub mod tokenizer;
