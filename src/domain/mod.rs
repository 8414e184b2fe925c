//! Domain layer - journal reformatting logic with no external dependencies
//!
//! This layer contains:
//! - Entities: the journal entry record
//! - Value Objects: categories, tag tables, extraction results, item tokens
//! - Domain Services: classification, extraction, tokenizing, list markup

pub mod entities;
pub mod services;
pub mod value_objects;
