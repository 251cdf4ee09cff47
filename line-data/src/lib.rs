//! Line lookup table generator.
//!
//! Turns the transit operator's line export into two JSON tables for the
//! city dashboard: line code → internal line id, and line code → line
//! metadata (type, category, street lists). Every line is published under
//! its code as exported and under the Latin transliteration of that code.

pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod report;
pub mod streets;
pub mod tables;
pub mod translit;
pub mod writer;
