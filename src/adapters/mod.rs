// Adapters layer: concrete item sources.

pub mod memory;
