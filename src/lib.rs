pub mod cli;
pub mod ctx;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod stack;
pub mod table;
