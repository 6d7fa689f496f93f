pub mod calculator;
pub mod config;
pub mod del;
pub mod generate;
pub mod grid;
pub mod log;
pub mod logic;
pub mod sheet;
