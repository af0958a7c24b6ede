// Library module for testable functions

pub mod catalog;
