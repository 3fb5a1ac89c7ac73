//! Execution Engine
//!
//! Record/group scheduling for the batch drivers.

pub mod batch;
