//! # subnetr core
//!
//! The address-space partitioning algorithms:
//!
//! * **[`splitter`]**: removes a child block from a parent block, leaving the minimal set of
//!   aligned remainder blocks.
//! * **[`planner`]**: carves named, host-count-sized subnets out of a parent block,
//!   largest first.
//!
//! Around them, [`report`] turns results into serializable descriptors, [`export`] renders
//! them, and [`calculator`] accepts raw CIDR text from callers.

pub mod calculator;
pub mod export;
pub mod planner;
pub mod report;
pub mod splitter;
