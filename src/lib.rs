//! PowerCost Calculator library
//!
//! Household appliance energy and cost calculation: the pricing formulas,
//! device validation, the session ledger, and the text front-end pieces
//! shared by the binaries and tests.

pub mod catalog;
pub mod core;
pub mod device;
pub mod form;
pub mod i18n;
pub mod ledger;
pub mod pricing;
pub mod report;
pub mod usage;
