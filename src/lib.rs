//! School Billing - subscription payments for the school management dashboard
//!
//! This crate receives payment webhooks from Pagar.me and Kiwify, renews each
//! paying school's entitlement, creates Pix orders, and answers whether a
//! school currently has access.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;
