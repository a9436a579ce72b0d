//! Integration test harness

mod cli_test;
mod config_test;
mod helpers;
mod router_test;
mod sync_test;
