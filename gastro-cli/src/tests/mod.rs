//! Shared test harness modules for the gastro CLI.

use super::*;

mod helpers;
mod hours_unit;
mod link_unit;
