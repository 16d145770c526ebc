//! This module exports events as iCal files, so that they can be imported into other calendar applications

mod builder;
pub use builder::{build_from, build_week};

use crate::config::{ORG_NAME, PRODUCT_NAME};

pub fn default_prod_id() -> String {
    format!("-//{}//{}//EN", crate::config::get(&ORG_NAME), crate::config::get(&PRODUCT_NAME))
}
