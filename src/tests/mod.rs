mod checksum_tests;
mod artifact_emitter_tests;

use crate::models::event::{ Event, KeyOrder };

pub(crate) const CREATOR: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub(crate) const ATTACKER: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
pub(crate) const TOKEN: &str = "0xcccccccccccccccccccccccccccccccccccccccc";
pub(crate) const OTHER_TOKEN: &str = "0xdddddddddddddddddddddddddddddddddddddddd";

pub(crate) const BALANCE_OF: &str = "70a08231";
pub(crate) const TRANSFER: &str = "a9059cbb";

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn call(from: &str, to: &str, selector: &str) -> Event {
    Event::FunctionCall {
        from: from.to_string(),
        to: to.to_string(),
        data: format!("0x{}{:0>64}", selector, ATTACKER.trim_start_matches("0x")),
        value: "0x0".to_string(),
        gas_used: "0x1".to_string(),
        gas_price: "0x1".to_string(),
        extra: serde_json::Map::new(),
        order: KeyOrder::default(),
    }
}
