//! Emits a bare test identifier with no kind prefix.
//!
//! Usage: `testid_raw`

use std::{env, process};

use testid::adapters::live::LiveIdGenerator;
use testid::ports::IdGenerator;

fn main() {
    if env::args().count() > 1 {
        eprintln!("Usage: testid_raw");
        process::exit(1);
    }

    println!("{}", LiveIdGenerator::new().generate_id());
}
