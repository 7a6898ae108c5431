#![no_main]

use bincursor::fuzz::bit_writer::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));
