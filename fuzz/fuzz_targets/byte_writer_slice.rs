#![no_main]

use bincursor::fuzz::byte_writer_slice::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));
