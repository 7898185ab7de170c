#![no_main]

use dmiscope::EntryPoint;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = EntryPoint::read(data);
});
