#![no_main]

use dmiscope::StructureTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = StructureTable::read(data);
});
