//! Benchmarks for SMBIOS entry point and structure table decoding.
//!
//! The entry point is a fixed 31-byte record; the table benchmark decodes a
//! synthetic stream shaped like a typical desktop firmware dump (a few dozen
//! structures with short string sections).

extern crate dmiscope;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use dmiscope::prelude::*;
use std::hint::black_box;

fn entry_point_image() -> [u8; ENTRY_POINT_LEN] {
    let entry_point = EntryPoint {
        anchor: ANCHOR,
        checksum: 0,
        length: ENTRY_POINT_LEN as u8,
        major_version: 3,
        minor_version: 2,
        max_structure_size: 0x0140,
        entry_point_revision: 0,
        formatted_area: [0; 5],
        intermediate_anchor: INTERMEDIATE_ANCHOR,
        intermediate_checksum: 0,
        structure_table_length: 4096,
        structure_table_address: 0x000F_0000,
        number_structures: 48,
        bcd_revision: 0x32,
    };

    let mut image = entry_point.to_bytes();
    image[4] = 0u8.wrapping_sub(checksum(&image));
    image
}

fn table_image(structures: u16) -> Vec<u8> {
    let mut table = Vec::new();
    for handle in 0..structures {
        table.push((handle % 43) as u8);
        table.push(4 + 16);
        table.extend_from_slice(&handle.to_le_bytes());
        table.extend_from_slice(&[0x5A; 16]);
        table.extend_from_slice(b"Vendor Name\0Product 01.02\0\0");
    }
    table
}

fn bench_entry_point(c: &mut Criterion) {
    let image = entry_point_image();

    let mut group = c.benchmark_group("entry_point");
    group.throughput(Throughput::Bytes(image.len() as u64));
    group.bench_function("read", |b| {
        b.iter(|| {
            let ep = EntryPoint::read(black_box(&image)).unwrap();
            black_box(ep)
        });
    });
    group.finish();
}

fn bench_structure_table(c: &mut Criterion) {
    let table = table_image(48);

    let mut group = c.benchmark_group("structure_table");
    group.throughput(Throughput::Bytes(table.len() as u64));
    group.bench_function("read", |b| {
        b.iter(|| {
            let decoded = StructureTable::read(black_box(&table)).unwrap();
            black_box(decoded)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_entry_point, bench_structure_table);
criterion_main!(benches);
