/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sequential and positional scalar reads, for every width and both byte
//! orders, plus bit-field extraction through a bit view.

use bincursor::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::any::type_name;
use std::hint::black_box;
use std::time::Duration;

pub const DATA_BYTES: usize = 1 << 20;

pub fn gen_data(n: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut data = vec![0; n];
    rng.fill_bytes(&mut data);
    data
}

fn bench_scalar<E: Endianness, T: Scalar>(c: &mut Criterion, data: &[u8]) {
    let count = data.len() / T::BYTES;
    let name = type_name::<T>().rsplit("::").next().unwrap_or_default();

    c.bench_function(&format!("get,{},{}", name, E::NAME), |b| {
        b.iter(|| {
            let mut r = ByteReader::new(data);
            for _ in 0..count {
                black_box(r.get::<E, T>().unwrap());
            }
        })
    });

    c.bench_function(&format!("pget,{},{}", name, E::NAME), |b| {
        let r = ByteReader::new(data);
        b.iter(|| {
            for i in 0..count {
                black_box(r.pget::<E, T>(i * T::BYTES).unwrap());
            }
        })
    });
}

fn bench_endianness<E: Endianness>(c: &mut Criterion, data: &[u8]) {
    bench_scalar::<E, u16>(c, data);
    bench_scalar::<E, U24>(c, data);
    bench_scalar::<E, u32>(c, data);
    bench_scalar::<E, I48>(c, data);
    bench_scalar::<E, u64>(c, data);
    bench_scalar::<E, f64>(c, data);
}

fn bench_bits(c: &mut Criterion, data: &[u8]) {
    for width in [1, 7, 13, 64] {
        let count = data.len() * 8 / width;
        c.bench_function(&format!("bits,{}", width), |b| {
            b.iter(|| {
                let mut r = BitReader::new(data);
                for _ in 0..count {
                    black_box(r.read(width).unwrap());
                }
            })
        });
    }
}

pub fn benchmark(c: &mut Criterion) {
    let data = gen_data(DATA_BYTES);
    bench_endianness::<BE>(c, &data);
    bench_endianness::<LE>(c, &data);
    bench_bits(c, &data);
}

criterion_group! {
    name = scalar_read_benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = benchmark
}
criterion_main!(scalar_read_benches);
