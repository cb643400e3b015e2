/*
 * Copyright 2019-2021 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use entity_store::id::short_uuid;
use entity_store::uuid::Uuid;

/// Return a random UUID for benchmarking purposes.
pub fn random_uuid() -> Uuid {
    let mut rng = SmallRng::from_entropy();
    Uuid::from_u128(rng.gen())
}

pub fn encode_uuid(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("Encode a UUID to its short form");
    group.throughput(Throughput::Elements(1));
    group.bench_function("encode", |bencher| {
        bencher.iter_batched(
            random_uuid,
            |uuid| short_uuid::encode(&uuid),
            BatchSize::SmallInput,
        );
    });
}

pub fn decode_uuid(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("Decode a UUID from its short form");
    group.throughput(Throughput::Elements(1));
    group.bench_function("decode short form", |bencher| {
        bencher.iter_batched(
            || short_uuid::encode(&random_uuid()),
            |encoded| short_uuid::decode(&encoded).unwrap(),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("decode hyphenated form", |bencher| {
        bencher.iter_batched(
            || random_uuid().to_string(),
            |encoded| short_uuid::decode(&encoded).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(codec, encode_uuid, decode_uuid);
criterion_main!(codec);
