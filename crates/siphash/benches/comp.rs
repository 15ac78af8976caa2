use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use siphash::{SipHash13, SipHash24};
use traits::FastHash as _;

mod common;

fn comp(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let key = common::bench_key();
  let [k0, k1] = key.words();
  let mut group = c.benchmark_group("siphash/comp");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("siphash13/ours", len), data, |b, d| {
      b.iter(|| black_box(SipHash13::hash_with_key(key, black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("siphash13/siphasher", len), data, |b, d| {
      b.iter(|| {
        use core::hash::Hasher as _;
        let mut h = siphasher::sip::SipHasher13::new_with_keys(k0, k1);
        h.write(black_box(d));
        black_box(h.finish())
      })
    });

    group.bench_with_input(BenchmarkId::new("siphash24/ours", len), data, |b, d| {
      b.iter(|| black_box(SipHash24::hash_with_key(key, black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("siphash24/siphasher", len), data, |b, d| {
      b.iter(|| {
        use core::hash::Hasher as _;
        let mut h = siphasher::sip::SipHasher24::new_with_keys(k0, k1);
        h.write(black_box(d));
        black_box(h.finish())
      })
    });
  }

  group.finish();
}

criterion_group!(benches, comp);
criterion_main!(benches);
