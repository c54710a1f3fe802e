use criterion::Criterion;

use bench_util::{
    bench_inputs, bench_inputs_f32, configure_criterion, gen_bits, gen_range_f32, glibc_rcbrt,
    glibc_rcbrtf,
};

fn bench_rcbrt(c: &mut Criterion) {
    let inputs = [-1e-300, -1.0, -8.0, 1.0, 8.0, 27.0, 1e-6, 1e6, 1e300];
    let binades = gen_bits(1024, 0x0010_0000_0000_0000, 0x7ff0_0000_0000_0000, 0xabcd);
    let subnormal = gen_bits(1024, 1, 0x0010_0000_0000_0000, 0xdcba);

    let mut group = c.benchmark_group("rcbrt/smoke");
    bench_inputs(&mut group, &inputs, fastroots::rcbrt, glibc_rcbrt);
    group.finish();

    let mut group = c.benchmark_group("rcbrt/binades");
    bench_inputs(&mut group, &binades, fastroots::rcbrt, glibc_rcbrt);
    group.finish();

    let mut group = c.benchmark_group("rcbrt/subnormal");
    bench_inputs(&mut group, &subnormal, fastroots::rcbrt, glibc_rcbrt);
    group.finish();
}

fn bench_rcbrtf(c: &mut Criterion) {
    let common = gen_range_f32(1024, 1e-6, 1e6, 0x6464);

    let mut group = c.benchmark_group("rcbrtf/common");
    bench_inputs_f32(&mut group, &common, fastroots::rcbrtf, glibc_rcbrtf);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_rcbrt(&mut c);
    bench_rcbrtf(&mut c);
    c.final_summary();
}
