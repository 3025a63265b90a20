use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use vicar::{DatasetFormatter, Field};

fn write_dataset(n: usize) {
    let array: Array2<f64> = Array2::random((n, 4), Uniform::new(0., 10.));
    let coeff = Field::new("coeff", array);

    let writer: Vec<u8> = Vec::new();
    let mut buf_writer = std::io::BufWriter::new(writer);
    let mut fmt = DatasetFormatter::new(&mut buf_writer);

    fmt += &coeff;
    fmt.write().unwrap();
}

fn write_dataset_bench(c: &mut Criterion) {
    c.bench_function("write dataset 1000", |b| {
        b.iter(|| write_dataset(black_box(1000)))
    });

    c.bench_function("write dataset 100000", |b| {
        b.iter(|| write_dataset(black_box(100000)))
    });
}

criterion_group!(benches, write_dataset_bench);
criterion_main!(benches);
