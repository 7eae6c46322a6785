use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lumbung::{types::PAGE_SIZE, utils::mock::TempDatabase};
use std::hint::black_box;

fn benchmark_page_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_io");
    group.throughput(Throughput::Bytes(PAGE_SIZE as u64));
    group.bench_function("write_page", |b| {
        let mut temp_db = TempDatabase::with_prefix("bench_write");
        let storage = temp_db.open_storage_manager().unwrap();
        let page_number = storage.allocate_page().unwrap();
        let data = vec![0x5Au8; PAGE_SIZE];
        b.iter(|| {
            storage
                .write_page(black_box(page_number), black_box(&data))
                .unwrap()
        });
    });
    group.finish();
}

fn benchmark_page_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_io");
    group.throughput(Throughput::Bytes(PAGE_SIZE as u64));
    group.bench_function("read_page", |b| {
        let mut temp_db = TempDatabase::with_prefix("bench_read");
        let storage = temp_db.open_storage_manager().unwrap();
        let page_number = storage.allocate_page().unwrap();
        let data = vec![0xA5u8; PAGE_SIZE];
        storage.write_page(page_number, &data).unwrap();
        let mut buffer = vec![0u8; PAGE_SIZE];
        b.iter(|| {
            storage
                .read_page(black_box(page_number), black_box(&mut buffer))
                .unwrap()
        });
    });
    group.finish();
}

fn benchmark_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_allocation");
    group.throughput(Throughput::Bytes(PAGE_SIZE as u64));
    group.bench_function("allocate_page", |b| {
        let mut temp_db = TempDatabase::with_prefix("bench_alloc");
        let storage = temp_db.open_storage_manager().unwrap();
        b.iter(|| black_box(storage.allocate_page().unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_page_write,
    benchmark_page_read,
    benchmark_allocation
);
criterion_main!(benches);
