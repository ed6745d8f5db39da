use criterion::{Criterion, criterion_group, criterion_main};
use simpleparser::{Cursor, Options};

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let mut line = String::new();
    for i in 0..2000 {
        line.push_str(&format!("move {} from {} to 0x{:x};", i, i * 7, i * 13));
    }

    let opts = Options::default();
    group.bench_function("commands_plain", |b| {
        b.iter(|| {
            let mut cur = Cursor::with_options(std::hint::black_box(&line), &opts);
            let mut total = 0i64;
            while !cur.is_done() {
                cur.consume("move ");
                total += cur.read_int();
                cur.consume(" from ");
                total += cur.read_int();
                cur.consume(" to ");
                total += cur.read_hex_int();
                cur.consume(";");
            }
            std::hint::black_box(total);
        })
    });

    let logged = Options {
        logging: true,
        ..Default::default()
    };
    group.bench_function("commands_logged", |b| {
        b.iter(|| {
            let mut cur = Cursor::with_options(std::hint::black_box(&line), &logged);
            while cur.consume_through(';').is_some() {}
            std::hint::black_box(cur.take_log().len());
        })
    });

    let words = "lorem ipsum dolor sit amet ".repeat(4000);
    group.bench_function("words_and_whitespace", |b| {
        b.iter(|| {
            let mut cur = Cursor::new(std::hint::black_box(&words));
            let mut n = 0usize;
            while !cur.is_done() {
                n += cur.read_word().len();
                cur.consume_whitespace();
            }
            std::hint::black_box(n);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
