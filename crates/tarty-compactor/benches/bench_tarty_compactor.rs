use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use tarty_compactor::{CompactorPipeline, classify};

fn generate_code(size_kb: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        let indent = " ".repeat(rng.gen_range(0..12));
        match rng.gen_range(0..5) {
            0 => text.push_str(&format!("{indent}// note {}\n", rng.gen::<u32>())),
            1 => text.push_str(&format!("{indent}/* block\n{indent} * {}\n{indent} */\n", rng.gen::<u16>())),
            2 => text.push('\n'),
            _ => text.push_str(&format!("{indent}let v{} = {};\n", rng.gen::<u16>(), rng.gen::<u32>())),
        }
    }
    text
}

fn generate_markup(size_kb: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut text = String::from("<root>\n");
    while text.len() < size_kb * 1024 {
        let depth = rng.gen_range(1..6);
        let pad = "  ".repeat(depth);
        if rng.gen_bool(0.2) {
            text.push_str(&format!("{pad}<!-- generated {} -->\n", rng.gen::<u16>()));
        } else {
            text.push_str(&format!("{pad}<node id=\"{}\">\n{pad}  value\n{pad}</node>\n", rng.gen::<u32>()));
        }
    }
    text.push_str("</root>\n");
    text
}

fn bench_process_code(c: &mut Criterion) {
    let pipeline = CompactorPipeline::new();
    for size in [1, 10, 100] {
        let code = generate_code(size);
        c.bench_function(&format!("process_rs_{size}kb"), |b| {
            b.iter(|| black_box(pipeline.process(black_box(&code), ".rs")))
        });
    }
}

fn bench_process_markup(c: &mut Criterion) {
    let pipeline = CompactorPipeline::new();
    let xml = generate_markup(10);
    c.bench_function("process_xml_10kb", |b| {
        b.iter(|| black_box(pipeline.process(black_box(&xml), ".xml")))
    });
}

fn bench_is_binary(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let data: Vec<u8> = (0..64 * 1024).map(|_| rng.gen_range(1..=255u8)).collect();
    c.bench_function("is_binary_64kb_text", |b| {
        b.iter(|| black_box(classify::is_binary(black_box(&data))))
    });
}

criterion_group!(benches, bench_process_code, bench_process_markup, bench_is_binary);
criterion_main!(benches);
