use criterion::{black_box, criterion_group, criterion_main, Criterion};
use esscan_scanner::{Context, Scanner, TokenStream};

// A medium-size module (~40 lines) mixing templates with ordinary code
const MIXED_SOURCE: &str = r#"#!/usr/bin/env node
import { readFile } from "fs/promises";

const LIMIT = 1_000_000n;
const MASK = 0xFF_FF;

/**
 * Render a user card.
 */
export async function renderCard(user, options = {}) {
    const name = user?.name ?? "anonymous";
    const title = `${name} (${user.age >= 18 ? "adult" : "minor"})`;
    const lines = [
        `id: ${user.id}`,
        `email: ${user.email.toLowerCase()}`,
        `score: ${(user.score ** 2 / 3.5e2).toFixed(2)}`,
    ];
    for (let i = 0; i < lines.length; i++) {
        if (lines[i].length > 80 && !options.wrap) {
            lines[i] = lines[i].slice(0, 77) + "...";
        }
    }
    return html`<section class="card">
        <h1>${title}</h1>
        <ul>${lines.map((line) => html`<li>${line}</li>`)}</ul>
        <p>\unicode escapes survive in tagged templates</p>
    </section>`;
}

export class Cache {
    #entries = new Map();
    get(key) { return this.#entries.get(key) ?? null; }
    set(key, value) { this.#entries.set(key, value); return this; }
}
"#;

fn template_heavy_source() -> String {
    let mut source = String::with_capacity(64 * 1024);
    for i in 0..1000 {
        source.push_str(&format!(
            "`row {i}: \\t${{value}} \\u{{1F600}} \\x41\\r\\n end`;\n"
        ));
    }
    source
}

fn bench_scan_mixed(c: &mut Criterion) {
    c.bench_function("scan_mixed_module", |b| {
        b.iter(|| {
            let count = TokenStream::new(black_box(MIXED_SOURCE))
                .filter(Result::is_ok)
                .count();
            black_box(count);
        });
    });
}

fn bench_scan_templates(c: &mut Criterion) {
    let source = template_heavy_source();
    c.bench_function("scan_template_segments", |b| {
        b.iter(|| {
            let segments = TokenStream::new(black_box(&source))
                .filter_map(Result::ok)
                .filter(|info| info.kind.is_template())
                .count();
            black_box(segments);
        });
    });

    let tagged: Vec<String> = source
        .lines()
        .map(|line| line.replace("${value}", "value").replace("\\x41", "\\xZZ"))
        .collect();
    c.bench_function("scan_tagged_bad_templates", |b| {
        b.iter(|| {
            let mut segments = 0usize;
            for line in &tagged {
                let mut scanner = Scanner::new(black_box(line));
                if scanner.scan_template(Context::TAGGED_TEMPLATE).is_ok() {
                    segments += 1;
                }
            }
            black_box(segments);
        });
    });
}

criterion_group!(benches, bench_scan_mixed, bench_scan_templates);
criterion_main!(benches);
