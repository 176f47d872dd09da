//! Benchmarks for reading and writing `.snippet` files
//!
//! Run with: cargo bench --bench snippet_io

use std::collections::BTreeSet;

use snippet_editor::io::{parse_snippet, write_snippet};
use snippet_editor::model::{Language, Placeholder, Snippet, SnippetType};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_snippet(placeholders: usize) -> Snippet {
    let names: Vec<String> = (0..placeholders).map(|i| format!("p{:04}", i)).collect();
    let code = names
        .iter()
        .map(|name| format!("Console.WriteLine(${}$);", name))
        .collect::<Vec<_>>()
        .join("\r\n");

    Snippet {
        title: "Benchmark".to_string(),
        shortcut: "bench".to_string(),
        author: "bench".to_string(),
        language: Some(Language::CSharp),
        code,
        placeholders: names
            .into_iter()
            .map(|name| Placeholder {
                default_value: format!("{} default", name),
                tooltip: "A value".to_string(),
                ..Placeholder::new(name)
            })
            .collect(),
        namespaces: vec!["System".to_string(), "System.Linq".to_string()],
        types: BTreeSet::from([SnippetType::Expansion]),
        ..Default::default()
    }
}

#[divan::bench(args = [1, 20, 200])]
fn write(bencher: divan::Bencher, placeholders: usize) {
    let snippet = make_snippet(placeholders);
    bencher.bench(|| write_snippet(divan::black_box(&snippet)));
}

#[divan::bench(args = [1, 20, 200])]
fn parse(bencher: divan::Bencher, placeholders: usize) {
    let xml = write_snippet(&make_snippet(placeholders)).unwrap();
    bencher.bench(|| parse_snippet(divan::black_box(&xml)));
}
