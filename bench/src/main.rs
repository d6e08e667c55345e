use std::path::Path;
use std::time::{Duration, Instant};

use corpus::Encoding;
use search::{BoyerMoore, Kmp, RabinKarp, SubstringSearch};

// Configuration
const TEXT_FILES: &[&str] = &["data/article1.txt", "data/article2.txt"];

const REPEATS: u32 = 100;

/// Width of the guaranteed-present pattern sliced out of each corpus.
const PRESENT_WIDTH: usize = 8;

/// Worst case for matching failure: scanned to the end on every run.
const ABSENT_PATTERN: &[u8] = b"dementor";

#[derive(Debug)]
struct ResultEntry {
    algo: &'static str,
    pattern_kind: &'static str,
    file: String,
    duration: Duration,
}

fn main() {
    println!("--- Substring search benchmark ---");
    println!(
        "> {} repetitions per algorithm, present + absent pattern per text",
        REPEATS
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let files: Vec<&str> = if args.is_empty() {
        TEXT_FILES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut results: Vec<ResultEntry> = Vec::new();

    for file in &files {
        let text = match corpus::load_text(Path::new(file), Encoding::Utf8) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("  ! Skipping {}: {}", file, err);
                continue;
            }
        };

        results.extend(bench_file(file, text.as_bytes()));
    }

    print_summary_table(&results);
}

fn searchers() -> [(&'static str, Box<dyn SubstringSearch>); 3] {
    [
        ("boyer-moore", Box::new(BoyerMoore)),
        ("kmp", Box::new(Kmp)),
        ("rabin-karp", Box::new(RabinKarp::default())),
    ]
}

/// Time every algorithm over one corpus, present pattern first, then the
/// absent one. Any violated expectation is reported and skipped so the
/// remaining runs still happen.
fn bench_file(file: &str, text: &[u8]) -> Vec<ResultEntry> {
    let mut results = Vec::new();

    let Some(present) = present_pattern(text) else {
        eprintln!("  ! Skipping {}: corpus too small", file);
        return results;
    };

    let absent_occurs = search::kmp_find(text, ABSENT_PATTERN).is_some();
    if absent_occurs {
        eprintln!(
            "  ! {}: absent pattern {:?} actually occurs, skipping absent runs",
            file,
            String::from_utf8_lossy(ABSENT_PATTERN)
        );
    }

    for (name, searcher) in searchers() {
        println!("> Running {} on {} ({} bytes)", name, file, text.len());

        let (found, duration) = time_search(searcher.as_ref(), text, present);
        if found.is_none() {
            eprintln!(
                "  ! {}: {} did not find the derived pattern, skipping",
                file, name
            );
            continue;
        }
        results.push(ResultEntry {
            algo: name,
            pattern_kind: "present",
            file: file.to_string(),
            duration,
        });

        if absent_occurs {
            continue;
        }

        let (found, duration) = time_search(searcher.as_ref(), text, ABSENT_PATTERN);
        if found.is_some() {
            eprintln!(
                "  ! {}: {} reported a match for the absent pattern, skipping",
                file, name
            );
            continue;
        }
        results.push(ResultEntry {
            algo: name,
            pattern_kind: "absent",
            file: file.to_string(),
            duration,
        });
    }

    results
}

/// Slice a window out of the middle of the corpus; searching for it is the
/// realistic "pattern is present" case.
fn present_pattern(text: &[u8]) -> Option<&[u8]> {
    if text.len() < PRESENT_WIDTH {
        return None;
    }
    let mid = text.len() / 2;
    let start = mid.min(text.len() - PRESENT_WIDTH);
    Some(&text[start..start + PRESENT_WIDTH])
}

fn time_search(
    searcher: &dyn SubstringSearch,
    text: &[u8],
    pattern: &[u8],
) -> (Option<usize>, Duration) {
    let start = Instant::now();

    let mut result = None;
    for _ in 0..REPEATS {
        result = searcher.find_bytes(text, pattern);
    }

    (result, start.elapsed())
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^80}", " RESULTS SUMMARY ");
    println!(
        "{:<14} | {:<9} | {:<28} | {:>10} | {:>10}",
        "Algorithm", "Pattern", "File", "Total (s)", "µs/iter"
    );
    println!("{:-^80}", "");

    for entry in results {
        let total_s = entry.duration.as_secs_f64();
        let micros_per_iter = entry.duration.as_nanos() as f64 / 1000.0 / f64::from(REPEATS);

        let short_file = Path::new(&entry.file)
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();

        println!(
            "{:<14} | {:<9} | {:<28} | {:>10.4} | {:>10.2}",
            entry.algo, entry.pattern_kind, short_file, total_s, micros_per_iter
        );
    }
    println!("{:=^80}", " END ");
}
