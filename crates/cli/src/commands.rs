//! Command handlers. Each prints its own output and reports success.

use lectern_finder::error::Error;
use lectern_finder::{Finder, Passage, Reference};

fn report(context: &str, err: &Error) {
    tracing::debug!(error = ?err, "{context}");
    eprintln!("✗ {context}: {}", **err);
}

fn print_passage(passage: &Passage) {
    println!("{} ({}) [{}]", passage.reference, passage.version, passage.source);
    println!("{}", passage.text);
}

pub async fn fetch(finder: &Finder, texts: &[String]) -> bool {
    let mut references = Vec::with_capacity(texts.len());
    let mut succeeded = true;
    for text in texts {
        match finder.parse(text) {
            Ok(reference) => references.push(reference),
            Err(err) => {
                report(text, &err);
                succeeded = false;
            },
        }
    }
    let batch = finder.fetch_multiple(&references).await;
    for (index, passage) in batch.passages.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_passage(passage);
    }
    for failure in &batch.errors {
        report(&references[failure.index].to_string(), &failure.error);
    }
    succeeded && batch.is_success()
}

fn describe(reference: &Reference) -> String {
    let mut fields = vec![format!("book: {}", reference.book), format!("chapter: {}", reference.chapter)];
    if let Some(end) = reference.end_chapter {
        fields.push(format!("end chapter: {end}"));
    }
    if let Some(start) = reference.start_verse {
        fields.push(format!("start verse: {start}"));
    }
    if let Some(end) = reference.end_verse {
        fields.push(format!("end verse: {end}"));
    }
    fields.push(format!("version: {}", reference.version));
    fields.join(", ")
}

pub fn parse(finder: &Finder, texts: &[String]) -> bool {
    let mut succeeded = true;
    for text in texts {
        match finder.parse(text) {
            Ok(reference) => println!("{text} → {}", describe(&reference)),
            Err(err) => {
                report(text, &err);
                succeeded = false;
            },
        }
    }
    succeeded
}

pub async fn test(finder: &Finder, book: &str, chapter: u16, verse: u16, version: &str) -> bool {
    println!("Testing providers with {book} {chapter}:{verse} ({version})...");
    println!("Providers: {:?}", finder.providers().iter().map(ToString::to_string).collect::<Vec<_>>());
    match finder.fetch_verse(book, chapter, Some(verse), None, version, None).await {
        Ok(passage) => {
            println!("✓ Connection successful");
            println!();
            println!("Reference: {}", passage.reference);
            println!("Version: {}", passage.version);
            println!("Source: {}", passage.source);
            println!();
            println!("{}", passage.text);
            println!();
            println!("Fetched at: {}", passage.fetched_at);
            true
        },
        Err(err) => {
            report("request failed", &err);
            false
        },
    }
}

fn format_size(bytes: u64) -> String {
    match bytes {
        0..1024 => format!("{bytes} B"),
        1024..1_048_576 => format!("{:.2} KB", bytes as f64 / 1024.0),
        _ => format!("{:.2} MB", bytes as f64 / 1_048_576.0),
    }
}

pub async fn download(finder: &Finder, versions: &[String]) -> bool {
    if versions.is_empty() {
        eprintln!("Specify versions to download or use --all, e.g. `lectern download kjv web`");
        return false;
    }
    println!("Downloading {} version(s)...", versions.len());
    let mut failed = 0;
    for version in versions {
        let version = version.to_uppercase();
        match finder.download_snapshot(&version).await {
            Ok(size) => println!("  ✓ {version} ({})", format_size(size)),
            Err(err) => {
                report(&format!("  {version}"), &err);
                failed += 1;
            },
        }
    }
    println!("Download complete: {} successful, {failed} failed", versions.len() - failed);
    failed == 0
}

pub async fn list(finder: &Finder) -> bool {
    let statuses = match finder.snapshot_status().await {
        Ok(statuses) => statuses,
        Err(err) => {
            report("could not read snapshot status", &err);
            return false;
        },
    };
    println!("{:<8} {:<28} {:<11} {:<10} Downloadable", "Version", "Name", "Downloaded", "Size");
    for status in statuses {
        println!(
            "{:<8} {:<28} {:<11} {:<10} {}",
            status.version,
            status.name,
            if status.downloaded { "✓" } else { "✗" },
            status.size.map(format_size).unwrap_or_else(|| "-".to_string()),
            if status.downloadable { "Yes" } else { "No" },
        );
    }
    match finder.cached_passages().await {
        Ok(Some(count)) => println!("\nCached passages: {count}"),
        Ok(None) => println!("\nPassage cache disabled"),
        Err(err) => {
            report("could not read the passage cache", &err);
            return false;
        },
    }
    true
}

pub async fn clear_cache(finder: &Finder, expired_only: bool) -> bool {
    let result = match expired_only {
        true => finder.purge_expired_cache().await,
        false => finder.clear_cache().await,
    };
    match result {
        Ok(removed) if expired_only => {
            println!("✓ Expired passages removed ({removed})");
            true
        },
        Ok(removed) => {
            println!("✓ Cache cleared ({removed} passages removed)");
            true
        },
        Err(err) => {
            report("failed to clear cache", &err);
            false
        },
    }
}

pub fn books(finder: &Finder) -> bool {
    for book in finder.books() {
        let testament = book.testament.as_short_str().to_uppercase();
        println!("{:>2}. {:<16} {testament}  {} chapters", book.ordinal, book.name, book.chapter_count());
    }
    true
}

pub fn versions(finder: &Finder) -> bool {
    for version in finder.versions() {
        let marker = if version.code == finder.default_version() { " (default)" } else { "" };
        println!("{}{marker}", version.label());
    }
    true
}
