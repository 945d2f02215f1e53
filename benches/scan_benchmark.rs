//! Benchmarks for ACL scan throughput.
//!
//! Run with: cargo bench

use acl_searcher::{parse_targets, AclEntry, Mode, ParsedLine, Scanner, SearchOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io;

/// Generate an ACL config mixing every field form plus noise lines.
fn generate_config(entries: usize) -> String {
    let mut config = String::with_capacity(entries * 48);
    for i in 0..entries {
        let a = (i / 256) % 256;
        let b = i % 256;
        let line = match i % 6 {
            0 => format!("access-list 101 permit tcp any host 10.{}.{}.1 eq 443", a, b),
            1 => format!("access-list 101 deny ip 172.{}.{}.0 0.0.0.255 any", a % 16 + 16, b),
            2 => format!("access-list 101 permit udp host 192.168.{}.{} any range 1024 65535", a, b),
            3 => format!("! access-list 101 permit ip any 10.{}.0.0 0.0.255.255", b),
            4 => format!("access-list 101 permit ip host 10.{}.{}.999 any", a, b),
            _ => format!("interface Vlan{}", i),
        };
        config.push_str(&line);
        config.push('\n');
    }
    config
}

fn bench_classify(c: &mut Criterion) {
    let config = generate_config(10_000);
    let lines: Vec<&str> = config.lines().collect();

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(lines.len() as u64));

    group.bench_function("structure_only", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(AclEntry::classify(line));
            }
        })
    });

    group.bench_function("with_resolution", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(ParsedLine::parse(line));
            }
        })
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for entries in [1_000, 10_000, 100_000] {
        let config = generate_config(entries);
        let targets = parse_targets(["10.0.0.0/16", "8.8.8.8"]).unwrap();
        group.throughput(Throughput::Elements(entries as u64));

        for (name, mode) in [("default", Mode::Default), ("any_only", Mode::AnyOnly)] {
            let options = SearchOptions::new().with_comments(true).with_mode(mode);
            group.bench_with_input(BenchmarkId::new(name, entries), &config, |b, config| {
                b.iter(|| {
                    let mut scanner = Scanner::new(targets.clone(), options.clone(), io::sink());
                    scanner.scan(config.as_bytes()).unwrap();
                    black_box(scanner.finish().unwrap())
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_scan);

criterion_main!(benches);
