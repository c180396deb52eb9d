//! Performance benchmarks for validation and sorting.
//!
//! Submissions are checked against every stored contact and the list is
//! re-sorted on every page view, so both scale with the size of a session's
//! store. These benchmarks measure them at a few store sizes.

use contacts_manager::{
    sort_contacts, validate_contact, Contact, ContactRepository, InMemoryContactRepository,
    NewContactForm, SeedData,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate `count` distinct, valid contacts.
fn create_contacts(count: usize) -> Vec<Contact> {
    let mut repo = InMemoryContactRepository::new();
    for i in 0..count {
        let form = NewContactForm::new(
            letters(i),
            letters(count - i),
            format!("555-{:03}-{:04}", i % 1000, i % 10000),
        );
        if let Ok(contact) = validate_contact(&form, &[]) {
            repo.append(contact);
        }
    }
    repo.list().to_vec()
}

/// Encode `n` as a letters-only name.
fn letters(mut n: usize) -> String {
    let mut name = String::from("N");
    loop {
        name.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            return name;
        }
    }
}

fn bench_validate_contact(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_contact");
    let form = NewContactForm::new("Aaron", "Banks", "555-123-4567");

    for size in [4, 100, 1000] {
        let contacts = create_contacts(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| validate_contact(black_box(&form), black_box(contacts)))
        });
    }

    group.finish();
}

fn bench_sort_contacts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_contacts");

    for size in [4, 100, 1000] {
        let contacts = create_contacts(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| sort_contacts(black_box(contacts)))
        });
    }

    group.finish();
}

fn bench_seed_copy(c: &mut Criterion) {
    let seed = SeedData::sample().expect("seed");
    c.bench_function("seeded_store", |b| {
        b.iter(|| InMemoryContactRepository::seeded(black_box(&seed)))
    });
}

criterion_group!(
    benches,
    bench_validate_contact,
    bench_sort_contacts,
    bench_seed_copy
);
criterion_main!(benches);
