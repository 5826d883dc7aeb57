// benches/view_model_bench.rs
//! Benchmarks for listing normalization: the view model is rebuilt on every
//! render, so its cost scales with the number of cards shown.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use realestate_browser::formatting::render_building_list;
use realestate_browser::{
    parse_apartment_sizes, parse_image_list, CanonicalListingView, RawField, RawListingRecord,
};
use serde_json::json;

/// Records mixing every encoding the scrapers produce.
fn create_sample_records(count: usize) -> Vec<RawListingRecord> {
    (0..count)
        .map(|i| {
            let images = if i % 2 == 0 {
                json!(format!(
                    "[\"https://img.example/{i}/1.jpg\",\"https://img.example/{i}/2.jpg\"]"
                ))
            } else {
                json!([format!("https://img.example/{i}/1.jpg")])
            };
            let price = if i % 3 == 0 {
                json!(format!("{}", 250000 + i * 1000))
            } else {
                json!(250000 + i * 1000)
            };
            serde_json::from_value(json!({
                "a_id": i,
                "a_title": format!("Immeuble {}", i),
                "a_price": price,
                "a_surfaceArea": 80 + (i % 40),
                "a_city": "Lyon",
                "a_postalCode": "69003",
                "llm_residential_office": if i % 4 == 0 { "office" } else { "residential" },
                "a_images": images,
                "llm_flatSizes": "25, 32.5, abc, -1, 48",
                "llm_other": "parking, ascenseur, cave",
                "c_taxHab": 0.21,
                "c_taxFonc": "0.3215",
                "c_vacancy": 0.074,
                "c_vacancyCat": 6,
                "c_revenue": 23150,
                "c_revenueCat": 4
            }))
            .unwrap_or_default()
        })
        .collect()
}

fn bench_field_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_parsers");

    let json_images = RawField::from(r#"["a.jpg","b.jpg","c.jpg","d.jpg"]"#);
    let csv_images = RawField::from("a.jpg, b.jpg, c.jpg, d.jpg");
    let sizes = RawField::from("30, -5, abc, 45, 62.5, 0, 18");

    group.bench_function("image_list_json", |b| {
        b.iter(|| parse_image_list(black_box(&json_images)))
    });
    group.bench_function("image_list_csv", |b| {
        b.iter(|| parse_image_list(black_box(&csv_images)))
    });
    group.bench_function("apartment_sizes", |b| {
        b.iter(|| parse_apartment_sizes(black_box(&sizes)))
    });

    group.finish();
}

fn bench_view_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_model");

    for count in [10, 100, 1000] {
        let records = create_sample_records(count);
        group.bench_with_input(BenchmarkId::new("build", count), &records, |b, records| {
            b.iter(|| {
                records
                    .iter()
                    .map(CanonicalListingView::build)
                    .collect::<Vec<_>>()
            })
        });

        let views: Vec<_> = records.iter().map(CanonicalListingView::build).collect();
        group.bench_with_input(BenchmarkId::new("render_list", count), &views, |b, views| {
            b.iter(|| render_building_list(black_box(views)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_field_parsers, bench_view_model);
criterion_main!(benches);
