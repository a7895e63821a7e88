// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use dm_screen::{
    config::options::EncounterSource,
    extract::extract,
    specs,
};

// Roughly page-sized: a few KB of script/style noise around repeated prose.
fn sample_page() -> String {
    let mut page = String::from("<html><head><script>window.dataLayer = [];</script><style>p{}</style></head><body>");
    page.push_str("<nav>Dungeon City Grassland Forest</nav><div class=\"mw-parser-output\"><h2>D1 Random City Encounters</h2>");
    for i in 0..400 {
        page.push_str(&format!(
            "<p>Encounter {i}: a merchant&rsquo;s cart overturns. The guards arrive <b>late</b>!</p>\n"
        ));
    }
    page.push_str("<p>Generated by GPT-3.</p></div></body></html>");
    page
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_page();
    let anchors = specs::encounters::request(EncounterSource::City).spec;
    let selector = specs::conditions::request("Prone").map(|r| r.spec).expect("known condition");

    c.bench_function("extract_anchors", |b| {
        b.iter(|| {
            let out = extract(black_box(&doc), black_box(&anchors));
            black_box(out.lines.len())
        })
    });

    c.bench_function("extract_selector", |b| {
        b.iter(|| {
            let out = extract(black_box(&doc), black_box(&selector));
            black_box(out.lines.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
