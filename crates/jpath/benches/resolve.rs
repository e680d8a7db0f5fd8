use codspeed_criterion_compat::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jpath::Document;

static CONFIG: &str = r##"#
#  /etc/profile.conf
#
{
    "organizer": {
        "name": "John Smith",
        "age": 33,
        "address": {
            "city": "Springfield",
            "street": {
                "name": "Evergreen Terrace",
                "number": 742
            }
        }
    },
    "version": 1.5
}
"##;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("with comments", |b| {
        b.iter(|| {
            jpath::options()
                .strip_comments(true)
                .parse_from_str(CONFIG)
                .expect("Valid config")
        });
    });
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let document = jpath::options()
        .strip_comments(true)
        .parse_from_str(CONFIG)
        .expect("Valid config");

    let mut group = c.benchmark_group("lookup");
    for path in [
        "version",
        "organizer/age",
        "organizer/address/street/name",
        "organizer/missing",
    ] {
        group.bench_with_input(BenchmarkId::new("string", path), path, |b, path| {
            b.iter(|| lookup(&document, path));
        });
    }
    group.finish();
}

fn lookup(document: &Document, path: &str) -> Option<String> {
    document.get_key_string_by_path(path).ok()
}

criterion_group!(benches, bench_parse, bench_lookup);
criterion_main!(benches);
