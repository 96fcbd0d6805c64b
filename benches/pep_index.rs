// benches/pep_index.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

use pep_scrape::specs::{pep_index, pep_page};

const CODES: &[&str] = &["SF", "SA", "IA", "PA", "SD", "SW", "SR", "SS", "SP", "I"];

/// Roughly the shape of the live index: a few tables, ~700 rows each.
fn synthetic_index(tables: usize, rows: usize) -> String {
    let mut html = String::from("<html><body>");
    for t in 0..tables {
        html.push_str(r#"<table class="pep-zero-table docutils align-default"><thead><tr><th>Type</th><th>PEP</th></tr></thead><tbody>"#);
        for r in 0..rows {
            let class = if r % 2 == 0 { "row-odd" } else { "row-even" };
            let code = CODES[(t + r) % CODES.len()];
            html.push_str(&format!(
                r#"<tr class="{class}"><td><abbr title="x">{code}</abbr></td><td><a class="pep reference internal" href="pep-{r:04}/">{r}</a></td><td>Title {r}</td><td>Author</td></tr>"#
            ));
        }
        html.push_str("</tbody></table>");
    }
    html.push_str("</body></html>");
    html
}

fn bench_index(c: &mut Criterion) {
    let html = synthetic_index(4, 700);
    let base = Url::parse("https://peps.python.org/").unwrap();

    c.bench_function("pep_index_parse", |b| {
        b.iter(|| {
            let records = pep_index::parse_index(black_box(&html), &base).unwrap();
            black_box(records.len())
        })
    });
}

fn bench_page(c: &mut Criterion) {
    let mut html = String::from("<html><head><script>var x = '<dl>';</script></head><body>");
    html.push_str(r#"<dl class="rfc2822 field-list simple">"#);
    for f in ["Author", "Discussions-To", "Status", "Type", "Created"] {
        html.push_str(&format!(r#"<dt>{f}<span class="colon">:</span></dt><dd>{f} value</dd>"#));
    }
    html.push_str("</dl>");
    html.push_str(&"<p>Body text &amp; more.</p>".repeat(2000));
    html.push_str("</body></html>");

    c.bench_function("pep_page_status", |b| {
        b.iter(|| black_box(pep_page::observed_status(black_box(&html)).unwrap()))
    });
}

criterion_group!(benches, bench_index, bench_page);
criterion_main!(benches);
