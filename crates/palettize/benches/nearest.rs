use criterion::{criterion_group, criterion_main, Criterion};
use palettize::color::{ColorFormat, Rgb};
use palettize::palette::{PaletteData, Variant};
use palettize::transform::transform;
use std::hint::black_box;

const DOCUMENT: &str = r##"<scheme name="Bench" version="142" parent_scheme="Darcula">
  <colors>
    <option name="CARET_COLOR" value="#bbbbbb"/>
    <option name="CARET_ROW_COLOR" value="#323232"/>
    <option name="CONSOLE_BACKGROUND_KEY" value="#2b2b2b"/>
    <option name="SELECTION_BACKGROUND" value="#214283cc"/>
  </colors>
  <attributes>
    <option name="DEFAULT_KEYWORD">
      <value>
        <option name="FOREGROUND" value="#cc7832"/>
        <option name="FONT_TYPE" value="1"/>
      </value>
    </option>
    <option name="DEFAULT_STRING">
      <value>
        <option name="FOREGROUND" value="#6a8759"/>
      </value>
    </option>
  </attributes>
</scheme>
"##;

pub fn run_benchmarks(c: &mut Criterion) {
    let data = PaletteData::builtin();
    let mocha = data.palette(Variant::Mocha).expect("built-in palette should be valid");
    let latte = data.palette(Variant::Latte).expect("built-in palette should be valid");
    let color = Rgb::new(0xcc, 0x78, 0x32).to_lab();

    let mut group = c.benchmark_group("nearest");
    group.bench_function("mocha", |b| b.iter(|| mocha.nearest(black_box(&color))));
    group.bench_function("latte", |b| b.iter(|| latte.nearest(black_box(&color))));
    group.finish();

    let mut group = c.benchmark_group("transform");
    group.bench_function("build-palette", |b| {
        b.iter(|| data.palette(black_box(Variant::Frappe)))
    });
    group.bench_function("document", |b| {
        b.iter(|| transform(black_box(DOCUMENT), &mocha, ColorFormat::Bracketed))
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
