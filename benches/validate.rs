use criterion::{black_box, criterion_group, criterion_main, Criterion};
use whenrule::{ConditionGroup, GroupChild, property, render_group, validate};

fn expression_text(n: usize) -> String {
    let children: Vec<GroupChild> = (0..n)
        .map(|i| {
            if i % 2 == 0 {
                property(&format!("PROP_{i}_NUM")).gte(i as i64).into()
            } else {
                property(&format!("PROP_{i}_CDE"))
                    .eq_ignore_case("Y")
                    .into()
            }
        })
        .collect();
    render_group(&ConditionGroup::all(children).unwrap()).unwrap()
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for &n in &[4, 16, 64] {
        let text = expression_text(n);
        group.bench_function(&format!("{n}_conditions_clean"), |b| {
            b.iter(|| validate(black_box(&text)));
        });
    }

    // Malformed input exercises the diagnostic path.
    let broken = "(A && ) || @bogusFunc(X && {Rule Bad";
    group.bench_function("malformed", |b| {
        b.iter(|| validate(black_box(broken)));
    });

    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
