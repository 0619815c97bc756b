use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordmath::{
    environment::Environment,
    runner::{eval_expression, Runner},
    Value,
};

const EXPRESSION: &str =
    "( two power ten minus one ) times ( three plus four ) divided_by seven plus x";

const PROGRAM: &str = "
# running totals
x = five plus six times two
y = ( x minus one ) times x
z = y divided_by four power two
print x
print y
print z
";

fn eval_benchmark(c: &mut Criterion) {
    c.bench_function("expression", |b| {
        let mut env = Environment::new();
        env.set("x", Value::Integer(3));
        b.iter(|| {
            eval_expression(black_box(EXPRESSION), &env).unwrap();
        })
    });

    c.bench_function("program", |b| {
        b.iter(|| {
            let mut runner = Runner::with_sink(Vec::new());
            runner.run(black_box(PROGRAM)).unwrap();
        })
    });
}

criterion_group!(benches, eval_benchmark);
criterion_main!(benches);
