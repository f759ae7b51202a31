//! Criterion benchmarks for u-timetable.
//!
//! Synthetic course lists over the weekly universe measure fitness
//! evaluation on its own and full GA runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_timetable::ga::GaConfig;
use u_timetable::random::create_rng;
use u_timetable::timetable::{evaluate, solve, Chromosome, Course, CourseRecord, Timetable};

const DAYS: [&str; 5] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat"];

fn synthetic_week(courses: usize) -> Timetable {
    let records = (0..courses)
        .map(|i| {
            let record = CourseRecord::new(
                format!("MK{i:03}"),
                format!("Course {i}"),
                format!("Lecturer {}", i % 7),
            )
            .with_duration(1 + (i % 3) as u32);
            if i % 2 == 0 {
                record.with_preferred_day(DAYS[i % DAYS.len()])
            } else {
                record
            }
        })
        .collect();
    Timetable::weekly(Course::from_records(records).expect("synthetic records are valid"))
        .expect("weekly universe is non-empty")
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for &n in &[5usize, 50, 200] {
        let tt = synthetic_week(n);
        let mut rng = create_rng(42);
        let chromosome = Chromosome::random(&tt, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(tt, chromosome), |b, (t, ch)| {
            b.iter(|| black_box(evaluate(black_box(t), black_box(ch))))
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for (courses, pop, gen) in [(5usize, 50usize, 100usize), (30, 100, 100), (100, 100, 50)] {
        let tt = synthetic_week(courses);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("c{}_p{}_g{}", courses, pop, gen), courses),
            &(tt, config),
            |b, (t, cfg)| {
                b.iter(|| {
                    let solution = solve(black_box(t), black_box(cfg)).expect("valid config");
                    black_box(solution)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_solve);
criterion_main!(benches);
