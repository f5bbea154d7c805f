use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vigil_core::{Descriptor, Mask, State};
use vigil_goap::Planner;

fn bit_ladder(bits: u32) -> (Vec<Descriptor>, State, Mask) {
    let mut actions = Vec::with_capacity(bits as usize);
    for i in 0..bits {
        actions.push(Descriptor {
            name: "set_bit",
            cost: 1.0,
            pre: 0,
            add: 1 << i,
            del: 0,
        });
    }

    let start = State::new(0);
    let goal = if bits >= Mask::BITS {
        Mask::MAX
    } else {
        (1 << bits) - 1
    };
    (actions, start, goal)
}

fn bench_planner(c: &mut Criterion) {
    let (actions, start, goal) = bit_ladder(8);
    let planner = Planner::new();

    c.bench_function("vigil-goap/planner.plan(bits=8)", |b| {
        b.iter(|| {
            let plan = planner.plan(start, goal, &actions).expect("plan");
            black_box(plan.steps.len());
        })
    });
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
