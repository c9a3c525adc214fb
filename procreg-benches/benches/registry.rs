use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use procreg::core::NsPid;
use procreg::core::Pid;
use procreg::core::Registry;
use procreg::proc::Process;
use std::hint::black_box;
use std::sync::Barrier;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;
use triomphe::Arc;

const THREADS: &[usize] = &[2, 4, 6, 8, 10];

const ENTRIES: i32 = 1024;

fn populated() -> Arc<Registry<Process>> {
  let registry: Registry<Process> = Registry::new();

  for raw in 0..ENTRIES {
    registry.insert(Process::new(Pid::from_raw(raw), NsPid::from_raw(raw), None), false);
  }

  Arc::new(registry)
}

fn bench_lookup(criterion: &mut Criterion) {
  let mut group: BenchmarkGroup<_> = criterion.benchmark_group("registry_lookup");
  let registry: Arc<Registry<Process>> = populated();

  group.bench_function("single-threaded", |bench| {
    let mut raw: i32 = 0;

    bench.iter(|| {
      raw = (raw + 1) % ENTRIES;
      black_box(registry.lookup_by_nsid(&NsPid::from_raw(raw)));
    })
  });

  for threads in THREADS {
    let id: BenchmarkId = BenchmarkId::new("multi-threaded", threads);

    group.bench_with_input(id, threads, |bench, &threads| {
      bench.iter_custom(|iters| {
        let barrier: Arc<Barrier> = Arc::new(Barrier::new(threads + 1));
        let mut handles: Vec<JoinHandle<Duration>> = Vec::with_capacity(threads);

        for _ in 0..threads {
          let barrier: Arc<Barrier> = barrier.clone();
          let registry: Arc<Registry<Process>> = registry.clone();

          let handle: JoinHandle<Duration> = thread::spawn(move || {
            barrier.wait();

            let start: Instant = Instant::now();

            for iter in 0..iters {
              let raw: i32 = (iter % ENTRIES as u64) as i32;
              black_box(registry.lookup_by_id(&Pid::from_raw(raw)));
            }

            start.elapsed()
          });

          handles.push(handle);
        }

        barrier.wait();

        handles
          .into_iter()
          .map(|handle| handle.join().unwrap())
          .sum()
      })
    });
  }

  group.finish();
}

fn bench_register_remove(criterion: &mut Criterion) {
  let mut group: BenchmarkGroup<_> = criterion.benchmark_group("registry_churn");
  let registry: Registry<Process> = Registry::new();

  group.bench_function("register-remove", |bench| {
    bench.iter(|| {
      let process: Arc<Process> = registry.register_if_absent(NsPid::from_raw(1), |_| {
        Process::new(Pid::from_raw(1), NsPid::from_raw(1), None)
      });

      black_box(registry.remove(&process));
    })
  });

  group.finish();
}

criterion_group! {
  name = benches;
  config = Criterion::default();
  targets = bench_lookup, bench_register_remove
}

criterion_main!(benches);
