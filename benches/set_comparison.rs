use std::borrow::Borrow;
use std::hash::Hash;
use std::collections::BTreeSet;

use rand::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use recursive_bst::RecursiveBST;
// Looking to measure tree implementation, not hasher performance so using a faster hasher
use fnv::FnvHashSet as HashSet;

use bstree::BinarySearchTree;

/// The operations shared by every collection being compared
trait Set<T>: Default {
    fn search<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + Hash + Eq + ?Sized;

    fn insert(&mut self, value: T);

    fn remove<Q>(&mut self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + Hash + Eq + ?Sized;
}

macro_rules! impl_std_set {
    ($name:ident, $bound:ident $(+ $other_bound:ident)*) => {
        impl<T> Set<T> for $name<T>
            where T: $bound $(+ $other_bound)*,
        {
            fn search<Q>(&self, value: &Q) -> bool
                where T: Borrow<Q>,
                      Q: Ord + Hash + Eq + ?Sized
            {
                $name::contains(self, value)
            }

            fn insert(&mut self, value: T) {
                $name::insert(self, value);
            }

            fn remove<Q>(&mut self, value: &Q) -> bool
                where T: Borrow<Q>,
                      Q: Ord + Hash + Eq + ?Sized
            {
                $name::remove(self, value)
            }
        }
    };
}

macro_rules! impl_tree {
    ($name:ident) => {
        impl<T: Ord> Set<T> for $name<T> {
            fn search<Q>(&self, value: &Q) -> bool
                where T: Borrow<Q>,
                      Q: Ord + Hash + Eq + ?Sized
            {
                $name::search(self, value)
            }

            fn insert(&mut self, value: T) {
                $name::insert(self, value)
            }

            fn remove<Q>(&mut self, value: &Q) -> bool
                where T: Borrow<Q>,
                      Q: Ord + Hash + Eq + ?Sized
            {
                $name::remove(self, value)
            }
        }
    };
}

impl_std_set!(HashSet, Hash + Eq);
impl_std_set!(BTreeSet, Ord);
impl_tree!(RecursiveBST);
impl_tree!(BinarySearchTree);

#[derive(Debug, Clone)]
struct Values {
    values: Vec<i64>,
}

impl Values {
    /// Deterministically generates a set of at least `nvalues` values
    ///
    /// All values are guaranteed to be unique and ordered randomly.
    pub fn generate(nvalues: u32) -> Self {
        // Spread values out and shuffle them so the trees stay reasonably balanced
        let n = nvalues as i64;
        let mut values: Vec<i64> = (0..n).map(|i| (i - n/2) * 10).collect();

        // Use seed to make this deterministic
        let mut rng = StdRng::seed_from_u64(45930923092);
        values.shuffle(&mut rng);

        Self {values}
    }

    pub fn get(&self, value_i: usize) -> i64 {
        self.values[value_i]
    }
}

fn slice_max<T: Copy + Ord>(data: &[T]) -> T {
    data.iter().max().copied().expect("bug: slice was empty")
}

/// Builds a set from the first `count` values
fn fill<M: Set<i64>>(values: &Values, count: usize) -> M {
    let mut set = M::default();

    for value_i in 0..count {
        set.insert(black_box(values.get(value_i)));
    }

    set
}

/// Searches for every value, in the opposite order to how they were inserted
fn benchmark_searches<M: Set<i64>>(values: &Values, set: &M, searches: usize) {
    for i in 0..searches {
        let value = values.get(searches - i - 1);
        black_box(set.search(&value));
        // Values are multiples of 10, so this is never present
        black_box(set.search(&(value + 1)));
    }
}

/// Removes every value, in the opposite order to how they were inserted
fn benchmark_removes<M: Set<i64>>(values: &Values, mut set: M, removes: usize) -> M {
    for i in 0..removes {
        let value = values.get(removes - i - 1);
        black_box(set.remove(&value));
        // Should always yield `false` since the value has been removed
        black_box(set.remove(&value));
    }

    set
}

pub fn bench_insert(c: &mut Criterion) {
    const INSERTS: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(INSERTS) as u32);

    let mut group = c.benchmark_group("insert");
    for inserts in INSERTS {
        group.bench_with_input(BenchmarkId::new("HashSet", inserts), inserts, |b, &inserts| {
            b.iter(|| fill::<HashSet<i64>>(&values, inserts))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", inserts), inserts, |b, &inserts| {
            b.iter(|| fill::<BTreeSet<i64>>(&values, inserts))
        });
        group.bench_with_input(BenchmarkId::new("RecursiveBST", inserts), inserts, |b, &inserts| {
            b.iter(|| fill::<RecursiveBST<i64>>(&values, inserts))
        });
        group.bench_with_input(BenchmarkId::new("BinarySearchTree", inserts), inserts, |b, &inserts| {
            b.iter(|| fill::<BinarySearchTree<i64>>(&values, inserts))
        });
    }
    group.finish();
}

pub fn bench_search(c: &mut Criterion) {
    const SEARCHES: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(SEARCHES) as u32);

    let mut group = c.benchmark_group("search");
    for searches in SEARCHES {
        group.bench_with_input(BenchmarkId::new("HashSet", searches), searches, |b, &searches| {
            let set = fill::<HashSet<i64>>(&values, searches);
            b.iter(|| benchmark_searches(&values, &set, searches))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", searches), searches, |b, &searches| {
            let set = fill::<BTreeSet<i64>>(&values, searches);
            b.iter(|| benchmark_searches(&values, &set, searches))
        });
        group.bench_with_input(BenchmarkId::new("RecursiveBST", searches), searches, |b, &searches| {
            let set = fill::<RecursiveBST<i64>>(&values, searches);
            b.iter(|| benchmark_searches(&values, &set, searches))
        });
        group.bench_with_input(BenchmarkId::new("BinarySearchTree", searches), searches, |b, &searches| {
            let set = fill::<BinarySearchTree<i64>>(&values, searches);
            b.iter(|| benchmark_searches(&values, &set, searches))
        });
    }
    group.finish();
}

pub fn bench_remove(c: &mut Criterion) {
    const REMOVES: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(REMOVES) as u32);

    let mut group = c.benchmark_group("remove");
    for removes in REMOVES {
        group.bench_with_input(BenchmarkId::new("HashSet", removes), removes, |b, &removes| {
            let set = fill::<HashSet<i64>>(&values, removes);
            b.iter_with_setup(|| set.clone(), |set| benchmark_removes(&values, set, removes))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", removes), removes, |b, &removes| {
            let set = fill::<BTreeSet<i64>>(&values, removes);
            b.iter_with_setup(|| set.clone(), |set| benchmark_removes(&values, set, removes))
        });
        group.bench_with_input(BenchmarkId::new("RecursiveBST", removes), removes, |b, &removes| {
            let set = fill::<RecursiveBST<i64>>(&values, removes);
            b.iter_with_setup(|| set.clone(), |set| benchmark_removes(&values, set, removes))
        });
        group.bench_with_input(BenchmarkId::new("BinarySearchTree", removes), removes, |b, &removes| {
            let set = fill::<BinarySearchTree<i64>>(&values, removes);
            b.iter_with_setup(|| set.clone(), |set| benchmark_removes(&values, set, removes))
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_insert,
    bench_search,
    bench_remove,
);

criterion_main!(benches);
