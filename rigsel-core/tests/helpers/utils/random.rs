use crate::utils::{Float, Random, RandomGen};
use rand::prelude::*;
use std::cell::UnsafeCell;
use std::rc::Rc;
use std::sync::Mutex;

struct FakeDistribution<T> {
    values: Vec<T>,
}

impl<T> FakeDistribution<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut values = values;
        values.reverse();
        Self { values }
    }

    pub fn next(&mut self) -> T {
        self.values.pop().unwrap()
    }
}

/// A random which returns predefined values: ints for `uniform_int`, reals for `uniform_real`
/// and `is_hit` (a hit happens when the next real is below the probability).
pub struct FakeRandom {
    ints: Mutex<FakeDistribution<i32>>,
    reals: Mutex<FakeDistribution<Float>>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<Float>) -> Self {
        Self { ints: Mutex::new(FakeDistribution::new(ints)), reals: Mutex::new(FakeDistribution::new(reals)) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        self.ints.lock().unwrap().next()
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min < max);
        self.reals.lock().unwrap().next()
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.uniform_real(0., 1.) < probability
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::with_rng(Rc::new(UnsafeCell::new(SmallRng::seed_from_u64(0))))
    }
}
