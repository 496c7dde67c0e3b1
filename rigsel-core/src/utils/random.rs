#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::Error;
use rand::prelude::*;
use std::cell::{RefCell, UnsafeCell};
use std::rc::Rc;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation.
#[derive(Default)]
pub struct DefaultRandom {
    seed: Option<u64>,
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` which replays the same sequence of values for
    /// the same seed. Creating it rewinds the seeded stream of the current thread.
    pub fn new_with_seed(seed: u64) -> Self {
        SEEDED_RNG
            .with(|cell| *cell.borrow_mut() = Some((seed, Rc::new(UnsafeCell::new(SmallRng::seed_from_u64(seed))))));

        Self { seed: Some(seed) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max + 1)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.get_rng().gen_bool(probability.clamp(0., 1.))
    }

    fn get_rng(&self) -> RandomGen {
        let rng = match self.seed {
            Some(seed) => SEEDED_RNG.with(|cell| {
                let mut slot = cell.borrow_mut();
                match slot.as_ref() {
                    // keep the stream going as long as the seed stays the same
                    Some((used, rng)) if *used == seed => rng.clone(),
                    _ => {
                        let rng = Rc::new(UnsafeCell::new(SmallRng::seed_from_u64(seed)));
                        *slot = Some((seed, rng.clone()));
                        rng
                    }
                }
            }),
            None => DEFAULT_RNG.with(|t| t.clone()),
        };

        RandomGen::with_rng(rng)
    }
}

thread_local! {
    static DEFAULT_RNG: Rc<UnsafeCell<SmallRng>> =
        Rc::new(UnsafeCell::new(SmallRng::from_rng(thread_rng()).expect("cannot get RNG")));
    static SEEDED_RNG: RefCell<Option<(u64, Rc<UnsafeCell<SmallRng>>)>> = RefCell::new(None);
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Rc<UnsafeCell<SmallRng>>,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` using given reference to small rng.
    pub fn with_rng(rng: Rc<UnsafeCell<SmallRng>>) -> Self {
        Self { rng }
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        let rng = unsafe { &mut *self.rng.get() };
        rng.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        let rng = unsafe { &mut *self.rng.get() };
        rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let rng = unsafe { &mut *self.rng.get() };
        rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        let rng = unsafe { &mut *self.rng.get() };
        rng.try_fill_bytes(dest)
    }
}
