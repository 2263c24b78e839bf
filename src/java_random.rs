use crate::error::RandomError;

// 48-bit LCG - must match the reference generator bit for bit
const MULTIPLIER: u64 = 0x5DEECE66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Strictly positive upper bound for [`JavaRandom::next_int_in`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Bound(i32);

impl Bound {
    pub const ONE: Bound = Bound::of_const(1);
    pub const TWO: Bound = Bound::of_const(2);
    pub const THREE: Bound = Bound::of_const(3);

    const fn of_const(value: i32) -> Self {
        assert!(value > 0);
        Bound(value)
    }

    pub fn new(value: i32) -> Result<Self, RandomError> {
        if value <= 0 {
            return Err(RandomError::InvalidArgument { bound: value });
        }
        Ok(Bound(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }

    pub fn is_power_of_two(self) -> bool {
        (self.0 & self.0.wrapping_neg()) == self.0
    }
}

impl TryFrom<i32> for Bound {
    type Error = RandomError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Bound::new(value)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JavaRandom {
    state: u64,
}

impl JavaRandom {
    pub fn new(seed: i64) -> Self {
        JavaRandom {
            state: Self::scramble(seed),
        }
    }

    fn scramble(seed: i64) -> u64 {
        (seed as u64 ^ MULTIPLIER) & MASK
    }

    /// Replaces the state as if the generator had just been built from `seed`.
    pub fn set_seed(&mut self, seed: i64) {
        self.state = Self::scramble(seed);
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the generator once and returns the top `bits` bits of the new
    /// state, reinterpreted as a signed 32-bit value.
    ///
    /// Panics if `bits` is outside `1..=32`.
    pub fn next_bits(&mut self, bits: u32) -> i32 {
        assert!((1..=32).contains(&bits), "next_bits: {} bits out of range", bits);
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.state >> (48 - bits)) as u32 as i32
    }

    pub fn next_int(&mut self) -> i32 {
        self.next_bits(32)
    }

    pub fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RandomError> {
        let bound = Bound::new(bound)?;
        Ok(self.next_int_in(bound))
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// Non power-of-two bounds use rejection sampling, so the number of draws
    /// consumed depends on the values drawn.
    pub fn next_int_in(&mut self, bound: Bound) -> i32 {
        let n = bound.get();
        if bound.is_power_of_two() {
            return ((n as i64 * self.next_bits(31) as i64) >> 31) as i32;
        }

        loop {
            let bits = self.next_bits(31);
            let val = bits % n;
            // Reject the partial bucket at the top of the 31-bit range
            if (bits - val).checked_add(n - 1).is_some() {
                return val;
            }
            log::debug!(
                "JavaRandom::next_int_in(): rejected sample {} for bound {}",
                bits,
                n
            );
        }
    }

    /// Uniform value in `[start, end]`, drawn as `start + next_int(end - start + 1)`.
    pub fn next_range(&mut self, start: i32, end: i32) -> Result<i32, RandomError> {
        let span = end
            .checked_sub(start)
            .and_then(|d| d.checked_add(1))
            .ok_or(RandomError::InvalidArgument {
                bound: end.wrapping_sub(start).wrapping_add(1),
            })?;
        let offset = self.next_int_bounded(span)?;
        Ok(start + offset)
    }

    pub fn next_boolean(&mut self) -> bool {
        self.next_bits(1) != 0
    }

    pub fn next_long(&mut self) -> i64 {
        let hi = self.next_bits(32) as i64;
        let lo = self.next_bits(32) as i64;
        (hi << 32).wrapping_add(lo)
    }

    pub fn next_float(&mut self) -> f32 {
        self.next_bits(24) as f32 * FLOAT_UNIT
    }

    pub fn next_double(&mut self) -> f64 {
        let hi = (self.next_bits(26) as i64) << 27;
        let lo = self.next_bits(27) as i64;
        (hi + lo) as f64 * DOUBLE_UNIT
    }
}
