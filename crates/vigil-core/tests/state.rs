use vigil_core::{mask, validate_fact_space, ConfigError, Fact, Mask, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Toy {
    A,
    B,
    C,
}

impl Fact for Toy {
    const ALL: &'static [Self] = &[Toy::A, Toy::B, Toy::C];

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn name(self) -> &'static str {
        match self {
            Toy::A => "a",
            Toy::B => "b",
            Toy::C => "c",
        }
    }
}

#[test]
fn mask_ors_single_bit_values() {
    assert_eq!(mask(&[Toy::A]), 0b001);
    assert_eq!(mask(&[Toy::A, Toy::C]), 0b101);
    assert_eq!(mask::<Toy>(&[]), 0);
}

#[test]
fn with_without_has_round_trip() {
    let s = State::default().with(Toy::B);
    assert!(s.has(Toy::B));
    assert!(!s.has(Toy::A));
    assert_eq!(s.bits(), 0b010);

    let s = s.without(Toy::B);
    assert!(!s.has(Toy::B));
    assert_eq!(s, State::default());

    // without() on a clear bit is a no-op
    assert_eq!(s.without(Toy::C), s);
}

#[test]
fn satisfies_requires_all_goal_bits() {
    let s = State::new(mask(&[Toy::A, Toy::B]));
    assert!(s.satisfies(mask(&[Toy::A])));
    assert!(s.satisfies(mask(&[Toy::A, Toy::B])));
    assert!(!s.satisfies(mask(&[Toy::A, Toy::C])));
    // the empty goal is satisfied by every state
    assert!(State::default().satisfies(0));
}

#[test]
fn states_are_value_equal() {
    let a = State::new(0b11).without(Toy::B);
    let b = State::default().with(Toy::A);
    assert_eq!(a, b);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Overflowing {
    Ok,
    TooWide,
}

impl Fact for Overflowing {
    const ALL: &'static [Self] = &[Overflowing::Ok, Overflowing::TooWide];

    fn ordinal(self) -> u32 {
        match self {
            Overflowing::Ok => 0,
            Overflowing::TooWide => Mask::BITS,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Overflowing::Ok => "ok",
            Overflowing::TooWide => "too_wide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Clashing {
    First,
    Second,
}

impl Fact for Clashing {
    const ALL: &'static [Self] = &[Clashing::First, Clashing::Second];

    fn ordinal(self) -> u32 {
        3
    }

    fn name(self) -> &'static str {
        match self {
            Clashing::First => "first",
            Clashing::Second => "second",
        }
    }
}

#[test]
fn validation_accepts_a_dense_fact_space() {
    assert_eq!(validate_fact_space::<Toy>(), Ok(()));
}

#[test]
fn validation_rejects_ordinal_overflow() {
    assert_eq!(
        validate_fact_space::<Overflowing>(),
        Err(ConfigError::FactOverflow {
            fact: "too_wide",
            ordinal: Mask::BITS,
            width: Mask::BITS,
        })
    );
}

#[test]
fn validation_rejects_shared_bits() {
    assert_eq!(
        validate_fact_space::<Clashing>(),
        Err(ConfigError::DuplicateFactBit {
            first: "first",
            second: "second",
            ordinal: 3,
        })
    );
}
