//! Obligation semantics of generator output for specs with required
//! properties.
//!
//! `Record` is the required-mix spec (required scalar, required reference,
//! optional reference); `Pair` tracks two scalars in one obligation word and
//! adds a required array checked by the constructor.

use immutix::{CachedHash, CachedText, HashCode, Immutable, ValueNotProvidedError, type_name_hash};
use std::fmt;

pub trait Record {
    fn a(&self) -> i32;
    fn b(&self) -> &String;
    fn c(&self) -> Option<&String>;
}

#[derive(Debug)]
pub struct ImmutableRecord {
    a: i32,
    b: String,
    c: Option<String>,
    cached_hash: CachedHash,
    cached_text: CachedText,
}

impl ImmutableRecord {
    pub fn new(
        a: i32,
        b: Option<String>,
        c: Option<String>,
    ) -> Result<Self, ValueNotProvidedError> {
        let Some(b) = b else {
            return Err(ValueNotProvidedError::for_property("b"));
        };
        Ok(Self {
            a,
            b,
            c,
            cached_hash: CachedHash::new(),
            cached_text: CachedText::new(),
        })
    }

    pub fn hash_code(&self) -> i32 {
        self.cached_hash.get_or_compute(|| {
            let mut hash = type_name_hash("demo::Record");
            hash ^= self.a;
            hash ^= HashCode::hash_code(&self.b);
            hash ^= HashCode::hash_code(&self.c);
            hash
        })
    }

    fn rendered(&self) -> std::sync::Arc<str> {
        self.cached_text.get_or_compute(|| {
            let mut out = String::new();
            out.push_str("Record@");
            out.push_str(&format!("{:08x}", self as *const Self as usize as u32));
            out.push_str("{ ");
            out.push_str("a = ");
            out.push_str(&format!("<{}>", self.a));
            out.push_str(", ");
            out.push_str("b = ");
            out.push_str(&format!("<{:?}>", self.b));
            out.push_str(", ");
            out.push_str("c = ");
            match self.c.as_ref() {
                Some(value) => out.push_str(&format!("<{:?}>", value)),
                None => out.push_str("@null"),
            }
            out.push_str(" }");
            out
        })
    }
}

impl Record for ImmutableRecord {
    fn a(&self) -> i32 {
        self.a
    }
    fn b(&self) -> &String {
        &self.b
    }
    fn c(&self) -> Option<&String> {
        self.c.as_ref()
    }
}

impl Immutable for ImmutableRecord {
    fn clear(&self) {
        self.cached_hash.clear();
        self.cached_text.clear();
    }
}

impl PartialEq for ImmutableRecord {
    fn eq(&self, other: &Self) -> bool {
        if self.a != other.a {
            return false;
        }
        if self.b != other.b {
            return false;
        }
        if self.c != other.c {
            return false;
        }
        true
    }
}

impl fmt::Display for ImmutableRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered())
    }
}

pub struct RecordBuilder {
    a: i32,
    b: Option<String>,
    c: Option<String>,
    checked: [u32; 1],
}

impl RecordBuilder {
    pub fn create() -> Self {
        Self {
            a: 0,
            b: None,
            c: None,
            checked: [0xfffffffe],
        }
    }

    pub fn from(value: &impl Record) -> Self {
        let mut builder = Self::create();
        builder.a(value.a());
        builder.b(value.b().clone());
        if let Some(v) = value.c() {
            builder.c(v.clone());
        }
        builder
    }

    pub fn a(&mut self, value: i32) -> &mut Self {
        self.a = value;
        self.checked[0] |= 1 << 0;
        self
    }

    pub fn b(&mut self, value: String) -> &mut Self {
        self.b = Some(value);
        self
    }

    pub fn c(&mut self, value: String) -> &mut Self {
        self.c = Some(value);
        self
    }

    pub fn build(&self) -> Result<ImmutableRecord, ValueNotProvidedError> {
        if self.checked[0] != u32::MAX {
            return Err(ValueNotProvidedError::for_property("a"));
        }
        ImmutableRecord::new(self.a, self.b.clone(), self.c.clone())
    }
}

pub trait Pair {
    fn x(&self) -> i32;
    fn y(&self) -> bool;
    fn tags(&self) -> &[i32];
}

#[derive(Debug)]
pub struct ImmutablePair {
    x: i32,
    y: bool,
    tags: Vec<i32>,
    cached_hash: CachedHash,
    cached_text: CachedText,
}

impl ImmutablePair {
    pub fn new(x: i32, y: bool, tags: Option<Vec<i32>>) -> Result<Self, ValueNotProvidedError> {
        let Some(tags) = tags else {
            return Err(ValueNotProvidedError::for_property("tags"));
        };
        Ok(Self {
            x,
            y,
            tags,
            cached_hash: CachedHash::new(),
            cached_text: CachedText::new(),
        })
    }

    pub fn hash_code(&self) -> i32 {
        self.cached_hash.get_or_compute(|| {
            let mut hash = type_name_hash("demo::Pair");
            hash ^= self.x;
            hash ^= i32::from(self.y);
            hash ^= HashCode::hash_code(&self.tags);
            hash
        })
    }

    fn rendered(&self) -> std::sync::Arc<str> {
        self.cached_text.get_or_compute(|| {
            let mut out = String::new();
            out.push_str("Pair@");
            out.push_str(&format!("{:08x}", self as *const Self as usize as u32));
            out.push_str("{ ");
            out.push_str("x = ");
            out.push_str(&format!("<{}>", self.x));
            out.push_str(", ");
            out.push_str("y = ");
            out.push_str(&format!("<{}>", self.y));
            out.push_str(", ");
            out.push_str("tags = ");
            out.push_str(&format!("<{:?}>", self.tags));
            out.push_str(" }");
            out
        })
    }
}

impl Pair for ImmutablePair {
    fn x(&self) -> i32 {
        self.x
    }
    fn y(&self) -> bool {
        self.y
    }
    fn tags(&self) -> &[i32] {
        &self.tags
    }
}

impl Immutable for ImmutablePair {
    fn clear(&self) {
        self.cached_hash.clear();
        self.cached_text.clear();
    }
}

impl PartialEq for ImmutablePair {
    fn eq(&self, other: &Self) -> bool {
        if self.x != other.x {
            return false;
        }
        if self.y != other.y {
            return false;
        }
        if self.tags != other.tags {
            return false;
        }
        true
    }
}

impl fmt::Display for ImmutablePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered())
    }
}

pub struct PairBuilder {
    x: i32,
    y: bool,
    tags: Option<Vec<i32>>,
    checked: [u32; 1],
}

impl PairBuilder {
    pub fn create() -> Self {
        Self {
            x: 0,
            y: false,
            tags: None,
            checked: [0xfffffffc],
        }
    }

    pub fn from(value: &impl Pair) -> Self {
        let mut builder = Self::create();
        builder.x(value.x());
        builder.y(value.y());
        builder.tags(value.tags().to_vec());
        builder
    }

    pub fn x(&mut self, value: i32) -> &mut Self {
        self.x = value;
        self.checked[0] |= 1 << 0;
        self
    }

    pub fn y(&mut self, value: bool) -> &mut Self {
        self.y = value;
        self.checked[0] |= 1 << 1;
        self
    }

    pub fn tags(&mut self, value: Vec<i32>) -> &mut Self {
        self.tags = Some(value);
        self
    }

    pub fn build(&self) -> Result<ImmutablePair, ValueNotProvidedError> {
        if self.checked[0] != u32::MAX {
            let mut missing: Vec<&str> = Vec::new();
            if self.checked[0] & (1 << 0) == 0 {
                missing.push("x");
            }
            if self.checked[0] & (1 << 1) == 0 {
                missing.push("y");
            }
            return Err(ValueNotProvidedError::for_properties(missing.join(", ")));
        }
        ImmutablePair::new(self.x, self.y, self.tags.clone())
    }
}

#[test]
fn missing_required_reference_names_it() {
    let err = RecordBuilder::create().a(1).build().unwrap_err();
    assert_eq!(err, ValueNotProvidedError::for_property("b"));
}

#[test]
fn missing_required_scalar_names_it() {
    let err = RecordBuilder::create().b("x".to_string()).build().unwrap_err();
    assert_eq!(err, ValueNotProvidedError::for_property("a"));
}

#[test]
fn satisfied_obligations_build_with_null_optional() {
    let record = RecordBuilder::create()
        .a(1)
        .b("x".to_string())
        .build()
        .unwrap();

    assert_eq!(record.a(), 1);
    assert_eq!(record.b(), "x");
    assert_eq!(record.c(), None);
    assert!(record.to_string().contains("c = @null"));
}

#[test]
fn builder_is_reusable_after_failure_and_success() {
    let mut builder = RecordBuilder::create();
    builder.a(1);
    assert!(builder.build().is_err());

    builder.b("x".to_string());
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);

    builder.c("extra".to_string());
    let third = builder.build().unwrap();
    assert_ne!(first, third);
}

#[test]
fn record_round_trips_through_from() {
    let original = RecordBuilder::create()
        .a(7)
        .b("host".to_string())
        .c("alias".to_string())
        .build()
        .unwrap();

    let copy = RecordBuilder::from(&original).build().unwrap();
    assert_eq!(original, copy);
    assert_eq!(original.hash_code(), copy.hash_code());
}

#[test]
fn empty_word_lists_every_missing_name() {
    let err = PairBuilder::create().build().unwrap_err();
    assert_eq!(err, ValueNotProvidedError::for_properties("x, y"));
    assert_eq!(
        err.to_string(),
        "not all values for the properties x, y were provided"
    );
}

#[test]
fn partially_filled_word_lists_only_still_missing() {
    let err = PairBuilder::create().x(1).build().unwrap_err();
    assert_eq!(err, ValueNotProvidedError::for_properties("y"));
}

#[test]
fn constructor_rechecks_required_array() {
    let err = PairBuilder::create().x(1).y(true).build().unwrap_err();
    assert_eq!(err, ValueNotProvidedError::for_property("tags"));

    let direct = ImmutablePair::new(1, true, None).unwrap_err();
    assert_eq!(direct, ValueNotProvidedError::for_property("tags"));
}

#[test]
fn fully_provided_pair_builds() {
    let pair = PairBuilder::create()
        .x(1)
        .y(true)
        .tags(vec![1, 2, 3])
        .build()
        .unwrap();

    assert_eq!(pair.tags(), &[1, 2, 3]);
    assert!(pair.to_string().contains("tags = <[1, 2, 3]>"));
}

#[test]
fn clear_keeps_required_semantics_intact() {
    let record = RecordBuilder::create()
        .a(1)
        .b("x".to_string())
        .build()
        .unwrap();

    let hash = record.hash_code();
    record.clear();
    assert_eq!(record.hash_code(), hash);
}
