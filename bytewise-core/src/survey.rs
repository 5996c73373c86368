//! Type survey: one sample of each basic kind with its type and size

use crate::memory::{footprint, HeapSize};
use std::collections::BTreeMap;
use std::fmt;

/// Name used by the text sample and the character-code table
pub const STUDENT_NAME: &str = "Emma";

/// Value in the mixed-type student record
#[derive(Clone, PartialEq, Eq)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

/// Prints the bare value so a map of scalars reads `{"age": 12, ...}`
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl HeapSize for Scalar {
    fn heap_bytes(&self) -> usize {
        match self {
            Scalar::Int(_) => 0,
            Scalar::Text(s) => s.heap_bytes(),
        }
    }
}

/// What the survey reports about one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReport {
    pub label: &'static str,
    /// Binding name shown in the lesson, e.g. `age`
    pub binding: &'static str,
    /// `Debug` rendering of the value
    pub value: String,
    pub type_name: String,
    pub inline_bytes: usize,
    pub heap_bytes: usize,
    /// Characters, items or keys, where the kind has a length
    pub length: Option<usize>,
    /// What `length` counts: `characters`, `items` or `keys`
    pub length_unit: &'static str,
    /// Keys of a mapping, in iteration order
    pub keys: Vec<String>,
}

impl TypeReport {
    pub fn of<T: fmt::Debug + HeapSize>(label: &'static str, binding: &'static str, value: &T) -> Self {
        let fp = footprint(value);
        Self {
            label,
            binding,
            value: format!("{:?}", value),
            type_name: short_type_name::<T>(),
            inline_bytes: fp.inline,
            heap_bytes: fp.heap,
            length: None,
            length_unit: "",
            keys: Vec::new(),
        }
    }

    pub fn with_length(mut self, length: usize, unit: &'static str) -> Self {
        self.length = Some(length);
        self.length_unit = unit;
        self
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self.length = Some(self.keys.len());
        self.length_unit = "keys";
        self
    }

    pub fn total_bytes(&self) -> usize {
        self.inline_bytes + self.heap_bytes
    }
}

/// Type name with module paths removed: `alloc::vec::Vec<i32>` -> `Vec<i32>`
pub fn short_type_name<T: ?Sized>() -> String {
    shorten_type_path(std::any::type_name::<T>())
}

/// Strip `a::b::` qualifiers from every path inside a type name
pub fn shorten_type_path(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            out.push_str(last_path_segment(&segment));
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(last_path_segment(&segment));
    out
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// The six samples: whole number, decimal, text, boolean, list, mapping
pub fn student_record() -> Vec<TypeReport> {
    let age: i32 = 12;
    let height: f64 = 5.2;
    let name = String::from(STUDENT_NAME);
    let is_student = true;
    let scores: Vec<i32> = vec![95, 87, 92, 88];
    let student: BTreeMap<&str, Scalar> = BTreeMap::from([
        ("name", Scalar::Text(STUDENT_NAME.into())),
        ("age", Scalar::Int(12)),
        ("grade", Scalar::Text("6th".into())),
    ]);

    let reports = vec![
        TypeReport::of("Integer", "age", &age),
        TypeReport::of("Float", "height", &height),
        TypeReport::of("String", "name", &name).with_length(name.chars().count(), "characters"),
        TypeReport::of("Boolean", "is_student", &is_student),
        TypeReport::of("Vec", "scores", &scores).with_length(scores.len(), "items"),
        TypeReport::of("Map", "student", &student).with_keys(student.keys().copied()),
    ];
    tracing::debug!(count = reports.len(), "built type survey");
    reports
}

/// Fixed-width primitive with its size and range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveInfo {
    pub name: &'static str,
    pub bytes: usize,
    pub min: String,
    pub max: String,
}

macro_rules! primitive {
    ($ty:ty) => {
        PrimitiveInfo {
            name: stringify!($ty),
            bytes: std::mem::size_of::<$ty>(),
            min: <$ty>::MIN.to_string(),
            max: <$ty>::MAX.to_string(),
        }
    };
}

/// Sizes and ranges of Rust's fixed-width primitives
pub fn fixed_width_table() -> Vec<PrimitiveInfo> {
    vec![
        primitive!(i8),
        primitive!(i16),
        primitive!(i32),
        primitive!(i64),
        primitive!(u8),
        primitive!(u16),
        primitive!(u32),
        primitive!(u64),
        primitive!(usize),
        primitive!(f32),
        primitive!(f64),
        PrimitiveInfo {
            name: "char",
            bytes: std::mem::size_of::<char>(),
            min: "U+0000".into(),
            max: "U+10FFFF".into(),
        },
        PrimitiveInfo {
            name: "bool",
            bytes: std::mem::size_of::<bool>(),
            min: "false".into(),
            max: "true".into(),
        },
    ]
}
