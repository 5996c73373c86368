//! # Bytewise Core
//!
//! The computations behind the beginner lessons: how values are typed and
//! sized, how integers are written in binary and hexadecimal, what the bitwise
//! operators do, and how shared handles differ from copies.
//!
//! ## Example
//!
//! ```rust
//! use bytewise_core::{radix, BitwiseReport, Rgb, SharedList};
//!
//! assert_eq!(radix::to_binary(42), "101010");
//! assert_eq!(radix::parse_hex("2A").unwrap(), 42);
//!
//! let bits = BitwiseReport::new(5, 3);
//! assert_eq!(bits.not_a_masked, 250);
//!
//! assert_eq!(Rgb::new(255, 100, 150).to_hex(), "#FF6496");
//!
//! let list1 = SharedList::new(vec![1, 2, 3]);
//! let list2 = list1.alias();
//! list2.push(4);
//! assert_eq!(list1.snapshot(), vec![1, 2, 3, 4]);
//! ```

pub mod config;
pub mod error;
pub mod radix;
pub mod bitwise;
pub mod color;
pub mod memory;
pub mod survey;
pub mod text;

pub use config::{ConfigError, RenderConfig};
pub use error::{LessonError, Result};
pub use bitwise::{BitRow, BitwiseReport, NOT_MASK, NOT_MASK_WIDTH};
pub use color::Rgb;
pub use memory::{Footprint, HeapSize, PointerDemo, SharedList, SizeRow};
pub use survey::{PrimitiveInfo, Scalar, TypeReport};
pub use text::CharCode;

/// Number converted in the base-conversion lesson
pub const LESSON_NUMBER: u64 = 42;

/// Operands of the bitwise lesson
pub const LESSON_A: i64 = 5;
pub const LESSON_B: i64 = 3;

/// Color composed in the hex-color lesson
pub const LESSON_COLOR: Rgb = Rgb::new(255, 100, 150);
