//! cfnkit Core
//!
//! Core library for typed CloudFormation property records: every resource
//! configuration is an immutable record built once, rendered through a
//! pluggable renderer and registered in a stack.

pub mod inspect;
pub mod record;
pub mod render;
pub mod resource;
pub mod schema;
pub mod stack;
pub mod tag;
pub mod value;

pub use record::{PropertyMap, PropertyRecord, PropertyValue, RecordError, RecordValue};
pub use resource::{CfnElement, CfnResource, RawResource, Scope};
pub use stack::{Stack, StackError};
pub use value::Value;
