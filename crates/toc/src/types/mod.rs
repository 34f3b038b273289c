mod boolean;
mod error;
mod list;
mod localized;
mod value;

pub use boolean::{BoolValue, string_to_bool};
pub use error::ValueError;
pub use list::{Element, ListValue};
pub use localized::LocalizedValue;
pub use value::{IntValue, Value};
