pub mod convert;
pub mod error;
pub mod type_name;
pub mod value;

pub use convert::ToValue;
pub use error::{Error, Result};
pub use type_name::TypeName;
pub use value::{
    MapValue, Member, MemberScope, MemberValue, ObjectBuilder, ObjectValue, SeqValue, SharedValue,
    Value,
};
