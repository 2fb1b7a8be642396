use crate::type_name::TypeName;
use std::cell::RefCell;
use std::rc::Rc;

/// Handle to a value that may be referenced from more than one place in a
/// graph. This is the only way aliasing (and therefore cycles) can enter
/// the model; everything else is a plain owned tree.
pub type SharedValue = Rc<RefCell<Value>>;

/// Dynamic runtime value, the input to classification.
///
/// Rust has no runtime reflection, so values are brought into this model
/// explicitly (usually through [`crate::ToValue`]) before being dumped.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    Seq(SeqValue),
    Map(MapValue),
    Object(ObjectValue),
    Shared(SharedValue),
}

/// Ordered sequence of elements.
#[derive(Debug, Clone)]
pub struct SeqValue {
    pub type_name: TypeName,
    pub items: Vec<Value>,
}

/// Keyed mapping; entries keep their native iteration order.
#[derive(Debug, Clone)]
pub struct MapValue {
    pub type_name: TypeName,
    pub entries: Vec<(Value, Value)>,
}

/// An object with named members.
#[derive(Debug, Clone)]
pub struct ObjectValue {
    pub type_name: TypeName,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub scope: MemberScope,
    pub value: MemberValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberScope {
    Instance,
    Static,
}

/// Outcome of reading a member. `Failed` models a read that raised on the
/// owning object; it is carried through to rendering as a diagnostic
/// rather than aborting the dump.
#[derive(Debug, Clone)]
pub enum MemberValue {
    Ready(Value),
    Failed { error_type: String, message: String },
}

impl Value {
    /// Sequence with the default `Vec<Value>` type name.
    pub fn seq(items: Vec<Value>) -> Self {
        Self::seq_named(TypeName::of::<Vec<Value>>(), items)
    }

    pub fn seq_named(type_name: TypeName, items: Vec<Value>) -> Self {
        Value::Seq(SeqValue { type_name, items })
    }

    /// Mapping with the default `Vec<(Value, Value)>` type name.
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Self::map_named(TypeName::of::<Vec<(Value, Value)>>(), entries)
    }

    pub fn map_named(type_name: TypeName, entries: Vec<(Value, Value)>) -> Self {
        Value::Map(MapValue { type_name, entries })
    }

    /// Starts building an object value with named members.
    pub fn object(type_name: TypeName) -> ObjectBuilder {
        ObjectBuilder::new(type_name)
    }

    /// Wraps a value in a shared cell. The returned handle can be aliased
    /// into several places of a graph (or mutated to form a cycle).
    pub fn new_shared(value: Value) -> SharedValue {
        Rc::new(RefCell::new(value))
    }

    /// Runtime type of this value, used for headers and fallbacks.
    pub fn type_name(&self) -> TypeName {
        match self {
            Value::Null => TypeName::new("null"),
            Value::Bool(_) => TypeName::of::<bool>(),
            Value::Int(_) => TypeName::of::<i64>(),
            Value::UInt(_) => TypeName::of::<u64>(),
            Value::Float(_) => TypeName::of::<f64>(),
            Value::Char(_) => TypeName::of::<char>(),
            Value::Str(_) => TypeName::of::<String>(),
            Value::Seq(s) => s.type_name.clone(),
            Value::Map(m) => m.type_name.clone(),
            Value::Object(o) => o.type_name.clone(),
            Value::Shared(cell) => match cell.try_borrow() {
                Ok(inner) => inner.type_name(),
                Err(_) => TypeName::new("<borrowed>"),
            },
        }
    }

    /// True for values that classify as terminal leaves: null, scalars
    /// and strings.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Bool(_)
                | Value::Int(_)
                | Value::UInt(_)
                | Value::Float(_)
                | Value::Char(_)
                | Value::Str(_)
        )
    }
}

impl From<SharedValue> for Value {
    fn from(cell: SharedValue) -> Self {
        Value::Shared(cell)
    }
}

/// Fluent construction of [`ObjectValue`]s: instance members first, then
/// statics, in the order the caller declares them.
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
    type_name: TypeName,
    members: Vec<Member>,
}

impl ObjectBuilder {
    pub fn new(type_name: TypeName) -> Self {
        Self {
            type_name,
            members: Vec::new(),
        }
    }

    pub fn member(mut self, name: impl Into<String>, value: Value) -> Self {
        self.members.push(Member {
            name: name.into(),
            scope: MemberScope::Instance,
            value: MemberValue::Ready(value),
        });
        self
    }

    pub fn static_member(mut self, name: impl Into<String>, value: Value) -> Self {
        self.members.push(Member {
            name: name.into(),
            scope: MemberScope::Static,
            value: MemberValue::Ready(value),
        });
        self
    }

    /// Records a member whose read failed, keeping the error visible in
    /// the eventual dump instead of dropping the member.
    pub fn failed_member(
        mut self,
        name: impl Into<String>,
        error_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.members.push(Member {
            name: name.into(),
            scope: MemberScope::Instance,
            value: MemberValue::Failed {
                error_type: error_type.into(),
                message: message.into(),
            },
        });
        self
    }

    pub fn build(self) -> Value {
        Value::Object(ObjectValue {
            type_name: self.type_name,
            members: self.members,
        })
    }
}
