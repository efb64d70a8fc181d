use std::fmt::Display;

/// Functions every program can call without defining them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Print,
    Int,
    Str,
    Len,
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "print" => Some(Self::Print),
            "int" => Some(Self::Int),
            "str" => Some(Self::Str),
            "len" => Some(Self::Len),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Int => "int",
            Self::Str => "str",
            Self::Len => "len",
        }
    }
}

/// Result of evaluating an expression or statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
    Builtin(Builtin),
    None,
}

impl Value {
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(value) => *value != 0,
            Value::Str(value) => !value.is_empty(),
            Value::Bool(value) => *value,
            Value::Builtin(_) => true,
            Value::None => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::Builtin(_) => "builtin",
            Value::None => "None",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Str(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name()),
            Value::None => write!(f, "None"),
        }
    }
}
