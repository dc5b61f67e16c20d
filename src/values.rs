use std::fmt;
use std::rc::Rc;

/// General value structure harvested from observed frames.
/// By design these are very cheap to clone, but are largely immutable.
///
/// `Unit` is an ordinary value meaning "holds nothing"; it is not the
/// same thing as a name being unbound, which the scope layer tracks
/// separately.
#[derive(Debug, Clone, PartialEq)]
pub enum DynValue {
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    List(Rc<Vec<DynValue>>),
}

impl DynValue {
    pub fn type_name(&self) -> &'static str {
        use DynValue::*;

        match self {
            Unit => "unit",
            Bool(_) => "bool",
            Int(_) => "int",
            Float(_) => "float",
            Str(_) => "string",
            List(_) => "list",
        }
    }
}

impl From<bool> for DynValue {
    fn from(b: bool) -> DynValue {
        DynValue::Bool(b)
    }
}

impl From<i64> for DynValue {
    fn from(i: i64) -> DynValue {
        DynValue::Int(i)
    }
}

impl From<f64> for DynValue {
    fn from(f: f64) -> DynValue {
        DynValue::Float(f)
    }
}

impl From<&str> for DynValue {
    fn from(s: &str) -> DynValue {
        DynValue::Str(s.into())
    }
}

impl From<String> for DynValue {
    fn from(s: String) -> DynValue {
        DynValue::Str(s.into())
    }
}

impl From<Vec<DynValue>> for DynValue {
    fn from(vals: Vec<DynValue>) -> DynValue {
        DynValue::List(Rc::new(vals))
    }
}

fn fmt_vec<T: fmt::Display>(f: &mut fmt::Formatter<'_>, vals: &[T]) -> Result<(), fmt::Error> {
    write!(f, "[")?;
    if vals.is_empty() {
        write!(f, "]")?;
        return Ok(());
    }

    if vals.len() < 10 {
        let mut iter = vals.iter();
        write!(f, "{}", iter.next().unwrap())?;

        for next in iter {
            write!(f, ", {}", next)?;
        }
    } else {
        write!(f, "{}", vals[0])?;

        for v in &vals[1..5] {
            write!(f, ", {}", v)?;
        }

        write!(f, ", ...")?;

        for v in &vals[vals.len() - 5..] {
            write!(f, ", {}", v)?;
        }
    }

    write!(f, "]")
}

impl fmt::Display for DynValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            DynValue::Unit => write!(f, "()"),
            DynValue::Bool(val) => write!(f, "{}", val),
            DynValue::Int(val) => write!(f, "{}", val),
            DynValue::Float(val) => write!(f, "{}", val),
            DynValue::Str(val) => write!(f, "{}", val),
            DynValue::List(vals) => fmt_vec(f, vals),
        }
    }
}
