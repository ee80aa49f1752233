use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::BlockStatement;

pub type Env = Rc<RefCell<Environment>>;

#[derive(Debug)]
pub enum Object {
    Null,
    Int(i64),
    Bool(bool),
    Str(String),
    Array(Vec<Rc<Object>>),
    Hash(HashMap<Key, Rc<Object>>),
    Function(Function),
    // name into the builtin registry
    BuiltinFunction(String),
    Return(Rc<Object>),
    Error(String),
}

// The hashable subset of Object. Anything else used as a hash key is a
// runtime error.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Key {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Int(v) => write!(f, "{}", v),
            Key::Bool(v) => write!(f, "{}", v),
            Key::Str(v) => write!(f, "{}", v),
        }
    }
}

impl Object {
    pub fn null() -> Rc<Object> {
        Rc::new(Object::Null)
    }

    pub fn bool(b: bool) -> Rc<Object> {
        Rc::new(Object::Bool(b))
    }

    pub fn is_err(&self) -> bool {
        if let Object::Error(_) = self {
            true
        } else {
            false
        }
    }

    pub fn as_key(&self) -> Option<Key> {
        match self {
            Object::Int(v) => Some(Key::Int(*v)),
            Object::Bool(v) => Some(Key::Bool(*v)),
            Object::Str(v) => Some(Key::Str(v.clone())),
            _ => None,
        }
    }

    pub fn inspect(&self) -> String {
        use Object::*;
        match self {
            Int(v) => v.to_string(),
            Bool(v) => v.to_string(),
            Null => "null".to_string(),
            Str(v) => v.clone(),
            Array(vs) => {
                let elems = vs
                    .iter()
                    .map(|v| v.inspect())
                    .collect::<Vec<_>>()
                    .join(", ");
                ["[", &elems, "]"].concat()
            }
            Hash(map) => {
                let pairs = map
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.inspect()))
                    .collect::<Vec<_>>()
                    .join(", ");
                ["{", &pairs, "}"].concat()
            }
            Return(v) => v.inspect(),
            Error(msg) => format!("ERROR: {}", msg),
            Function(f) => f.inspect(),
            BuiltinFunction(_) => "builtin function".to_string(),
        }
    }

    pub fn type_as_str(&self) -> &str {
        use Object::*;
        match self {
            Int(_) => "INTEGER",
            Bool(_) => "BOOLEAN",
            Null => "NULL",
            Str(_) => "STRING",
            Array(_) => "ARRAY",
            Hash(_) => "HASH",
            Return(_) => "RETURN_VALUE",
            Error(_) => "ERROR",
            Function(_) => "FUNCTION",
            BuiltinFunction(_) => "BUILTIN",
        }
    }
}

pub struct Function {
    pub parameters: Vec<String>,
    pub body: BlockStatement,
    pub env: Env,
}

impl Function {
    fn inspect(&self) -> String {
        let parts = [
            "fn(",
            &self.parameters.join(", "),
            ") {\n",
            &self.body.to_string(),
            "\n}",
        ];
        parts.into_iter().collect::<String>()
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inspect())
    }
}

pub struct Environment {
    outer: Option<Env>,
    curr: HashMap<String, Rc<Object>>,
}

impl Environment {
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment {
            outer: None,
            curr: HashMap::new(),
        }))
    }

    pub fn with_outer(outer: &Env) -> Env {
        Rc::new(RefCell::new(Environment {
            outer: Some(Rc::clone(outer)),
            curr: HashMap::new(),
        }))
    }

    // lookup walks outward through the scope chain
    pub fn get(env: &Env, name: &str) -> Option<Rc<Object>> {
        let env_ref = env.borrow();
        if let Some(v) = env_ref.curr.get(name) {
            Some(Rc::clone(v))
        } else if let Some(outer) = &env_ref.outer {
            Environment::get(outer, name)
        } else {
            None
        }
    }

    // let always binds in the innermost scope
    pub fn set(env: &Env, name: &str, val: &Rc<Object>) {
        env.borrow_mut().curr.insert(name.into(), Rc::clone(val));
    }
}
