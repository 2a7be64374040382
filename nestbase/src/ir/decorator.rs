//! Decorator descriptors.

use super::Render;

/// A single parameter value inside a decorator's object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A bare expression, emitted as-is (`Number`, `Role`).
    Expr(String),
    /// A boolean literal.
    Bool(bool),
    /// A string literal, emitted single-quoted.
    Str(String),
    /// A zero-argument function returning the named type (`() => User`).
    ///
    /// Lets a decorator refer to classes declared later or to the class
    /// being declared.
    Thunk(String),
}

impl Render for ParamValue {
    fn render(&self) -> String {
        match self {
            ParamValue::Expr(expr) => expr.clone(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::Str(s) => quote(s),
            ParamValue::Thunk(ty) => format!("() => {}", ty),
        }
    }
}

/// One object-literal parameter: ordered `key: value` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoratorParams {
    entries: Vec<(String, ParamValue)>,
}

impl DecoratorParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn with(mut self, key: impl Into<String>, value: ParamValue) -> Self {
        self.set(key, value);
        self
    }

    /// Set an entry, replacing an earlier value for the same key in place.
    pub fn set(&mut self, key: impl Into<String>, value: ParamValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Render for DecoratorParams {
    fn render(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }
        let body = self
            .entries
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v.render()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", body)
    }
}

/// An annotation attached to a class or a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorDescriptor {
    pub name: String,

    /// Module the decorator is imported from.
    pub import_from: String,

    pub params: Vec<DecoratorParams>,
}

impl DecoratorDescriptor {
    pub fn new(name: impl Into<String>, import_from: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_from: import_from.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter object.
    pub fn push_params(&mut self, params: DecoratorParams) {
        self.params.push(params);
    }
}

impl Render for DecoratorDescriptor {
    fn render(&self) -> String {
        let args = self
            .params
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join(", ");
        format!("@{}({})", self.name, args)
    }
}

/// Single-quote a string literal.
///
/// Line terminators and other control characters are escaped so the literal
/// stays on one line.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
