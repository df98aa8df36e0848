//! Memoized fixture accessors.
//!
//! A [`Junklet`] declares names at definition time. [`Declarations`] collects
//! them and hands out a fresh [`Scope`] for every test, whose bindings
//! generate `<name><separator><32 hex digits>` on first read and return the
//! cached string afterwards.
//!
//! ```
//! use junklet_core::{junklet, Declarations};
//!
//! let mut decls = Declarations::new();
//! decls.declare(junklet(["trash"])).unwrap();
//! decls.declare(junklet(["host_name"]).separator("-")).unwrap();
//!
//! let scope = decls.scope();
//! let trash = scope.get("trash").unwrap();
//! assert!(trash.starts_with("trash_"));
//! assert_eq!(scope.get("trash").unwrap(), trash);
//! assert!(scope.get("host_name").unwrap().starts_with("host-name-"));
//! ```

use std::cell::{OnceCell, RefCell};
use std::collections::BTreeMap;

use rand::rngs::ThreadRng;
use unicode_xid::UnicodeXID;

use crate::error::{JunkError, Result};
use crate::generator::Generator;
use crate::options::DEFAULT_HEX_LEN;
use crate::random::RandomSource;

pub const DEFAULT_SEPARATOR: &str = "_";

/// One `junklet` declaration: names sharing a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junklet {
    names: Vec<String>,
    separator: String,
}

impl Junklet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Separator between name and digits. Also replaces underscores in names.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    fn validate(&self) -> Result<()> {
        match self.names.iter().find(|name| !is_identifier(name)) {
            Some(bad) => Err(JunkError::InvalidName(bad.clone())),
            None => Ok(()),
        }
    }
}

/// Accessor names follow identifier rules, like the methods they stand for.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_xid_start() => chars.all(UnicodeXID::is_xid_continue),
        _ => false,
    }
}

/// Prefix for accessor values: the name with underscores swapped for the
/// separator, then the separator.
pub fn prefix(name: &str, separator: &str) -> String {
    let mut prefix = name.replace('_', separator);
    prefix.push_str(separator);
    prefix
}

/// A single accessor: its name, separator, and the value once read.
#[derive(Debug)]
pub struct Binding {
    name: String,
    separator: String,
    cache: OnceCell<String>,
}

impl Binding {
    /// An unread accessor. `junklet!` builds its fields with this.
    pub fn new(name: &str, separator: &str) -> Self {
        Self {
            name: name.to_string(),
            separator: separator.to_string(),
            cache: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The value, if it has been read.
    pub fn cached(&self) -> Option<&str> {
        self.cache.get().map(String::as_str)
    }

    /// The value, generating it with `hex` on first call.
    pub fn value_with<F>(&self, hex: F) -> &str
    where
        F: FnOnce(usize) -> String,
    {
        self.cache.get_or_init(|| {
            let mut value = prefix(&self.name, &self.separator);
            value.push_str(&hex(DEFAULT_HEX_LEN));
            tracing::debug!(name = %self.name, %value, "junklet populated");
            value
        })
    }
}

/// Definition-time registry of junklet declarations.
///
/// Declaring generates nothing. Clone it to model a nested context that
/// inherits its parent's declarations; a later declaration of the same name
/// overrides the earlier one.
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    entries: BTreeMap<String, String>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, junklet: Junklet) -> Result<&mut Self> {
        junklet.validate()?;
        for name in junklet.names {
            self.entries.insert(name, junklet.separator.clone());
        }
        Ok(self)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A fresh scope over the thread RNG.
    pub fn scope(&self) -> Scope {
        self.scope_with(Generator::new())
    }

    /// A fresh scope over `generator`.
    pub fn scope_with<R: RandomSource>(&self, generator: Generator<R>) -> Scope<R> {
        let bindings = self
            .entries
            .iter()
            .map(|(name, separator)| (name.clone(), Binding::new(name, separator)))
            .collect();
        Scope {
            bindings,
            generator: RefCell::new(generator),
        }
    }
}

/// Per-test accessor table. Values live as long as the scope.
#[derive(Debug)]
pub struct Scope<R = ThreadRng> {
    bindings: BTreeMap<String, Binding>,
    generator: RefCell<Generator<R>>,
}

impl Scope<ThreadRng> {
    /// An empty scope; install junklets into it directly.
    pub fn new() -> Self {
        Declarations::new().scope()
    }
}

impl Default for Scope<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Scope<R> {
    /// Declare into a live scope. Redeclared names start over uncached.
    pub fn install(&mut self, junklet: Junklet) -> Result<()> {
        junklet.validate()?;
        for name in junklet.names() {
            self.bindings
                .insert(name.to_string(), Binding::new(name, &junklet.separator));
        }
        Ok(())
    }

    /// Read an accessor, generating its value on first read.
    pub fn get(&self, name: &str) -> Result<&str> {
        let binding = self
            .bindings
            .get(name)
            .ok_or_else(|| JunkError::UnknownJunklet(name.to_string()))?;
        Ok(binding.value_with(|len| self.generator.borrow_mut().hex(len)))
    }

    /// Peek at an accessor without generating.
    pub fn cached(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).and_then(Binding::cached)
    }

    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}
