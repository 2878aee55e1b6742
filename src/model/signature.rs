use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three Java access modifier keywords that may prefix a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    Public,
    Private,
    Protected,
}

impl AccessModifier {
    pub const ALL: [AccessModifier; 3] =
        [AccessModifier::Public, AccessModifier::Private, AccessModifier::Protected];

    /// The keyword exactly as it appears in source.
    pub fn as_str(&self) -> &'static str {
        match *self {
            AccessModifier::Public => "public",
            AccessModifier::Private => "private",
            AccessModifier::Protected => "protected",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessModifier {
    type Err = ();

    /// Matches the whole token only; `publicity` is not a modifier.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        AccessModifier::ALL.iter().cloned().find(|m| m.as_str() == token).ok_or(())
    }
}

/// A single `type name` entry of a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    #[serde(rename = "type")]
    ty: String,
    name: String,
}

impl Argument {
    pub fn new<T: Into<String>, N: Into<String>>(ty: T, name: N) -> Self {
        Argument { ty: ty.into(), name: name.into() }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A parsed method signature. Built in one step by the parser and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    /// `None` when the signature has no leading `public`, `private` or `protected`.
    access_modifier: Option<AccessModifier>,
    return_type: String,
    method_name: String,
    /// In source order. Duplicates are kept.
    arguments: Vec<Argument>,
}

impl MethodSignature {
    pub fn new<R, N>(access_modifier: Option<AccessModifier>, return_type: R, method_name: N,
                     arguments: Vec<Argument>)
            -> Self
        where R: Into<String>,
              N: Into<String>
    {
        MethodSignature {
            access_modifier: access_modifier,
            return_type: return_type.into(),
            method_name: method_name.into(),
            arguments: arguments,
        }
    }

    pub fn access_modifier(&self) -> Option<AccessModifier> {
        self.access_modifier
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

/// Renders the canonical form `[modifier ]returnType name(T1 n1, T2 n2)`, which the parser
/// accepts back unchanged.
impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(modifier) = self.access_modifier {
            write!(f, "{} ", modifier)?;
        }
        write!(f, "{} {}(", self.return_type, self.method_name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", argument)?;
        }
        f.write_str(")")
    }
}
