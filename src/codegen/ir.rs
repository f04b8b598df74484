//! Renderer-agnostic program representation
//!
//! Nothing here knows about a concrete target language: there are no
//! keywords, no escaping rules and no formatting. A renderer walks a
//! [`CompilationUnit`] and prints it.

use serde::Serialize;

/// A possibly-qualified type reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeName {
    /// Code namespace the type lives in, when known
    pub namespace: Option<String>,
    /// Namespace alias to qualify the name with, when aliasing applies
    pub alias: Option<String>,
    pub name: String,
    pub type_args: Vec<TypeName>,
}

impl TypeName {
    pub fn simple(name: &str) -> Self {
        Self {
            namespace: None,
            alias: None,
            name: name.to_string(),
            type_args: Vec::new(),
        }
    }

    pub fn in_namespace(namespace: &str, name: &str) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::simple(name)
        }
    }

    pub fn with_alias(mut self, alias: Option<&str>) -> Self {
        self.alias = alias.map(str::to_string);
        self
    }

    pub fn with_type_args(mut self, type_args: Vec<TypeName>) -> Self {
        self.type_args = type_args;
        self
    }
}

/// Literal values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Decimal kept in its textual form to avoid precision loss
    Decimal(String),
    Str(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "expr")]
pub enum Expression {
    Literal(Literal),
    Variable { name: String },
    Type(TypeName),
    /// Property or field access
    Member { target: Box<Expression>, name: String },
    New { ty: TypeName, args: Vec<Expression> },
    Invoke {
        target: Option<Box<Expression>>,
        method: String,
        type_args: Vec<TypeName>,
        args: Vec<Expression>,
    },
    /// Argument passed by reference
    Ref { inner: Box<Expression> },
}

impl Expression {
    pub fn var(name: &str) -> Self {
        Expression::Variable {
            name: name.to_string(),
        }
    }

    pub fn str(value: &str) -> Self {
        Expression::Literal(Literal::Str(value.to_string()))
    }

    pub fn member(target: Expression, name: &str) -> Self {
        Expression::Member {
            target: Box::new(target),
            name: name.to_string(),
        }
    }

    pub fn new(ty: TypeName, args: Vec<Expression>) -> Self {
        Expression::New { ty, args }
    }

    /// Method call on a target
    pub fn call(target: Expression, method: &str, args: Vec<Expression>) -> Self {
        Expression::Invoke {
            target: Some(Box::new(target)),
            method: method.to_string(),
            type_args: Vec::new(),
            args,
        }
    }

    /// Call to a routine of the generated type itself
    pub fn call_local(method: &str, args: Vec<Expression>) -> Self {
        Expression::Invoke {
            target: None,
            method: method.to_string(),
            type_args: Vec::new(),
            args,
        }
    }

    pub fn by_ref(inner: Expression) -> Self {
        Expression::Ref {
            inner: Box::new(inner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stmt")]
pub enum Statement {
    Blank,
    Declare {
        ty: TypeName,
        name: String,
        init: Option<Expression>,
    },
    Assign {
        target: Expression,
        value: Expression,
    },
    Invoke { call: Expression },
    Comment { text: String },
    TryFinally {
        body: Vec<Statement>,
        finally: Vec<Statement>,
    },
    Return { value: Expression },
}

impl Statement {
    pub fn declare(ty: TypeName, name: &str, init: Expression) -> Self {
        Statement::Declare {
            ty,
            name: name.to_string(),
            init: Some(init),
        }
    }

    pub fn assign(target: Expression, value: Expression) -> Self {
        Statement::Assign { target, value }
    }

    /// Assign to a property of a variable
    pub fn assign_property(variable: &str, property: &str, value: Expression) -> Self {
        Statement::Assign {
            target: Expression::member(Expression::var(variable), property),
            value,
        }
    }

    pub fn invoke(call: Expression) -> Self {
        Statement::Invoke { call }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Statement::Comment { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeName,
    pub by_ref: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    pub params: Vec<Parameter>,
    pub return_type: Option<TypeName>,
    pub body: Vec<Statement>,
}

/// The one synthesized type holding the entry routine and its helpers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDecl {
    pub name: String,
    pub methods: Vec<Method>,
}

/// Which side of an aliased import the alias is written on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AliasOrder {
    /// `W = DocumentFormat.OpenXml.Wordprocessing`
    AliasFirst,
    /// `DocumentFormat.OpenXml.Wordprocessing as W`
    NamespaceFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    pub namespace: String,
    pub alias: Option<String>,
}

/// How a renderer should print aliased imports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportStyle {
    pub order: AliasOrder,
    pub assignment_operator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompilationUnit {
    pub imports: Vec<Import>,
    pub import_style: ImportStyle,
    pub types: Vec<TypeDecl>,
}

impl CompilationUnit {
    /// Every statement of every routine, nested blocks included, in order
    pub fn statements(&self) -> Vec<&Statement> {
        let mut out = Vec::new();
        for ty in &self.types {
            for method in &ty.methods {
                collect_statements(&method.body, &mut out);
            }
        }
        out
    }

    /// Text of all comment statements; the only place data anomalies show up
    pub fn comments(&self) -> Vec<&str> {
        self.statements()
            .into_iter()
            .filter_map(|s| match s {
                Statement::Comment { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Names of all declared variables
    pub fn declared_variables(&self) -> Vec<&str> {
        self.statements()
            .into_iter()
            .filter_map(|s| match s {
                Statement::Declare { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.types
            .iter()
            .flat_map(|t| t.methods.iter())
            .find(|m| m.name == name)
    }
}

fn collect_statements<'a>(body: &'a [Statement], out: &mut Vec<&'a Statement>) {
    for stmt in body {
        out.push(stmt);
        if let Statement::TryFinally { body, finally } = stmt {
            collect_statements(body, out);
            collect_statements(finally, out);
        }
    }
}
