use std::fmt::Display;

use serde::Serialize;

/// Identifier given to the implicit table wrapping a whole document.
pub const ROOT_IDENTIFIER: &str = "$root";

/// A node of the parsed tree. Only tables have children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AstNode {
    Table(Table),
    Record(Record),
    List(List),
    Comment(Comment),
}

impl AstNode {
    /// The node's identifier; comments have none.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            AstNode::Table(table) => Some(&table.identifier),
            AstNode::Record(record) => Some(&record.identifier),
            AstNode::List(list) => Some(&list.identifier),
            AstNode::Comment(_) => None,
        }
    }

    pub fn children(&self) -> &[AstNode] {
        match self {
            AstNode::Table(table) => &table.children,
            AstNode::Record(_) | AstNode::List(_) | AstNode::Comment(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub identifier: String,
    pub attributes: Vec<Attribute>,
    /// Nested statements in source order.
    pub children: Vec<AstNode>,
}

impl Table {
    pub fn new(identifier: String, attributes: Vec<Attribute>) -> Self {
        Table {
            identifier,
            attributes,
            children: vec![],
        }
    }

    pub fn root() -> Self {
        Table::new(String::from(ROOT_IDENTIFIER), vec![])
    }

    /// First child with the given identifier. Identifiers are not unique.
    pub fn get(&self, identifier: &str) -> Option<&AstNode> {
        self.children
            .iter()
            .find(|child| child.identifier() == Some(identifier))
    }

    pub fn attribute(&self, identifier: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.identifier == identifier)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.children.iter().filter_map(|child| match child {
            AstNode::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.children.iter().filter_map(|child| match child {
            AstNode::Record(record) => Some(record),
            _ => None,
        })
    }

    pub fn lists(&self) -> impl Iterator<Item = &List> {
        self.children.iter().filter_map(|child| match child {
            AstNode::List(list) => Some(list),
            _ => None,
        })
    }
}

/// A `*`-prefixed table modifier, e.g. `*source Potato`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub identifier: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub identifier: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub identifier: String,
    pub values: Vec<Value>,
}

/// Literal comment text, leading `#` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(Number),
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    /// Integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(Number::Integer(n)) => Some(*n as f64),
            Value::Number(Number::Decimal(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Null => write!(f, "null"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Decimal(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Decimal(n) => write!(f, "{}", n),
        }
    }
}
