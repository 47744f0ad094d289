//! Schemas and an in-memory format shared by the unit tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::info::AttributeInfo;
use crate::{AttributeError, Format, Scalar, ScalarKind, Schema, Walk, WalkMut};

// -----------------------------------------------------------------------------
// Schemas

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Point {
    pub x: i64,
    pub y: i64,
}

impl Schema for Point {
    const NAME: &'static str = "Point";
    const ATTRIBUTES: &'static [AttributeInfo] = &[
        AttributeInfo::new::<i64>("x"),
        AttributeInfo::new::<i64>("y"),
    ];

    fn walk<W: Walk>(&self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&self.x)?;
        walker.attribute(&self.y)
    }

    fn walk_mut<W: WalkMut>(&mut self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&mut self.x)?;
        walker.attribute(&mut self.y)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Inner {
    pub x: i64,
    pub y: String,
}

impl Schema for Inner {
    const NAME: &'static str = "Inner";
    const ATTRIBUTES: &'static [AttributeInfo] = &[
        AttributeInfo::new::<i64>("x"),
        AttributeInfo::new::<String>("y"),
    ];

    fn walk<W: Walk>(&self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&self.x)?;
        walker.attribute(&self.y)
    }

    fn walk_mut<W: WalkMut>(&mut self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&mut self.x)?;
        walker.attribute(&mut self.y)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Outer {
    pub id: i64,
    pub inner: Inner,
    pub points: Vec<Point>,
}

impl Schema for Outer {
    const NAME: &'static str = "Outer";
    const ATTRIBUTES: &'static [AttributeInfo] = &[
        AttributeInfo::new::<i64>("id"),
        AttributeInfo::new::<Inner>("inner"),
        AttributeInfo::new::<Vec<Point>>("points"),
    ];

    fn walk<W: Walk>(&self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&self.id)?;
        walker.attribute(&self.inner)?;
        walker.attribute(&self.points)
    }

    fn walk_mut<W: WalkMut>(&mut self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&mut self.id)?;
        walker.attribute(&mut self.inner)?;
        walker.attribute(&mut self.points)
    }
}

impl Outer {
    pub(crate) fn sample() -> Self {
        Self {
            id: 7,
            inner: Inner {
                x: 3,
                y: String::from("abc"),
            },
            points: alloc::vec![
                Point { x: 1, y: 2 },
                Point { x: 3, y: 4 },
                Point { x: 5, y: 6 },
            ],
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Tree {
    pub value: i64,
    pub children: Vec<Tree>,
}

impl Schema for Tree {
    const NAME: &'static str = "Tree";
    const ATTRIBUTES: &'static [AttributeInfo] = &[
        AttributeInfo::new::<i64>("value"),
        AttributeInfo::new::<Vec<Tree>>("children"),
    ];

    fn walk<W: Walk>(&self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&self.value)?;
        walker.attribute(&self.children)
    }

    fn walk_mut<W: WalkMut>(&mut self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&mut self.value)?;
        walker.attribute(&mut self.children)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Flags {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub ratio: f64,
    pub blob: Vec<u8>,
}

impl Schema for Flags {
    const NAME: &'static str = "Flags";
    const ATTRIBUTES: &'static [AttributeInfo] = &[
        AttributeInfo::new::<i32>("id"),
        AttributeInfo::new::<String>("name"),
        AttributeInfo::new::<bool>("active"),
        AttributeInfo::new::<f64>("ratio"),
        AttributeInfo::new::<Vec<u8>>("blob"),
    ];

    fn walk<W: Walk>(&self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&self.id)?;
        walker.attribute(&self.name)?;
        walker.attribute(&self.active)?;
        walker.attribute(&self.ratio)?;
        walker.attribute(&self.blob)
    }

    fn walk_mut<W: WalkMut>(&mut self, walker: &mut W) -> Result<(), W::Error> {
        walker.attribute(&mut self.id)?;
        walker.attribute(&mut self.name)?;
        walker.attribute(&mut self.active)?;
        walker.attribute(&mut self.ratio)?;
        walker.attribute(&mut self.blob)
    }
}

// -----------------------------------------------------------------------------
// MemoryFormat

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Scalar(Scalar),
    Object(Vec<(String, Node)>),
    Array(Vec<Node>),
}

/// A minimal [`Format`] keeping everything as a [`Node`] tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MemoryFormat(pub Node);

impl MemoryFormat {
    fn entry(&self, name: &str) -> Option<&Node> {
        match &self.0 {
            Node::Object(entries) => entries.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    fn insert(&mut self, name: &str, node: Node) {
        let Node::Object(entries) = &mut self.0 else {
            panic!("writing into a non-object node");
        };
        match entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, slot)) => *slot = node,
            None => entries.push((name.to_string(), node)),
        }
    }

    pub(crate) fn keys(&self) -> Vec<&str> {
        match &self.0 {
            Node::Object(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    pub(crate) fn remove(&mut self, name: &str) {
        if let Node::Object(entries) = &mut self.0 {
            entries.retain(|(k, _)| k != name);
        }
    }
}

impl Format for MemoryFormat {
    type Document = Node;
    type Error = AttributeError;

    fn new_empty() -> Self {
        Self(Node::Object(Vec::new()))
    }

    fn from_document(document: Node) -> Result<Self, AttributeError> {
        Ok(Self(document))
    }

    fn write(&mut self, name: &str, value: Scalar) {
        self.insert(name, Node::Scalar(value));
    }

    fn write_document(&mut self, name: &str, document: Node) {
        self.insert(name, document);
    }

    fn write_documents(&mut self, name: &str, documents: Vec<Node>) {
        self.insert(name, Node::Array(documents));
    }

    fn read(&self, name: &str, kind: ScalarKind) -> Result<Option<Scalar>, AttributeError> {
        match self.entry(name) {
            None => Ok(None),
            Some(Node::Scalar(scalar)) if scalar.kind() == kind => Ok(Some(scalar.clone())),
            Some(Node::Scalar(scalar)) => Err(AttributeError::Mismatch {
                expected: kind,
                found: scalar.kind().as_str(),
            }),
            Some(_) => Err(AttributeError::Mismatch {
                expected: kind,
                found: "document",
            }),
        }
    }

    fn read_document(&self, name: &str) -> Result<Option<Node>, AttributeError> {
        Ok(self.entry(name).cloned())
    }

    fn output(&self) -> Node {
        self.0.clone()
    }

    fn into_output(self) -> Node {
        self.0
    }

    fn length(&self) -> Option<usize> {
        match &self.0 {
            Node::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    fn at(&self, index: usize) -> Result<Self, AttributeError> {
        match &self.0 {
            Node::Array(items) if index < items.len() => Ok(Self(items[index].clone())),
            _ => Err(AttributeError::Missing {
                name: index.to_string(),
            }),
        }
    }
}
