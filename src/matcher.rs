//! Traversal context for customization callbacks.
//!
//! Every descent of the filling engine allocates one [`Matcher`] node on the
//! call stack. A node records the edge that produced the current value (a
//! struct field, a map key, a slice element, ...) together with the type at
//! the current position, and links back to its parent. Callbacks receive a
//! reference to the current node and discriminate on where the traversal is
//! via the predicates below; nodes are never mutated and become unreachable
//! on ascent.

use crate::reflect::{Kind, Reflect, Shape};
use core::any::TypeId;

/// An owned snapshot of a just-generated map key, exposed to callbacks while
/// the corresponding map value is being generated.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyEcho {
    /// A string-like key (strings and chars).
    Str(String),
    /// A signed integer key, widened to 64 bits.
    I64(i64),
    /// An unsigned integer key, widened to 64 bits.
    U64(u64),
    /// A boolean key.
    Bool(bool),
    /// A key whose type exposes no snapshot.
    Opaque,
}

impl KeyEcho {
    /// The key as a string slice, when it was string-like.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            KeyEcho::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// The edge that produced the current traversal position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Site {
    Plain,
    Field { owner: TypeId, name: &'static str },
    MapKey,
    MapValue { key: KeyEcho },
    SliceElem { index: usize, len: usize },
    ArrayElem { index: usize, len: usize },
    RealPart,
    ImagPart,
    MapLen,
    SliceLen,
    StringLen,
}

/// An immutable node in the parent-linked context chain handed to callbacks.
#[derive(Debug)]
pub struct Matcher<'a> {
    parent: Option<&'a Matcher<'a>>,
    site: Site,
    shape: Shape,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(parent: Option<&'a Matcher<'a>>, site: Site, shape: Shape) -> Self {
        Self {
            parent,
            site,
            shape,
        }
    }

    /// True when the current type is `T`, with one level of pointer
    /// indirection stripped from both sides, so an `Option<T>` position
    /// matches `T` and vice versa.
    pub fn matches_a<T: Reflect>(&self) -> bool {
        self.shape.stripped_id() == T::shape().stripped_id()
    }

    /// True when the current value is a field of a `T`, under one of the
    /// given field names.
    pub fn matches_field_of<T: Reflect>(&self, names: &[&str]) -> bool {
        match &self.site {
            Site::Field { owner, name } => {
                *owner == T::shape().stripped_id() && names.iter().any(|n| n == name)
            }
            _ => false,
        }
    }

    /// True when the current value is being generated as a map key.
    pub fn is_map_key(&self) -> bool {
        matches!(self.site, Site::MapKey)
    }

    /// True when the current value is being generated as a map value.
    pub fn is_map_value(&self) -> bool {
        matches!(self.site, Site::MapValue { .. })
    }

    /// True when the current value is an element of a growable sequence.
    pub fn is_slice_element(&self) -> bool {
        matches!(self.site, Site::SliceElem { .. })
    }

    /// True when the current value is an element of a fixed-length array.
    pub fn is_array_element(&self) -> bool {
        matches!(self.site, Site::ArrayElem { .. })
    }

    /// True when the current value is the real part of a complex number.
    pub fn is_real_part(&self) -> bool {
        matches!(self.site, Site::RealPart)
    }

    /// True when the current value is the imaginary part of a complex number.
    pub fn is_imag_part(&self) -> bool {
        matches!(self.site, Site::ImagPart)
    }

    /// True when the current value is the length being drawn for a map.
    pub fn is_map_length(&self) -> bool {
        matches!(self.site, Site::MapLen)
    }

    /// True when the current value is the length being drawn for a sequence.
    pub fn is_slice_length(&self) -> bool {
        matches!(self.site, Site::SliceLen)
    }

    /// True when the current value is the length being drawn for a string.
    pub fn is_string_length(&self) -> bool {
        matches!(self.site, Site::StringLen)
    }

    /// The element index, when the current value is a sequence or array
    /// element.
    pub fn index(&self) -> Option<usize> {
        match self.site {
            Site::SliceElem { index, .. } | Site::ArrayElem { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The containing length, when the current value is a sequence or array
    /// element.
    pub fn length(&self) -> Option<usize> {
        match self.site {
            Site::SliceElem { len, .. } | Site::ArrayElem { len, .. } => Some(len),
            _ => None,
        }
    }

    /// The key of the entry being generated, when the current value is a map
    /// value.
    pub fn map_key(&self) -> Option<&KeyEcho> {
        match &self.site {
            Site::MapValue { key } => Some(key),
            _ => None,
        }
    }

    /// The parent node, for callbacks that inspect two levels of context.
    pub fn parent(&self) -> Option<&'a Matcher<'a>> {
        self.parent
    }

    /// True when this node has a parent.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// The kind of the type at the current position.
    pub fn kind(&self) -> Kind {
        self.shape.kind()
    }

    /// The name of the type at the current position.
    pub fn type_name(&self) -> &'static str {
        self.shape.name()
    }
}
