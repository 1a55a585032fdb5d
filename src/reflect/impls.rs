//! [`Reflect`] implementations for the primitive leaves and std containers.

use super::{Kind, MapAccess, Node, OptionAccess, Reflect, SeqAccess, Shape, Target};
use crate::dynamic::Dynamic;
use crate::matcher::KeyEcho;
use core::hash::Hash;
use core::marker::PhantomData;
use core::mem;
use num_complex::{Complex32, Complex64};
use std::collections::{BTreeMap, HashMap};

macro_rules! signed_leaves {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Reflect for $ty {
            fn shape() -> Shape {
                Shape::leaf::<$ty>(Kind::$kind)
            }

            fn node(&mut self) -> Node<'_> {
                Node::$kind(self)
            }

            fn echo(&self) -> KeyEcho {
                KeyEcho::I64(*self as i64)
            }
        }
    )*};
}

macro_rules! unsigned_leaves {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Reflect for $ty {
            fn shape() -> Shape {
                Shape::leaf::<$ty>(Kind::$kind)
            }

            fn node(&mut self) -> Node<'_> {
                Node::$kind(self)
            }

            fn echo(&self) -> KeyEcho {
                KeyEcho::U64(*self as u64)
            }
        }
    )*};
}

signed_leaves! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
}

unsigned_leaves! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl Reflect for f32 {
    fn shape() -> Shape {
        Shape::leaf::<f32>(Kind::F32)
    }

    fn node(&mut self) -> Node<'_> {
        Node::F32(self)
    }
}

impl Reflect for f64 {
    fn shape() -> Shape {
        Shape::leaf::<f64>(Kind::F64)
    }

    fn node(&mut self) -> Node<'_> {
        Node::F64(self)
    }
}

impl Reflect for bool {
    fn shape() -> Shape {
        Shape::leaf::<bool>(Kind::Bool)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Bool(self)
    }

    fn echo(&self) -> KeyEcho {
        KeyEcho::Bool(*self)
    }
}

impl Reflect for char {
    fn shape() -> Shape {
        Shape::leaf::<char>(Kind::Char)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Char(self)
    }

    fn echo(&self) -> KeyEcho {
        KeyEcho::Str(self.to_string())
    }
}

impl Reflect for String {
    fn shape() -> Shape {
        Shape::leaf::<String>(Kind::Str)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Str(self)
    }

    fn echo(&self) -> KeyEcho {
        KeyEcho::Str(self.clone())
    }
}

impl Reflect for Complex32 {
    fn shape() -> Shape {
        Shape::leaf::<Complex32>(Kind::Complex32)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Complex32 {
            re: &mut self.re,
            im: &mut self.im,
        }
    }
}

impl Reflect for Complex64 {
    fn shape() -> Shape {
        Shape::leaf::<Complex64>(Kind::Complex64)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Complex64 {
            re: &mut self.re,
            im: &mut self.im,
        }
    }
}

impl Reflect for Dynamic {
    fn shape() -> Shape {
        Shape::leaf::<Dynamic>(Kind::Dynamic)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Dynamic(self)
    }

    fn echo(&self) -> KeyEcho {
        match self {
            Dynamic::Str(s) => KeyEcho::Str(s.clone()),
            Dynamic::Int(i) => KeyEcho::I64(*i),
            Dynamic::Uint(u) => KeyEcho::U64(*u),
            Dynamic::Bool(b) => KeyEcho::Bool(*b),
            _ => KeyEcho::Opaque,
        }
    }
}

struct OptionProxy<'a, T>(&'a mut Option<T>);

impl<'a, T: Reflect + Default> OptionAccess for OptionProxy<'a, T> {
    fn clear(&mut self) {
        *self.0 = None;
    }

    fn activate(&mut self) -> Target<'_> {
        self.0.get_or_insert_with(T::default).target()
    }
}

impl<T: Reflect + Default> Reflect for Option<T> {
    fn shape() -> Shape {
        Shape::pointer::<Option<T>, T>()
    }

    fn node(&mut self) -> Node<'_> {
        Node::Option(Box::new(OptionProxy(self)))
    }
}

// Boxed values are always present, so a Box is transparent indirection: the
// inner value's shape, view, and echo.
impl<T: Reflect> Reflect for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn node(&mut self) -> Node<'_> {
        (**self).node()
    }

    fn echo(&self) -> KeyEcho {
        (**self).echo()
    }
}

struct VecProxy<'a, T>(&'a mut Vec<T>);

impl<'a, T: Reflect + Default> SeqAccess for VecProxy<'a, T> {
    fn resize(&mut self, len: usize) {
        self.0.clear();
        self.0.resize_with(len, T::default);
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn target_at(&mut self, index: usize) -> Target<'_> {
        self.0[index].target()
    }
}

impl<T: Reflect + Default> Reflect for Vec<T> {
    fn shape() -> Shape {
        Shape::leaf::<Vec<T>>(Kind::Seq)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Seq(Box::new(VecProxy(self)))
    }
}

struct ArrayProxy<'a, T>(&'a mut [T]);

impl<'a, T: Reflect> SeqAccess for ArrayProxy<'a, T> {
    fn resize(&mut self, _len: usize) {}

    fn len(&self) -> usize {
        self.0.len()
    }

    fn target_at(&mut self, index: usize) -> Target<'_> {
        self.0[index].target()
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape() -> Shape {
        Shape::leaf::<[T; N]>(Kind::Array)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Array(Box::new(ArrayProxy(self.as_mut_slice())))
    }
}

struct HashMapProxy<'a, K, V> {
    map: &'a mut HashMap<K, V>,
    key: K,
    value: V,
}

impl<'a, K, V> MapAccess for HashMapProxy<'a, K, V>
where
    K: Reflect + Default + Eq + Hash,
    V: Reflect + Default,
{
    fn clear(&mut self) {
        self.map.clear();
    }

    fn key_target(&mut self) -> Target<'_> {
        self.key.target()
    }

    fn key_echo(&self) -> KeyEcho {
        self.key.echo()
    }

    fn value_target(&mut self) -> Target<'_> {
        self.value.target()
    }

    fn commit(&mut self) {
        let key = mem::take(&mut self.key);
        let value = mem::take(&mut self.value);
        self.map.insert(key, value);
    }
}

impl<K, V> Reflect for HashMap<K, V>
where
    K: Reflect + Default + Eq + Hash,
    V: Reflect + Default,
{
    fn shape() -> Shape {
        Shape::leaf::<HashMap<K, V>>(Kind::Map)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Map(Box::new(HashMapProxy {
            map: self,
            key: K::default(),
            value: V::default(),
        }))
    }
}

struct BTreeMapProxy<'a, K, V> {
    map: &'a mut BTreeMap<K, V>,
    key: K,
    value: V,
}

impl<'a, K, V> MapAccess for BTreeMapProxy<'a, K, V>
where
    K: Reflect + Default + Ord,
    V: Reflect + Default,
{
    fn clear(&mut self) {
        self.map.clear();
    }

    fn key_target(&mut self) -> Target<'_> {
        self.key.target()
    }

    fn key_echo(&self) -> KeyEcho {
        self.key.echo()
    }

    fn value_target(&mut self) -> Target<'_> {
        self.value.target()
    }

    fn commit(&mut self) {
        let key = mem::take(&mut self.key);
        let value = mem::take(&mut self.value);
        self.map.insert(key, value);
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Default + Ord,
    V: Reflect + Default,
{
    fn shape() -> Shape {
        Shape::leaf::<BTreeMap<K, V>>(Kind::Map)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Map(Box::new(BTreeMapProxy {
            map: self,
            key: K::default(),
            value: V::default(),
        }))
    }
}

// The opaque leaves: present in realistic structures, never filled.

impl<T: 'static> Reflect for *const T {
    fn shape() -> Shape {
        Shape::leaf::<*const T>(Kind::Opaque)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Opaque
    }
}

impl<T: 'static> Reflect for *mut T {
    fn shape() -> Shape {
        Shape::leaf::<*mut T>(Kind::Opaque)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Opaque
    }
}

impl<T: 'static> Reflect for PhantomData<T> {
    fn shape() -> Shape {
        Shape::leaf::<PhantomData<T>>(Kind::Opaque)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Opaque
    }
}

impl Reflect for () {
    fn shape() -> Shape {
        Shape::leaf::<()>(Kind::Opaque)
    }

    fn node(&mut self) -> Node<'_> {
        Node::Opaque
    }
}
