/// Defines a named struct together with its [`Reflect`](crate::Reflect)
/// descriptor, exposing every listed field to the filling engine in
/// declaration order.
///
/// ```
/// refill::reflect_struct! {
///     #[derive(Debug, Default)]
///     pub struct Person {
///         pub name: String,
///         pub age: u8,
///     }
/// }
///
/// let mut person = Person::default();
/// refill::fill(&mut person).unwrap();
/// ```
#[macro_export]
macro_rules! reflect_struct {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fattr:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        $vis struct $name {
            $( $(#[$fattr])* $fvis $field: $fty, )*
        }

        impl $crate::Reflect for $name {
            fn shape() -> $crate::Shape {
                $crate::Shape::leaf::<$name>($crate::Kind::Struct)
            }

            fn node(&mut self) -> $crate::Node<'_> {
                $crate::Node::Struct(::std::vec![
                    $(
                        $crate::reflect::FieldSlot::new(
                            stringify!($field),
                            $crate::Reflect::target(&mut self.$field),
                        ),
                    )*
                ])
            }
        }
    };
}

/// Defines a single-field tuple struct that fills as its inner value while
/// keeping its own type identity for matcher discrimination.
///
/// ```
/// refill::reflect_newtype! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Score(pub i64);
/// }
///
/// let mut score = Score::default();
/// refill::fill(&mut score).unwrap();
/// ```
#[macro_export]
macro_rules! reflect_newtype {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident($fvis:vis $inner:ty);
    ) => {
        $(#[$attr])*
        $vis struct $name($fvis $inner);

        impl $crate::Reflect for $name {
            fn shape() -> $crate::Shape {
                $crate::Shape::newtype::<$name>(<$inner as $crate::Reflect>::shape())
            }

            fn node(&mut self) -> $crate::Node<'_> {
                $crate::Reflect::node(&mut self.0)
            }

            fn echo(&self) -> $crate::KeyEcho {
                $crate::Reflect::echo(&self.0)
            }
        }
    };
}
