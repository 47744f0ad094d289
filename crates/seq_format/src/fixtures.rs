//! Schemas shared by the backend tests.

use seq_reflect::info::AttributeInfo;
use seq_reflect::{Schema, Walk, WalkMut};

macro_rules! schema {
    ($name:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        #[derive(Debug, Default, Clone, PartialEq)]
        pub(crate) struct $name {
            $(pub $field: $ty,)*
        }

        impl Schema for $name {
            const NAME: &'static str = stringify!($name);
            const ATTRIBUTES: &'static [AttributeInfo] = &[
                $(AttributeInfo::new::<$ty>(stringify!($field)),)*
            ];

            fn walk<W: Walk>(&self, walker: &mut W) -> Result<(), W::Error> {
                $(walker.attribute(&self.$field)?;)*
                Ok(())
            }

            fn walk_mut<W: WalkMut>(&mut self, walker: &mut W) -> Result<(), W::Error> {
                $(walker.attribute(&mut self.$field)?;)*
                Ok(())
            }
        }
    };
}

schema!(Abc { a: i64, b: i64, c: String });
schema!(Account { id: i64, name: String, active: bool });
schema!(Point { x: i64, y: i64 });
schema!(Inner { x: i64, y: String });
schema!(Outer { id: i64, inner: Inner, points: Vec<Point> });
schema!(Sample { ratio: f64, small: u8, blob: Vec<u8> });

impl Outer {
    pub(crate) fn sample() -> Self {
        Self {
            id: 7,
            inner: Inner {
                x: 3,
                y: String::from("abc"),
            },
            points: vec![
                Point { x: 1, y: 2 },
                Point { x: 3, y: 4 },
                Point { x: 5, y: 6 },
            ],
        }
    }
}
