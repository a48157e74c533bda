//! Object-like targets for [`to_object`](crate::arrays::to_object).

use super::{Key, OrderedMap, Value};

/// A structure whose members can be assigned by name.
///
/// Implementors decide how a member name maps onto their storage. Names that
/// the implementor does not recognize may be ignored.
///
/// # Examples
///
/// ```
/// use assoc::{arrays, map::{Key, ObjectLike, Value}, omap};
///
/// #[derive(Default)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl ObjectLike for Point {
///     fn set_member(&mut self, name: Key, value: Value) {
///         let Some(n) = value.as_int() else { return };
///         match name.as_text() {
///             Some("x") => self.x = n,
///             Some("y") => self.y = n,
///             _ => {}
///         }
///     }
/// }
///
/// let mut point = Point::default();
/// arrays::to_object(&omap! { "x" => 3, "y" => 4 }, &mut point);
/// assert_eq!((point.x, point.y), (3, 4));
/// ```
pub trait ObjectLike {
    /// Assigns `value` to the member `name`, replacing any previous value.
    fn set_member(&mut self, name: Key, value: Value);
}

impl ObjectLike for OrderedMap {
    fn set_member(&mut self, name: Key, value: Value) {
        self.insert(name, value);
    }
}

impl<T: ObjectLike + ?Sized> ObjectLike for &mut T {
    fn set_member(&mut self, name: Key, value: Value) {
        (**self).set_member(name, value);
    }
}
