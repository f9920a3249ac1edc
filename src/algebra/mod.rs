pub mod covector;
pub mod matrix;
pub mod point;
pub mod products;
pub mod vector;

pub use covector::{CoVector2, CoVector3};
pub use matrix::Matrix3;
pub use point::{barycentric, lerp, Point2, Point3};
pub use products::{projection, rejection, Cross, Dot, Outer};
pub use vector::{Vector2, Vector3};

/// Implements `scalar * value` for one concrete scalar type.
///
/// `impl<T> Mul<V<T>> for T` runs afoul of the orphan rules, so each
/// coordinate type gets a concrete impl per scalar instead.
macro_rules! impl_left_scalar_mul {
    ($scalar:ty => $name:ident { $($field:ident),+ }) => {
        impl ::std::ops::Mul<$name<$scalar>> for $scalar {
            type Output = $name<$scalar>;

            #[inline]
            fn mul(self, rhs: $name<$scalar>) -> $name<$scalar> {
                $name { $($field: self * rhs.$field),+ }
            }
        }
    };
}

pub(crate) use impl_left_scalar_mul;
